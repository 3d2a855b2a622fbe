//! Status aggregation and presence text formatting.

use strum::Display;

use crate::title::PlayStats;

/// Coarse game phase, derived fresh on every poll tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Phase {
    /// No matching window has been seen yet this run.
    #[strum(serialize = "waiting")]
    Waiting,
    #[strum(serialize = "in-game")]
    InGame,
    #[strum(serialize = "in-menu")]
    InMenu,
    /// A matching window was seen earlier but is gone now.
    #[strum(serialize = "lost")]
    LostProcess,
}

/// One tick's normalized view of the game. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStatus {
    pub phase: Phase,
    pub deaths: Option<u64>,
    pub elapsed_secs: Option<u64>,
    pub crystals: Option<u64>,
}

impl GameStatus {
    /// Combine one tick's observations into a status value.
    ///
    /// `seen_before` distinguishes "not started yet" from "was running and
    /// is gone". The caller keeps that flag monotonic; it is never reset.
    /// Crystals ride along independently of the phase.
    pub fn derive(
        title_found: bool,
        parsed: Option<PlayStats>,
        crystals: Option<u64>,
        seen_before: bool,
    ) -> Self {
        let (phase, deaths, elapsed_secs) = match (title_found, parsed) {
            (true, Some(stats)) => (Phase::InGame, Some(stats.deaths), Some(stats.elapsed_secs)),
            (true, None) => (Phase::InMenu, None, None),
            (false, _) if seen_before => (Phase::LostProcess, None, None),
            (false, _) => (Phase::Waiting, None, None),
        };

        Self {
            phase,
            deaths,
            elapsed_secs,
            crystals,
        }
    }
}

/// The three strings shown by the presence UI.
///
/// Update gating compares these, not [`GameStatus`]: two statuses that
/// format identically are the same update as far as the service goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceFields {
    pub state: String,
    pub details: String,
    pub small_text: String,
}

impl PresenceFields {
    pub fn from_status(status: &GameStatus) -> Self {
        let state = match status.crystals {
            Some(n) => format!("Crystals: {n}"),
            None => "Crystals: ?".to_string(),
        };

        let (details, small_text) = match status.phase {
            Phase::InGame => {
                let deaths = status.deaths.unwrap_or(0);
                let elapsed = status.elapsed_secs.unwrap_or(0);
                (
                    format!("Deaths: {}\nTime:   {}", deaths, format_hms(elapsed)),
                    "In Game".to_string(),
                )
            }
            Phase::InMenu => ("In Menu".to_string(), "In Menu".to_string()),
            Phase::LostProcess => ("Process not found".to_string(), "Not Running".to_string()),
            Phase::Waiting => ("Waiting for process…".to_string(), "…".to_string()),
        };

        Self {
            state,
            details,
            small_text,
        }
    }
}

/// `HH:MM:SS`, each field zero-padded to two digits.
fn format_hms(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
