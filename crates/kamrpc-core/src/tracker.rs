//! The change-gated polling loop.
//!
//! One tick: locate the game window, decode the save-file counter, derive
//! a status, format the presence fields, and forward them only when they
//! differ from the last successfully sent fields.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::presence::PresenceSink;
use crate::save::{self, FieldSpec};
use crate::shutdown::ShutdownSignal;
use crate::status::{GameStatus, PresenceFields};
use crate::title::parse_title;
use crate::window::WindowTitles;

pub struct Tracker<W, P> {
    windows: W,
    sink: P,
    marker: String,
    save_path: PathBuf,
    crystal_field: FieldSpec,
    icon_key: String,
    interval: Duration,

    /// Last fields the sink accepted. `None` until the first send succeeds,
    /// so the very first tick always forwards.
    last_sent: Option<PresenceFields>,
    /// Set once a matching window has been seen; never reset. Distinguishes
    /// "waiting for the game" from "the game went away".
    seen_before: bool,
}

impl<W: WindowTitles, P: PresenceSink> Tracker<W, P> {
    pub fn new(windows: W, sink: P, config: &Config, icon_key: String) -> Self {
        Self {
            windows,
            sink,
            marker: config.window_marker.clone(),
            save_path: config.save_crystals_path.clone(),
            crystal_field: config.crystal_field(),
            icon_key,
            interval: config.poll_interval(),
            last_sent: None,
            seen_before: false,
        }
    }

    /// Poll until `shutdown` is triggered. The first tick runs immediately;
    /// the wait between ticks is interruptible.
    pub fn run(&mut self, shutdown: &ShutdownSignal) {
        info!(
            "Tracking '{}' every {:.1}s",
            self.marker,
            self.interval.as_secs_f64()
        );

        loop {
            self.tick();
            if shutdown.wait(self.interval) {
                break;
            }
        }
    }

    /// One poll cycle. The window search and the save-file read are
    /// independent axes; either can come up empty on any tick.
    pub fn tick(&mut self) {
        let title = self.windows.find_title(&self.marker);
        let crystals = save::read_field(&self.save_path, &self.crystal_field);

        let title_found = title.is_some();
        let parsed = title.as_deref().and_then(parse_title);
        let status = GameStatus::derive(title_found, parsed, crystals, self.seen_before);
        self.seen_before = self.seen_before || title_found;

        let fields = PresenceFields::from_status(&status);
        if self.last_sent.as_ref() == Some(&fields) {
            return;
        }

        info!(
            "Status changed [{}]: {} | {}",
            status.phase, fields.state, fields.small_text
        );
        debug!("Details: {:?}", fields.details);

        match self.sink.update(&fields, &self.icon_key) {
            // Latch only on success: a failed send leaves `last_sent` stale
            // so the next tick re-attempts the same fields.
            Ok(()) => self.last_sent = Some(fields),
            Err(e) => warn!("{e}"),
        }
    }
}
