//! Presence service seam.

use std::path::Path;

use discord_rich_presence::activity::{Activity, Assets};
use discord_rich_presence::{DiscordIpc, DiscordIpcClient};

use crate::error::{Error, Result};
use crate::status::PresenceFields;

/// Sink for formatted status updates.
///
/// The tracker only ever calls [`PresenceSink::update`]; swapping the sink
/// keeps the loop testable without a running Discord client.
pub trait PresenceSink {
    fn update(&mut self, fields: &PresenceFields, large_image_key: &str) -> Result<()>;
}

/// Discord IPC-backed sink.
pub struct DiscordPresence {
    client: DiscordIpcClient,
}

impl DiscordPresence {
    /// Open the IPC socket to the local Discord client.
    ///
    /// Failing to connect at startup is fatal; mid-run update failures are
    /// the tracker's fail-soft concern, not this constructor's.
    pub fn connect(client_id: &str) -> Result<Self> {
        let mut client =
            DiscordIpcClient::new(client_id).map_err(|e| Error::Presence(e.to_string()))?;
        client
            .connect()
            .map_err(|e| Error::Presence(e.to_string()))?;
        Ok(Self { client })
    }
}

impl PresenceSink for DiscordPresence {
    fn update(&mut self, fields: &PresenceFields, large_image_key: &str) -> Result<()> {
        let activity = Activity::new()
            .state(&fields.state)
            .details(&fields.details)
            .assets(
                Assets::new()
                    .large_image(large_image_key)
                    .small_text(&fields.small_text),
            );

        self.client
            .set_activity(activity)
            .map_err(|e| Error::Presence(e.to_string()))
    }
}

/// Pick the large-image key once at startup: the custom key when a matching
/// PNG exists in the icon folder, the default key otherwise. Never
/// re-evaluated during a run.
pub fn select_icon_key<'a>(icon_folder: &Path, custom: &'a str, default: &'a str) -> &'a str {
    if icon_folder.join(format!("{custom}.png")).is_file() {
        custom
    } else {
        default
    }
}
