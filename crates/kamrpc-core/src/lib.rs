//! # kamrpc-core
//!
//! Core library for the kamrpc presence companion.
//!
//! This crate provides:
//! - Save-file field decoding (the crystal counter)
//! - Window title location and parsing (deaths, elapsed time)
//! - Status aggregation and presence text formatting
//! - The change-gated tracking loop

pub mod config;
pub mod error;
pub mod presence;
pub mod save;
pub mod shutdown;
pub mod status;
pub mod title;
pub mod tracker;
pub mod window;

pub use config::{Config, DEFAULT_WINDOW_MARKER};
pub use error::{Error, Result};
pub use presence::{DiscordPresence, PresenceSink, select_icon_key};
pub use save::{Endianness, FieldSpec, decode_unsigned, read_field};
pub use shutdown::ShutdownSignal;
pub use status::{GameStatus, Phase, PresenceFields};
pub use title::{PlayStats, parse_title};
pub use tracker::Tracker;
pub use window::{DesktopWindows, WindowTitles};
