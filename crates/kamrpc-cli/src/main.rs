use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use kamrpc_core::{
    Config, DesktopWindows, DiscordPresence, ShutdownSignal, Tracker, select_icon_key,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod input;

#[derive(Parser)]
#[command(name = "kamrpc")]
#[command(about = "Discord Rich Presence companion for I Wanna Kill The Kamilia 3")]
struct Args {
    /// Path to the JSON configuration file.
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("kamrpc_core=info".parse()?)
                .add_directive("kamrpc_cli=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(c) => c,
        Err(e) if e.is_not_found() => {
            bail!(
                "Cannot find {:?}. Create it next to the binary; see config.example.json.",
                args.config
            );
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to load config from {:?}", args.config));
        }
    };
    info!("Loaded config from {:?}", args.config);
    debug!(
        "Crystal field: {} byte(s) at offset {:#x} ({}-endian, divisor {})",
        config.crystal_size, config.crystal_offset, config.crystal_endian, config.crystal_divisor
    );

    let icon_key = select_icon_key(
        &config.icon_folder,
        &config.custom_icon_key,
        &config.default_icon_key,
    )
    .to_string();
    debug!("Large image key: {icon_key}");

    let presence = DiscordPresence::connect(&config.client_id)
        .context("Failed to connect to the Discord client (is Discord running?)")?;

    let shutdown = Arc::new(ShutdownSignal::new());
    let shutdown_ctrlc = Arc::clone(&shutdown);
    ctrlc::set_handler(move || {
        info!("Received shutdown signal, stopping...");
        shutdown_ctrlc.trigger();
    })?;
    let _keyboard_handle = input::spawn_keyboard_monitor(Arc::clone(&shutdown));

    println!("Rich presence started. Waiting for game... (Press Esc or q to quit)");

    let mut tracker = Tracker::new(DesktopWindows, presence, &config, icon_key);
    tracker.run(&shutdown);

    info!("Shutdown complete");
    Ok(())
}
