//! Floatball - floating clipboard snippet keeper
//!
//! An always-on-top icon that saves clipboard text into a persistent list
//! and copies saved snippets back from a popup.

use anyhow::Result;
use floatball::gui;
use floatball::utils;
use floatball::ApplicationState;
use iced::Application;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Best-effort; never blocks startup
    if let Err(e) = utils::register_autostart() {
        warn!("{}", e);
    }

    let state = ApplicationState::load_default();
    info!("Starting with {} saved snippets", state.items().len());

    let mut settings = iced::Settings::with_flags(state);
    settings.window = gui::window_settings();
    settings.antialiasing = true;

    gui::FloatballApp::run(settings)?;

    Ok(())
}
