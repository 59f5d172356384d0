//! scene2d: a small 2D actor/component scene editor
//!
//! Actors are built from components (transform, shape, texture), updated
//! every frame and drawn into an off-screen scene target shown inside an
//! editor with an outliner, inspector, console and actor factory.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod editor;
mod error;
mod game;
mod logging;
mod services;
mod ui;
mod window;

use macroquad::prelude::*;

use app::BaseApp;
use config::{AppConfig, CONFIG_FILE};
use logging::init_logging;
use services::NotificationService;

fn window_conf() -> Conf {
    // Runs before logging is up; problems with the file are reported later
    let config = AppConfig::load_from_file(CONFIG_FILE).unwrap_or_default();
    Conf {
        window_title: config.window.title,
        window_width: config.window.width as i32,
        window_height: config.window.height as i32,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    init_logging();
    log::info!("scene2d v{}", VERSION);

    let mut notifications = NotificationService::new();
    let config = AppConfig::load_or_default(CONFIG_FILE, &mut notifications);

    let mut app = BaseApp::new(config, notifications);
    if let Err(e) = app.initialize() {
        log::error!("initialization failed: {}", e);
        std::process::exit(1);
    }

    app.run().await;
}
