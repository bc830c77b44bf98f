//! # CryptoTrade Client
//!
//! Thin entry point: logging, configuration, Tokio runtime, then the egui
//! event loop on the main thread.

use cryptotrade::config::ClientConfig;
use cryptotrade::ui::ClientWindow;
use cryptotrade::{debug, App};

fn main() -> eframe::Result {
    // Load environment variables
    dotenvy::dotenv().ok();
    debug::init();

    let config = match ClientConfig::from_env().and_then(|c| c.validate().map(|()| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Handlers spawn onto this runtime from the UI thread
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start async runtime");
            eprintln!("Failed to start async runtime: {}", e);
            std::process::exit(1);
        }
    };
    let _enter = runtime.enter();

    let app = App::new(&config);
    tracing::info!(api_url = %config.api_url, "Starting CryptoTrade");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("CryptoTrade")
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CryptoTrade",
        options,
        Box::new(|cc| Ok(Box::new(ClientWindow::new(cc, app)))),
    )
}
