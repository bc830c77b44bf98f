//! # Logging
//!
//! File-based structured logging for the client.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `cryptotrade=info,warn`)
//! - `CRYPTOTRADE_LOG_DIR`: Directory for rotated logs (default `logs`)
//!
//! Call [`init`] once at startup, before the UI is created.

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init;
