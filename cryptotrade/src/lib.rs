//! # CryptoTrade Client - Library Root
//!
//! A **native desktop GUI** for a custodial crypto exchange account:
//! balances, deposits and withdrawals, buy/sell quotes, KYC and account
//! settings. This library crate contains all modules used by the binary
//! crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              cryptotrade (this crate)                  │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe  - Immediate-mode GUI, native window    │
//! │  egui-notify    - Toasts                               │
//! │  Tokio          - Async runtime for remote calls       │
//! │  Reqwest        - HTTP client                          │
//! │  rust_decimal   - Balances, prices, fees               │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ HTTP (auth + tables)         │ HTTP
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  Hosted backend │          │   Price API             │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: orchestrator, routes, event loop, handlers and background tasks
//! - **stores**: session and wallet caches shared with the tasks
//! - **services**: HTTP implementations of the service traits in **core**
//! - **dashboard**, **trade**, **verification**, **settings**: screen logic
//!   that does not touch egui, tested on its own
//! - **ui**: theme, widgets and one render module per route
//! - **config**: environment configuration
//! - **debug**: file logging and the panic hook
//! - **utils**: form validation
//!
//! ```text
//! main.rs
//!   ├── debug::init, ClientConfig::from_env
//!   ├── app::App (state, events, handlers, tasks)
//!   │     └── stores ──► core::service traits ◄── services::api
//!   └── ui::ClientWindow (eframe::App)
//!         └── ui::screens::* ──► dashboard, trade, verification, settings
//! ```
//!
//! ## Core Concepts
//!
//! User actions run on the UI thread, validate synchronously and spawn
//! remote calls on Tokio. Results come back as [`AppEvent`]s over an
//! unbounded channel and are applied in [`App::on_tick`]. State lives in
//! `Arc<parking_lot::RwLock<AppState>>`, locked briefly and never across an
//! await.
//!
//! ## Testing
//!
//! ```bash
//! cargo test --workspace
//! ```
//!
//! Stores and the app are tested against an in-memory fake backend
//! (`services::fake`).

pub mod app;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod debug;
pub mod services;
pub mod settings;
pub mod stores;
pub mod trade;
pub mod ui;
pub mod utils;
pub mod verification;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Route};
pub use config::ClientConfig;
pub use core::{AppError, Result};
