//! # Core Abstractions
//!
//! Error types and service traits shared by the stores, app and services.
//!
//! - **[`error`]**: Application error type (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`AuthService`, `DataService`, `PriceService`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cryptotrade::core::service::DataService;
//!
//! // In production: the HTTP client
//! let data: Arc<dyn DataService> = Arc::new(ApiClient::new(config));
//!
//! // In tests: the in-memory fake
//! let data: Arc<dyn DataService> = Arc::new(FakeBackend::new());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{AuthService, DataService, PriceService};
