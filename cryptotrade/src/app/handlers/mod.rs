//! # Event Handlers
//!
//! User action handlers, one module per screen. Handlers validate input,
//! record errors in the state and spawn remote calls whose results come back
//! as [`AppEvent`](crate::app::AppEvent)s.

pub mod auth;
pub mod dashboard;
pub mod navigation;
pub mod settings;
pub mod trade;
pub mod verification;
pub mod wallet;
