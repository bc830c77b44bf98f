//! # Async Tasks
//!
//! Background fetches. Each task clones what it needs out of the state,
//! releases the lock, awaits the remote call and reports back with an
//! [`AppEvent`](crate::app::AppEvent).

pub mod data;
pub mod price;
