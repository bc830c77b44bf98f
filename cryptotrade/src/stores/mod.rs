//! # Stores
//!
//! Client-side caches of backend state. Each store is a cheap `Clone`
//! handle around `Arc<RwLock<_>>` data plus the service traits it talks to,
//! so handlers can move a copy into a spawned task.
//!
//! - [`session::SessionStore`]: identity and profile of the signed-in user
//! - [`wallet::WalletStore`]: wallets, transaction history, deposit and withdrawal requests
//!
//! Locks are only taken between awaits, never across one.

pub mod session;
pub mod wallet;

pub use session::{SessionData, SessionStore};
pub use wallet::{WalletData, WalletStore};
