//! # Screen Modules
//!
//! One module per route:
//!
//! - **[`auth`]**: sign-in and sign-up forms (`/auth`)
//! - **[`dashboard`]**: balance, referrals, quick actions, recent activity (`/`)
//! - **[`trade`]**: buy/sell form with fee breakdown (`/trade`)
//! - **[`wallet`]**: balances, deposit/withdraw form, history (`/wallet`)
//! - **[`verification`]**: three-step KYC wizard (`/verification`)
//! - **[`settings`]**: tabbed account settings (`/settings`)
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
//!     // read from the snapshot, write edits back through app.state(),
//!     // call app.handle_* for actions
//! }
//! ```
//!
//! Screens receive a **cloned state snapshot**, so no lock is held while
//! widgets are laid out. Text edits are written back with a short write
//! lock only when the widget reports a change; everything else goes
//! through the `AppLike` handlers.

pub mod auth;
pub mod dashboard;
pub mod settings;
pub mod trade;
pub mod verification;
pub mod wallet;
