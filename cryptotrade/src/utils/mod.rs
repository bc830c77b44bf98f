//! # Utility Functions
//!
//! - **[`validation`]**: Form input checks shared by the auth and wallet screens
//!
//! Currency formatting lives in [`shared::utils`].

pub mod validation;
