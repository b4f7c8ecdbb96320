//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `dirty`, `toast`, etc.) so individual
//! components can depend on small focused models.

pub mod auth;
pub mod dirty;
pub mod dirty_store;
pub mod session;
pub mod toast;
