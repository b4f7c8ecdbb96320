//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod auth_callback;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
/// Where the identity provider sends the browser after sign-in.
pub const CALLBACK_PATH: &str = "/auth/callback";
