//! Network modules for the host API and the identity provider.
//!
//! DESIGN
//! ======
//! DTOs live in `types`; `api` talks to the host and `identity` to the
//! external sign-in provider.

pub mod api;
pub mod identity;
pub mod types;
