//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and editing surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod resume_editor;
pub mod toast_host;
pub mod unsaved_badge;
