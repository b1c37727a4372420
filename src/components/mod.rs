//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navigation shell and resource forms while reading
//! shared session state from Leptos context providers.

pub mod channel_edit_form;
pub mod navbar;
