//! Application state shared via Leptos context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` holds the cross-component session record (token, identity,
//! theme). Pages and components receive it as an explicit `RwSignal`
//! context rather than reaching for ambient globals.

pub mod session;
