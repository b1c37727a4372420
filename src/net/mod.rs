//! Networking modules for the REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles HTTP calls to the messaging backend and `types` defines
//! the shared wire schema.

pub mod api;
pub mod types;
