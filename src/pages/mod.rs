//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, fetch-on-mount,
//! refresh flags) and delegates rendering details to `components`.

pub mod channel;
pub mod channels;
pub mod contacts;
pub mod login;
pub mod messages;
