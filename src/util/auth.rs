//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect
//! behavior against the session store.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Whether a session warrants redirecting to the login screen.
pub fn should_redirect_unauth(session: &SessionState) -> bool {
    !session.is_logged_in()
}

/// Redirect to `/login` whenever the session has no credentials.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
