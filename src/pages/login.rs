//! Session bootstrap page — installs a user id and API token into the
//! session store. Authentication itself happens outside this client; this
//! screen only seeds the store and sends the user back to the home screen.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Trimmed `(user_id, token)` pair, or a message naming what's missing.
fn validate_bootstrap_input(user_id: &str, token: &str) -> Result<(String, String), &'static str> {
    let user_id = user_id.trim();
    let token = token.trim();
    if user_id.is_empty() || token.is_empty() {
        return Err("Enter both a user id and a token.");
    }
    Ok((user_id.to_owned(), token.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let user_id = RwSignal::new(String::new());
    let token = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_bootstrap_input(&user_id.get(), &token.get()) {
            Ok((user_id_value, token_value)) => {
                session.update(|s| s.sign_in(user_id_value, token_value));
                navigate("/", NavigateOptions::default());
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Relay"</h1>
                <p class="login-card__subtitle">"Resume a session"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="User id"
                        prop:value=move || user_id.get()
                        on:input=move |ev| user_id.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="API token"
                        prop:value=move || token.get()
                        on:input=move |ev| token.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Continue"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
