//! Top navigation shell: brand, primary navigation, theme toggle, identity,
//! and logout, with desktop and mobile layouts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session context for the profile fetch and theme state. The
//! profile is fetched once per mount with untracked session reads, so
//! re-renders never refetch; only a remount does.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::net::types::UserProfile;
use crate::state::session::SessionState;
use crate::util::viewport::use_is_desktop;

/// The mobile slide-in panel is observable only below the breakpoint and
/// only while toggled open.
fn mobile_panel_visible(is_desktop: bool, menu_open: bool) -> bool {
    !is_desktop && menu_open
}

/// Error strip text when the profile fetch fails.
fn profile_error_message(error: &str) -> String {
    format!("Profile unavailable: {error}")
}

/// Navigation shell for every authenticated screen.
///
/// Renders nothing while the profile fetch is in flight and an error strip
/// when it fails; the full shell appears once the profile arrives.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let is_desktop = use_is_desktop();
    let menu_open = RwSignal::new(false);

    // One profile fetch per mount, keyed by the session's credentials. The
    // untracked reads keep later session writes from re-running the fetch.
    let profile = LocalResource::new(move || {
        let (token, user_id) = session.with_untracked(|s| {
            (
                s.token.clone().unwrap_or_default(),
                s.user_id.clone().unwrap_or_default(),
            )
        });
        async move { crate::net::api::fetch_user_profile(&token, &user_id).await }
    });

    view! {
        {move || match profile.get() {
            None => ().into_any(),
            Some(Err(e)) => view! {
                <header class="navbar navbar--error">
                    <span class="navbar__error-text">{profile_error_message(&e)}</span>
                </header>
            }
            .into_any(),
            Some(Ok(p)) => view! {
                <NavbarShell profile=p is_desktop=is_desktop menu_open=menu_open/>
            }
            .into_any(),
        }}
    }
}

#[component]
fn NavbarShell(
    profile: UserProfile,
    is_desktop: RwSignal<bool>,
    menu_open: RwSignal<bool>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let full_name = profile.full_name();
    let mobile_name = full_name.clone();

    let on_toggle_theme = move |_| {
        let next = crate::util::theme::toggle(session.get().theme);
        session.update(|s| s.set_theme_mode(next));
    };

    let on_logout = move |_| {
        session.update(SessionState::logout);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    let theme_glyph = move || if session.get().theme.is_dark() { "☀" } else { "☾" };

    view! {
        <header class="navbar">
            <a href="/" class="navbar__brand">"Relay"</a>

            <Show
                when=move || is_desktop.get()
                fallback=move || view! {
                    <button
                        class="btn navbar__menu-toggle"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                        title="Menu"
                    >
                        "☰"
                    </button>
                }
            >
                <nav class="navbar__links">
                    <a href="/contacts" class="navbar__link">"Contacts"</a>
                    <a href="/" class="navbar__link">"Channels"</a>
                    <a href="/messages" class="navbar__link">"Messages"</a>
                </nav>
                <span class="navbar__spacer"></span>
                <button class="btn navbar__theme-toggle" on:click=on_toggle_theme title="Toggle theme">
                    {theme_glyph}
                </button>
                <span class="navbar__self">{full_name.clone()}</span>
                <button class="btn navbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </Show>

            <Show when=move || mobile_panel_visible(is_desktop.get(), menu_open.get())>
                <div class="navbar__mobile-panel">
                    <button
                        class="btn navbar__menu-close"
                        on:click=move |_| menu_open.set(false)
                        title="Close menu"
                    >
                        "✕"
                    </button>
                    <nav class="navbar__mobile-links">
                        <a href="/contacts" class="navbar__link">"Contacts"</a>
                        <a href="/" class="navbar__link">"Channels"</a>
                        <a href="/messages" class="navbar__link">"Messages"</a>
                    </nav>
                    <button class="btn navbar__theme-toggle" on:click=on_toggle_theme title="Toggle theme">
                        {theme_glyph}
                    </button>
                    <span class="navbar__self">{mobile_name.clone()}</span>
                    <button class="btn navbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </div>
            </Show>
        </header>
    }
}
