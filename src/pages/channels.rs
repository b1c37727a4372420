//! Channel list page — the home screen, linking to each channel's settings.

#[cfg(test)]
#[path = "channels_test.rs"]
mod channels_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::state::session::SessionState;

/// Name shown for channels created without one.
fn display_name(channel_name: Option<String>) -> String {
    match channel_name {
        Some(name) if !name.trim().is_empty() => name,
        _ => "Untitled channel".to_owned(),
    }
}

#[component]
pub fn ChannelsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate);

    let channels = LocalResource::new(move || {
        let token = session.with_untracked(|s| s.token.clone().unwrap_or_default());
        async move { crate::net::api::fetch_channel_list(&token).await }
    });

    view! {
        <Navbar/>
        <main class="page channels-page">
            <h1>"Channels"</h1>
            <Suspense fallback=move || view! { <p class="page__hint">"Loading channels..."</p> }>
                {move || {
                    channels.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="page__hint">"No channels yet."</p> }.into_any()
                        }
                        Ok(list) => view! {
                            <ul class="channels-page__list">
                                {list
                                    .into_iter()
                                    .map(|channel| {
                                        let name = display_name(channel.channel_name);
                                        let badge = channel.private_channel.then(|| {
                                            view! {
                                                <span class="channels-page__badge">"private"</span>
                                            }
                                        });
                                        view! {
                                            <li class="channels-page__item">
                                                <a
                                                    class="channels-page__link"
                                                    href=format!("/channel/{}", channel.channel_id)
                                                >
                                                    {name}
                                                </a>
                                                {badge}
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                        .into_any(),
                        Err(e) => view! {
                            <p class="page__error">{format!("Channels unavailable: {e}")}</p>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>
        </main>
    }
}
