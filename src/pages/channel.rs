//! Channel settings page — owns the authoritative channel record and
//! refetches it whenever the edit form signals a refresh.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::channel_edit_form::ChannelEditForm;
use crate::components::navbar::Navbar;
use crate::state::session::SessionState;

#[component]
pub fn ChannelPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate);

    let params = use_params_map();
    let refresh = RwSignal::new(false);

    // Tracks the refresh flag and the route param: every flag flip (and
    // every navigation to another channel) re-reads the authoritative
    // record. The edit form itself never mutates this copy.
    let channel = LocalResource::new(move || {
        refresh.track();
        let channel_id = params.read().get("id").unwrap_or_default();
        let token = session.with_untracked(|s| s.token.clone().unwrap_or_default());
        async move { crate::net::api::fetch_channel_details(&token, &channel_id).await }
    });

    let on_refresh = Callback::new(move |()| refresh.update(|flag| *flag = !*flag));

    view! {
        <Navbar/>
        <main class="page channel-page">
            <h1>"Channel Settings"</h1>
            <Suspense fallback=move || view! { <p class="page__hint">"Loading channel..."</p> }>
                {move || {
                    channel.get().map(|result| match result {
                        Ok(details) => view! {
                            <ChannelEditForm channel=details on_refresh=on_refresh/>
                        }
                        .into_any(),
                        Err(e) => view! {
                            <p class="page__error">{format!("Channel unavailable: {e}")}</p>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>
        </main>
    }
}
