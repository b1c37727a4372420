//! Direct messages page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::state::session::SessionState;

#[component]
pub fn MessagesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate);

    view! {
        <Navbar/>
        <main class="page messages-page">
            <h1>"Messages"</h1>
            <p class="page__hint">"Your direct message threads appear here."</p>
        </main>
    }
}
