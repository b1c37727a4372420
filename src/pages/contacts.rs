//! Contact list page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::state::session::SessionState;

#[component]
pub fn ContactsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate);

    view! {
        <Navbar/>
        <main class="page contacts-page">
            <h1>"Contacts"</h1>
            <p class="page__hint">"People you share a channel with appear here."</p>
        </main>
    }
}
