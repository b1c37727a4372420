//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    channel::ChannelPage, channels::ChannelsPage, contacts::ContactsPage, login::LoginPage,
    messages::MessagesPage,
};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Apply the stored theme once on the client and mirror it in the store.
    Effect::new(move || {
        let mode = crate::util::theme::read_preference();
        crate::util::theme::apply(mode);
        session.update(|s| s.set_theme_mode(mode));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/relay-client.css"/>
        <Title text="Relay"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=ChannelsPage/>
                <Route path=StaticSegment("contacts") view=ContactsPage/>
                <Route path=StaticSegment("messages") view=MessagesPage/>
                <Route path=(StaticSegment("channel"), ParamSegment("id")) view=ChannelPage/>
            </Routes>
        </Router>
    }
}
