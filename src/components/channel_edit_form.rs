//! Channel settings form: name, description, and visibility, committed as
//! one full-replacement update.
//!
//! SYSTEM CONTEXT
//! ==============
//! The parent page owns the authoritative channel record. This form edits a
//! local draft and signals the parent to re-read the record after every
//! commit; it never patches its own copy from the response.

#[cfg(test)]
#[path = "channel_edit_form_test.rs"]
mod channel_edit_form_test;

use leptos::prelude::*;

use crate::net::types::{ChannelDetails, ChannelUpdate};
use crate::state::session::SessionState;

/// Local, unsaved copy of the channel's editable fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChannelDraft {
    pub name: String,
    pub description: String,
    pub private: bool,
}

impl ChannelDraft {
    /// Seed a draft from the authoritative snapshot. Missing text fields
    /// become empty strings so the inputs stay controlled.
    pub fn from_details(details: &ChannelDetails) -> Self {
        Self {
            name: details.channel_name.clone().unwrap_or_default(),
            description: details.channel_description.clone().unwrap_or_default(),
            private: details.private_channel,
        }
    }

    /// Serialize the complete draft. Untouched fields keep their seeded
    /// values; a commit never sends a partial payload.
    pub fn to_update(&self) -> ChannelUpdate {
        ChannelUpdate {
            channel_name: self.name.clone(),
            channel_description: self.description.clone(),
            private_channel: self.private,
        }
    }
}

/// Status line shown under the submit button after a commit settles.
#[cfg(any(test, feature = "hydrate"))]
fn commit_status_message(result: &Result<(), String>) -> String {
    match result {
        Ok(()) => "Saved".to_owned(),
        Err(e) => format!("Update failed: {e}"),
    }
}

/// Edit form for one channel's name, description, and visibility.
///
/// `on_refresh` runs exactly once per commit after the request settles,
/// success or failure, so the parent re-reads the authoritative record.
#[component]
pub fn ChannelEditForm(channel: ChannelDetails, on_refresh: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let draft = ChannelDraft::from_details(&channel);
    let name = RwSignal::new(draft.name);
    let description = RwSignal::new(draft.description);
    let private = RwSignal::new(draft.private);
    let busy = RwSignal::new(false);
    let status = RwSignal::new(String::new());
    let channel_id = channel.channel_id;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        status.set(String::new());

        let update = ChannelDraft {
            name: name.get(),
            description: description.get(),
            private: private.get(),
        }
        .to_update();
        let channel_id = channel_id.clone();
        let token = session.with_untracked(|s| s.token.clone()).unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::update_channel(&token, &channel_id, &update).await;
            status.set(commit_status_message(&result));
            busy.set(false);
            on_refresh.run(());
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (update, channel_id, token, on_refresh);
            busy.set(false);
        }
    };

    view! {
        <form class="channel-form" on:submit=on_submit>
            <label class="channel-form__label">
                "Channel Name"
                <input
                    class="channel-form__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>

            <label class="channel-form__label">
                "Channel Description"
                <textarea
                    class="channel-form__input channel-form__input--multiline"
                    rows="4"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>

            <div class="channel-form__visibility" role="radiogroup">
                <label class="channel-form__radio">
                    <input
                        type="radio"
                        name="channel-visibility"
                        prop:checked=move || !private.get()
                        on:change=move |_| private.set(false)
                    />
                    "Public channel"
                </label>
                <label class="channel-form__radio">
                    <input
                        type="radio"
                        name="channel-visibility"
                        prop:checked=move || private.get()
                        on:change=move |_| private.set(true)
                    />
                    "Private channel"
                </label>
            </div>

            <button
                class="btn btn--primary channel-form__submit"
                type="submit"
                disabled=move || busy.get()
            >
                {move || if busy.get() { "Updating..." } else { "Update Channel" }}
            </button>

            <Show when=move || !status.get().is_empty()>
                <p class="channel-form__status">{move || status.get()}</p>
            </Show>
        </form>
    }
}
