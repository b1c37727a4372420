use super::*;

fn details(name: Option<&str>, description: Option<&str>, private: bool) -> ChannelDetails {
    ChannelDetails {
        channel_id: "c1".to_owned(),
        channel_name: name.map(str::to_owned),
        channel_description: description.map(str::to_owned),
        private_channel: private,
    }
}

// =============================================================
// Draft seeding
// =============================================================

#[test]
fn draft_seeds_all_fields_from_snapshot() {
    let draft = ChannelDraft::from_details(&details(Some("General"), Some("desc"), false));
    assert_eq!(draft.name, "General");
    assert_eq!(draft.description, "desc");
    assert!(!draft.private);
}

#[test]
fn draft_seeds_missing_text_fields_as_empty_strings() {
    let draft = ChannelDraft::from_details(&details(None, None, true));
    assert_eq!(draft.name, "");
    assert_eq!(draft.description, "");
    assert!(draft.private);
}

// =============================================================
// Full-replacement payloads
// =============================================================

#[test]
fn untouched_draft_commits_the_seeded_values() {
    let draft = ChannelDraft::from_details(&details(Some("General"), Some("desc"), false));
    let update = draft.to_update();
    assert_eq!(update.channel_name, "General");
    assert_eq!(update.channel_description, "desc");
    assert!(!update.private_channel);
}

#[test]
fn visibility_toggle_keeps_other_fields_in_payload() {
    let mut draft = ChannelDraft::from_details(&details(Some("General"), Some("desc"), false));
    draft.private = true;
    assert_eq!(
        serde_json::to_value(draft.to_update()).unwrap(),
        serde_json::json!({
            "channelName": "General",
            "channelDescription": "desc",
            "privateChannel": true,
        })
    );
}

#[test]
fn every_draft_combination_commits_all_three_fields() {
    for name in ["", "General"] {
        for description in ["", "desc"] {
            for private in [false, true] {
                let draft = ChannelDraft {
                    name: name.to_owned(),
                    description: description.to_owned(),
                    private,
                };
                let payload = serde_json::to_value(draft.to_update()).unwrap();
                let object = payload.as_object().unwrap();
                assert_eq!(object.len(), 3);
                assert_eq!(object["channelName"], name);
                assert_eq!(object["channelDescription"], description);
                assert_eq!(object["privateChannel"], private);
            }
        }
    }
}

// =============================================================
// Commit status
// =============================================================

#[test]
fn commit_status_message_reports_success() {
    assert_eq!(commit_status_message(&Ok(())), "Saved");
}

#[test]
fn commit_status_message_reports_failure() {
    assert_eq!(
        commit_status_message(&Err("update request failed: 500".to_owned())),
        "Update failed: update request failed: 500"
    );
}
