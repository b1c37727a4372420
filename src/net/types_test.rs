use super::*;

// =============================================================
// UserProfile
// =============================================================

#[test]
fn user_profile_deserializes_camel_case_fields() {
    let profile: UserProfile =
        serde_json::from_value(serde_json::json!({ "firstName": "Ada", "lastName": "Lovelace" }))
            .unwrap();
    assert_eq!(profile.first_name, "Ada");
    assert_eq!(profile.last_name, "Lovelace");
}

#[test]
fn user_profile_full_name_joins_with_single_space() {
    let profile = UserProfile {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
    };
    assert_eq!(profile.full_name(), "Ada Lovelace");
}

#[test]
fn user_profile_ignores_extra_response_fields() {
    let profile: UserProfile = serde_json::from_value(serde_json::json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "_id": "u1",
        "email": "ada@example.com",
    }))
    .unwrap();
    assert_eq!(profile.full_name(), "Ada Lovelace");
}

// =============================================================
// ChannelDetails
// =============================================================

#[test]
fn channel_details_deserializes_complete_record() {
    let details: ChannelDetails = serde_json::from_value(serde_json::json!({
        "channelId": "c1",
        "channelName": "General",
        "channelDescription": "desc",
        "privateChannel": false,
    }))
    .unwrap();
    assert_eq!(details.channel_id, "c1");
    assert_eq!(details.channel_name.as_deref(), Some("General"));
    assert_eq!(details.channel_description.as_deref(), Some("desc"));
    assert!(!details.private_channel);
}

#[test]
fn channel_details_tolerates_missing_text_fields() {
    let details: ChannelDetails = serde_json::from_value(serde_json::json!({
        "channelId": "c2",
        "privateChannel": true,
    }))
    .unwrap();
    assert_eq!(details.channel_name, None);
    assert_eq!(details.channel_description, None);
    assert!(details.private_channel);
}

#[test]
fn channel_details_tolerates_null_text_fields() {
    let details: ChannelDetails = serde_json::from_value(serde_json::json!({
        "channelId": "c3",
        "channelName": null,
        "channelDescription": null,
        "privateChannel": false,
    }))
    .unwrap();
    assert_eq!(details.channel_name, None);
    assert_eq!(details.channel_description, None);
}

// =============================================================
// ChannelUpdate
// =============================================================

#[test]
fn channel_update_serializes_all_fields_camel_case() {
    let update = ChannelUpdate {
        channel_name: "General".to_owned(),
        channel_description: "desc".to_owned(),
        private_channel: true,
    };
    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        serde_json::json!({
            "channelName": "General",
            "channelDescription": "desc",
            "privateChannel": true,
        })
    );
}

#[test]
fn channel_update_serializes_empty_strings_not_null() {
    let update = ChannelUpdate {
        channel_name: String::new(),
        channel_description: String::new(),
        private_channel: false,
    };
    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        serde_json::json!({
            "channelName": "",
            "channelDescription": "",
            "privateChannel": false,
        })
    );
}

// =============================================================
// ChannelSummary
// =============================================================

#[test]
fn channel_summary_deserializes_list_row() {
    let summary: ChannelSummary = serde_json::from_value(serde_json::json!({
        "channelId": "c1",
        "channelName": "General",
        "privateChannel": false,
    }))
    .unwrap();
    assert_eq!(summary.channel_id, "c1");
    assert_eq!(summary.channel_name.as_deref(), Some("General"));
    assert!(!summary.private_channel);
}
