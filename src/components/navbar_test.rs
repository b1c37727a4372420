use super::*;

// =============================================================
// Mobile panel visibility
// =============================================================

#[test]
fn mobile_panel_requires_mobile_layout_and_open_menu() {
    assert!(mobile_panel_visible(false, true));
}

#[test]
fn mobile_panel_hidden_while_menu_closed() {
    assert!(!mobile_panel_visible(false, false));
}

#[test]
fn open_menu_has_no_effect_on_desktop() {
    assert!(!mobile_panel_visible(true, true));
    assert!(!mobile_panel_visible(true, false));
}

// =============================================================
// Error strip
// =============================================================

#[test]
fn profile_error_message_includes_cause() {
    assert_eq!(
        profile_error_message("profile request failed: 401"),
        "Profile unavailable: profile request failed: 401"
    );
}

// =============================================================
// Displayed identity
// =============================================================

#[test]
fn displayed_name_matches_profile_exactly() {
    let profile = UserProfile {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
    };
    assert_eq!(profile.full_name(), "Ada Lovelace");
}
