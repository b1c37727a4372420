use super::*;

#[test]
fn display_name_keeps_real_names() {
    assert_eq!(display_name(Some("General".to_owned())), "General");
}

#[test]
fn display_name_falls_back_for_missing_names() {
    assert_eq!(display_name(None), "Untitled channel");
}

#[test]
fn display_name_falls_back_for_blank_names() {
    assert_eq!(display_name(Some("   ".to_owned())), "Untitled channel");
}
