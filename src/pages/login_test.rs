use super::*;

#[test]
fn validate_bootstrap_input_trims_both_fields() {
    assert_eq!(
        validate_bootstrap_input("  u1  ", "  tok  "),
        Ok(("u1".to_owned(), "tok".to_owned()))
    );
}

#[test]
fn validate_bootstrap_input_requires_user_id() {
    assert_eq!(
        validate_bootstrap_input("   ", "tok"),
        Err("Enter both a user id and a token.")
    );
}

#[test]
fn validate_bootstrap_input_requires_token() {
    assert_eq!(
        validate_bootstrap_input("u1", ""),
        Err("Enter both a user id and a token.")
    );
}
