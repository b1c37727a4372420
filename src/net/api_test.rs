use super::*;

#[test]
fn api_base_is_a_single_http_origin() {
    assert!(api_base().starts_with("http"));
}

#[test]
fn join_endpoint_trims_trailing_base_slash() {
    assert_eq!(join_endpoint("http://localhost:6001/", "/users/u1"), "http://localhost:6001/users/u1");
    assert_eq!(join_endpoint("http://localhost:6001", "/users/u1"), "http://localhost:6001/users/u1");
}

#[test]
fn user_endpoint_formats_expected_path() {
    assert_eq!(user_endpoint(DEFAULT_API_BASE, "u123"), "http://localhost:6001/users/u123");
}

#[test]
fn channel_details_endpoint_formats_expected_path() {
    assert_eq!(
        channel_details_endpoint(DEFAULT_API_BASE, "c1"),
        "http://localhost:6001/channel/getChannelDetails/c1"
    );
}

#[test]
fn channel_list_endpoint_formats_expected_path() {
    assert_eq!(
        channel_list_endpoint(DEFAULT_API_BASE),
        "http://localhost:6001/channel/getChannelList"
    );
}

#[test]
fn update_channel_endpoint_formats_expected_path() {
    assert_eq!(
        update_channel_endpoint(DEFAULT_API_BASE, "c1"),
        "http://localhost:6001/channel/updateChannel/c1"
    );
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("tok-1"), "Bearer tok-1");
}

#[test]
fn profile_request_failed_message_formats_status() {
    assert_eq!(profile_request_failed_message(401), "profile request failed: 401");
}

#[test]
fn channel_request_failed_message_formats_status() {
    assert_eq!(channel_request_failed_message(404), "channel request failed: 404");
}

#[test]
fn update_request_failed_message_formats_status() {
    assert_eq!(update_request_failed_message(500), "update request failed: 500");
}
