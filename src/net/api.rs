//! REST API helpers for communicating with the messaging backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying the
//! session's bearer token. Server-side (SSR): stubs returning errors since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so profile/channel fetch
//! failures degrade UI behavior without crashing hydration. Non-2xx
//! statuses map to the tested message builders below.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChannelDetails, ChannelSummary, ChannelUpdate, UserProfile};

/// Backend origin used when `RELAY_API_URL` is not set at build time.
#[cfg(any(test, feature = "hydrate"))]
const DEFAULT_API_BASE: &str = "http://localhost:6001";

/// Backend base URL. Every endpoint resolves against this one value; the
/// build-time `RELAY_API_URL` environment variable overrides the default.
#[cfg(any(test, feature = "hydrate"))]
fn api_base() -> &'static str {
    option_env!("RELAY_API_URL").unwrap_or(DEFAULT_API_BASE)
}

#[cfg(any(test, feature = "hydrate"))]
fn join_endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(base: &str, user_id: &str) -> String {
    join_endpoint(base, &format!("/users/{user_id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn channel_details_endpoint(base: &str, channel_id: &str) -> String {
    join_endpoint(base, &format!("/channel/getChannelDetails/{channel_id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn channel_list_endpoint(base: &str) -> String {
    join_endpoint(base, "/channel/getChannelList")
}

#[cfg(any(test, feature = "hydrate"))]
fn update_channel_endpoint(base: &str, channel_id: &str) -> String {
    join_endpoint(base, &format!("/channel/updateChannel/{channel_id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_request_failed_message(status: u16) -> String {
    format!("profile request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn channel_request_failed_message(status: u16) -> String {
    format!("channel request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn update_request_failed_message(status: u16) -> String {
    format!("update request failed: {status}")
}

/// Fetch a user's profile from `GET /users/{userId}`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body does not parse.
pub async fn fetch_user_profile(token: &str, user_id: &str) -> Result<UserProfile, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = user_endpoint(api_base(), user_id);
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(profile_request_failed_message(resp.status()));
        }
        resp.json::<UserProfile>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch the authoritative channel record from
/// `GET /channel/getChannelDetails/{channelId}`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body does not parse.
pub async fn fetch_channel_details(token: &str, channel_id: &str) -> Result<ChannelDetails, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = channel_details_endpoint(api_base(), channel_id);
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(channel_request_failed_message(resp.status()));
        }
        resp.json::<ChannelDetails>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, channel_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch the channel list from `GET /channel/getChannelList`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body does not parse.
pub async fn fetch_channel_list(token: &str) -> Result<Vec<ChannelSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = channel_list_endpoint(api_base());
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(channel_request_failed_message(resp.status()));
        }
        resp.json::<Vec<ChannelSummary>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Commit a full-replacement channel update via
/// `POST /channel/updateChannel/{channelId}`.
///
/// The response body is parsed and discarded; the caller re-reads the
/// authoritative record instead of trusting the reply.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn update_channel(
    token: &str,
    channel_id: &str,
    update: &ChannelUpdate,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = update_channel_endpoint(api_base(), channel_id);
        let resp = gloo_net::http::Request::post(&url)
            .header("Authorization", &bearer(token))
            .json(update)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(update_request_failed_message(resp.status()));
        }
        let _ = resp
            .json::<serde_json::Value>()
            .await
            .map_err(|e| e.to_string())?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, channel_id, update);
        Err("not available on server".to_owned())
    }
}
