//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's camelCase JSON field names via serde
//! renames so payloads stay lossless. Unknown fields in responses are
//! ignored; the client only depends on what it renders.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user profile as returned by `GET /users/{userId}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
}

impl UserProfile {
    /// Display name: first and last name joined with a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Authoritative channel record as returned by the channel endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelDetails {
    /// Unique channel identifier; immutable for the life of an edit form.
    pub channel_id: String,
    /// Absent or null on records created without a name; the edit form
    /// renders this as an empty string.
    #[serde(default)]
    pub channel_name: Option<String>,
    #[serde(default)]
    pub channel_description: Option<String>,
    pub private_channel: bool,
}

/// Summary row for the channel list screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSummary {
    pub channel_id: String,
    #[serde(default)]
    pub channel_name: Option<String>,
    pub private_channel: bool,
}

/// Full-replacement payload for `POST /channel/updateChannel/{channelId}`.
///
/// The update contract replaces all editable fields at once: every commit
/// carries the complete set, including fields the user never touched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelUpdate {
    pub channel_name: String,
    pub channel_description: String,
    pub private_channel: bool,
}
