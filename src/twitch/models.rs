//! Typed Helix API response schemas
//!
//! One struct per endpoint payload, deserialized at the HTTP boundary so
//! malformed upstream responses fail as decode errors instead of surfacing
//! later as missing-field lookups.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Envelope shared by all Helix list endpoints: `{ "data": [...] }`.
///
/// An empty `data` array is meaningful (user not found, streamer offline);
/// a missing or non-array `data` is a decode error.
#[derive(Debug, Deserialize)]
pub struct HelixResponse<T> {
    pub data: Vec<T>,
}

/// One entry of `GET helix/users`.
#[derive(Debug, Clone, Deserialize)]
pub struct HelixUser {
    pub id: String,
    pub login: String,
    pub display_name: String,
}

/// One entry of `GET helix/streams`. Present only while the broadcast is live.
#[derive(Debug, Clone, Deserialize)]
pub struct HelixStream {
    pub user_login: String,
    pub user_name: String,
    /// Empty string when the broadcast has no category set
    pub game_id: String,
    pub game_name: String,
    pub title: String,
    pub viewer_count: u64,
    pub started_at: DateTime<Utc>,
    /// Size-templated preview URL containing `{width}x{height}`
    pub thumbnail_url: String,
}

/// One entry of `GET helix/games`.
#[derive(Debug, Clone, Deserialize)]
pub struct HelixGame {
    pub name: String,
    /// Size-templated box-art URL containing `{width}x{height}`
    pub box_art_url: String,
}

/// `POST oauth2/token` payload for the client-credentials grant.
#[derive(Debug, Deserialize)]
pub struct AppTokenResponse {
    pub access_token: String,
    /// Lifetime in seconds from issuance
    pub expires_in: i64,
}

/// Point-in-time bundle of a live broadcast, fully resolved for rendering.
///
/// Built once per /twitch invocation and dropped after the reply is sent.
#[derive(Debug, Clone)]
pub struct BroadcastSnapshot {
    pub title: String,
    pub username: String,
    pub viewer_count: u64,
    pub game_name: String,
    /// Box-art URL with concrete dimensions, absent when no category is set
    pub game_box_art_url: Option<String>,
    pub started_at: DateTime<Utc>,
    pub stream_url: String,
    /// Raw preview image, attached to the reply as `stream.png`
    pub thumbnail: Vec<u8>,
}

/// Fill a Helix `{width}x{height}` URL template with concrete dimensions.
pub fn fill_size_template(url: &str, width: u32, height: u32) -> String {
    url.replace("{width}", &width.to_string())
        .replace("{height}", &height.to_string())
}
