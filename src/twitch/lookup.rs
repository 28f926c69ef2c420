//! Streamer lookup flow
//!
//! The three-step resolution behind /twitch: login name → identity →
//! live status → broadcast snapshot. Reply formatting lives here too so
//! the terminal states are testable without a network.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::debug;

use super::client::TwitchClient;
use super::models::BroadcastSnapshot;
use crate::core::humanize_elapsed;

/// Terminal result of a streamer lookup.
#[derive(Debug)]
pub enum LookupOutcome {
    /// The login name does not resolve to any platform identity
    NotFound,
    /// Identity resolved but no broadcast is active
    Offline { display_name: String },
    /// Live broadcast with a fully-populated snapshot
    Live(Box<BroadcastSnapshot>),
}

/// Resolve a streamer name to a [`LookupOutcome`].
///
/// The name is lowercased for the Helix query; callers keep the original
/// text for the "not found" reply. Transport failures at any step
/// propagate as errors — the dispatch layer owns the generic fallback
/// reply for those.
pub async fn lookup(client: &TwitchClient, name: &str) -> Result<LookupOutcome> {
    let login = name.trim().to_lowercase();

    let user = match client.user_by_login(&login).await? {
        Some(user) => user,
        None => return Ok(LookupOutcome::NotFound),
    };
    debug!("Resolved login '{}' to user id {}", user.login, user.id);

    let stream = match client.stream_for_user(&user.id).await? {
        Some(stream) => stream,
        None => {
            return Ok(LookupOutcome::Offline {
                display_name: user.display_name,
            })
        }
    };

    let snapshot = client.broadcast_snapshot(stream).await?;
    Ok(LookupOutcome::Live(Box::new(snapshot)))
}

/// Reply for a name that resolves to no identity. References the text the
/// user typed, not the normalized login.
pub fn not_found_reply(mention: &str, raw_name: &str) -> String {
    format!(":x: {mention}: {raw_name} isn't a valid streamer's name")
}

/// Reply for a resolved streamer with no active broadcast. References the
/// resolved display name, not the raw query.
pub fn offline_reply(display_name: &str) -> String {
    format!("{display_name} isn't live")
}

/// The four labeled embed fields of a live reply, in their fixed order.
pub fn snapshot_fields(
    snapshot: &BroadcastSnapshot,
    now: DateTime<Utc>,
) -> [(&'static str, String); 4] {
    [
        ("Stream Time", humanize_elapsed(now - snapshot.started_at)),
        ("Username", snapshot.username.clone()),
        ("Viewer Count", snapshot.viewer_count.to_string()),
        ("Category", snapshot.game_name.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn live_snapshot() -> BroadcastSnapshot {
        BroadcastSnapshot {
            title: "Ranked grind".to_string(),
            username: "Shroud".to_string(),
            viewer_count: 24831,
            game_name: "VALORANT".to_string(),
            game_box_art_url: Some("https://example.com/box-285x380.jpg".to_string()),
            started_at: Utc::now(),
            stream_url: "https://www.twitch.tv/shroud".to_string(),
            thumbnail: vec![0x89, 0x50, 0x4e, 0x47],
        }
    }

    #[test]
    fn test_not_found_reply_uses_raw_input() {
        assert_eq!(
            not_found_reply("<@123>", "ninja"),
            ":x: <@123>: ninja isn't a valid streamer's name"
        );
        // Mixed-case input is echoed as typed, not normalized
        assert_eq!(
            not_found_reply("<@123>", "NiNjA"),
            ":x: <@123>: NiNjA isn't a valid streamer's name"
        );
    }

    #[test]
    fn test_offline_reply_uses_display_name() {
        assert_eq!(offline_reply("Shroud"), "Shroud isn't live");
    }

    #[test]
    fn test_snapshot_fields_fixed_order() {
        let snapshot = live_snapshot();
        let fields = snapshot_fields(&snapshot, Utc::now());

        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0].0, "Stream Time");
        assert_eq!(fields[1].0, "Username");
        assert_eq!(fields[2].0, "Viewer Count");
        assert_eq!(fields[3].0, "Category");
    }

    #[test]
    fn test_snapshot_fields_values() {
        let mut snapshot = live_snapshot();
        let now = Utc::now();
        snapshot.started_at = now - Duration::minutes(119);

        let fields = snapshot_fields(&snapshot, now);
        assert_eq!(fields[0].1, "2 hours");
        assert_eq!(fields[1].1, "Shroud");
        assert_eq!(fields[2].1, "24831");
        assert_eq!(fields[3].1, "VALORANT");
    }
}
