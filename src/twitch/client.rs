//! Twitch Helix API client
//!
//! Thin typed wrapper over the three Helix endpoints the bot needs, plus
//! app-access-token handling (client-credentials grant) and raw image
//! download for stream thumbnails.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use super::models::{
    fill_size_template, AppTokenResponse, BroadcastSnapshot, HelixGame, HelixResponse, HelixStream,
    HelixUser,
};

const HELIX_BASE: &str = "https://api.twitch.tv/helix";
const TOKEN_URL: &str = "https://id.twitch.tv/oauth2/token";

/// HTTP request timeout (seconds)
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Tokens within this margin of expiry are refreshed before use (seconds)
const TOKEN_EXPIRY_MARGIN_SECS: i64 = 60;

/// Stream preview dimensions requested from the size template
const THUMBNAIL_SIZE: (u32, u32) = (1920, 1080);

/// Game box-art dimensions requested from the size template
const BOX_ART_SIZE: (u32, u32) = (285, 380);

/// An app access token with its absolute expiry time.
#[derive(Debug, Clone)]
struct AppToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

impl AppToken {
    fn is_stale(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(TOKEN_EXPIRY_MARGIN_SECS) >= self.expires_at
    }
}

/// Typed Helix API client.
///
/// Holds the shared HTTP connection pool and the current app access token.
/// The token is the only mutable state; it is refreshed under a mutex when
/// within [`TOKEN_EXPIRY_MARGIN_SECS`] of expiry.
pub struct TwitchClient {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
    token: Mutex<Option<AppToken>>,
}

impl TwitchClient {
    /// Build a client and validate the credentials by fetching an initial
    /// app access token.
    pub async fn connect(client_id: &str, client_secret: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("trinket-bot/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let client = TwitchClient {
            http,
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            token: Mutex::new(None),
        };

        client.bearer().await.context("Twitch credential check failed")?;
        info!("Twitch Helix client ready");
        Ok(client)
    }

    /// Current bearer token, refreshing it first if missing or stale.
    async fn bearer(&self) -> Result<String> {
        let mut guard = self.token.lock().await;
        match guard.as_ref() {
            Some(token) if !token.is_stale(Utc::now()) => Ok(token.access_token.clone()),
            _ => {
                let token = self.fetch_token().await?;
                let access_token = token.access_token.clone();
                *guard = Some(token);
                Ok(access_token)
            }
        }
    }

    async fn fetch_token(&self) -> Result<AppToken> {
        debug!("Requesting app access token");
        let response = self
            .http
            .post(TOKEN_URL)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .await
            .context("token request failed")?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("token endpoint returned HTTP {status}"));
        }

        let payload: AppTokenResponse =
            response.json().await.context("malformed token response")?;

        Ok(AppToken {
            access_token: payload.access_token,
            expires_at: Utc::now() + Duration::seconds(payload.expires_in),
        })
    }

    /// `GET {HELIX_BASE}/{path}` with auth headers, decoded into the
    /// endpoint's typed envelope.
    async fn helix_get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<HelixResponse<T>> {
        let bearer = self.bearer().await?;
        let response = self
            .http
            .get(format!("{HELIX_BASE}/{path}"))
            .header("Client-Id", &self.client_id)
            .bearer_auth(bearer)
            .query(query)
            .send()
            .await
            .with_context(|| format!("helix/{path} request failed"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("helix/{path} returned HTTP {status}"));
        }

        response
            .json()
            .await
            .with_context(|| format!("malformed helix/{path} response"))
    }

    /// Resolve a login name to a platform identity. `None` when the name
    /// does not exist.
    pub async fn user_by_login(&self, login: &str) -> Result<Option<HelixUser>> {
        let response: HelixResponse<HelixUser> =
            self.helix_get("users", &[("login", login)]).await?;
        Ok(response.data.into_iter().next())
    }

    /// Active broadcast for a user id. `None` when the streamer is offline.
    pub async fn stream_for_user(&self, user_id: &str) -> Result<Option<HelixStream>> {
        let response: HelixResponse<HelixStream> =
            self.helix_get("streams", &[("user_id", user_id)]).await?;
        Ok(response.data.into_iter().next())
    }

    /// Game metadata by id. `None` for unknown ids.
    pub async fn game_by_id(&self, game_id: &str) -> Result<Option<HelixGame>> {
        let response: HelixResponse<HelixGame> =
            self.helix_get("games", &[("id", game_id)]).await?;
        Ok(response.data.into_iter().next())
    }

    /// Download an image as raw bytes.
    pub async fn download_image(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .context("image download failed")?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("image download returned HTTP {status}"));
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Resolve a live stream into a fully-populated [`BroadcastSnapshot`]:
    /// box-art URL for the current category and the preview image as bytes.
    pub async fn broadcast_snapshot(&self, stream: HelixStream) -> Result<BroadcastSnapshot> {
        let game_box_art_url = if stream.game_id.is_empty() {
            None
        } else {
            self.game_by_id(&stream.game_id)
                .await?
                .map(|game| fill_size_template(&game.box_art_url, BOX_ART_SIZE.0, BOX_ART_SIZE.1))
        };

        let thumbnail_url =
            fill_size_template(&stream.thumbnail_url, THUMBNAIL_SIZE.0, THUMBNAIL_SIZE.1);
        let thumbnail = self.download_image(&thumbnail_url).await?;
        debug!(
            "Fetched stream preview | {} bytes | {}",
            thumbnail.len(),
            thumbnail_url
        );

        Ok(BroadcastSnapshot {
            title: stream.title,
            username: stream.user_name,
            viewer_count: stream.viewer_count,
            game_name: stream.game_name,
            game_box_art_url,
            started_at: stream.started_at,
            stream_url: format!("https://www.twitch.tv/{}", stream.user_login),
            thumbnail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_token_is_not_stale() {
        let token = AppToken {
            access_token: "abc".to_string(),
            expires_at: Utc::now() + Duration::hours(10),
        };
        assert!(!token.is_stale(Utc::now()));
    }

    #[test]
    fn test_token_near_expiry_is_stale() {
        let now = Utc::now();
        let token = AppToken {
            access_token: "abc".to_string(),
            expires_at: now + Duration::seconds(30),
        };
        assert!(token.is_stale(now));
    }

    #[test]
    fn test_expired_token_is_stale() {
        let now = Utc::now();
        let token = AppToken {
            access_token: "abc".to_string(),
            expires_at: now - Duration::seconds(1),
        };
        assert!(token.is_stale(now));
    }
}
