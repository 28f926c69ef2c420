//! Environment-based configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use anyhow::{Context, Result};

/// Runtime configuration, read once at startup from the environment.
///
/// A `.env` file is honored when present (loaded by the binary via
/// `dotenvy` before this is constructed).
#[derive(Debug, Clone)]
pub struct Config {
    /// Discord bot token
    pub discord_token: String,
    /// Twitch application client id (Helix `Client-Id` header)
    pub twitch_client_id: String,
    /// Twitch application client secret (client-credentials grant)
    pub twitch_client_secret: String,
    /// Optional guild id for guild-scoped command registration.
    /// When unset, commands are registered globally.
    pub discord_guild_id: Option<String>,
    /// Default log filter when RUST_LOG is not set
    pub log_level: String,
}

impl Config {
    /// Build a [`Config`] from environment variables.
    ///
    /// Required: `DISCORD_TOKEN`, `TWITCH_CLIENT_ID`, `TWITCH_CLIENT_SECRET`.
    /// Optional: `DISCORD_GUILD_ID`, `LOG_LEVEL`.
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            discord_token: std::env::var("DISCORD_TOKEN")
                .context("DISCORD_TOKEN must be set (bot token from the Discord developer portal)")?,
            twitch_client_id: std::env::var("TWITCH_CLIENT_ID")
                .context("TWITCH_CLIENT_ID must be set (Twitch application client id)")?,
            twitch_client_secret: std::env::var("TWITCH_CLIENT_SECRET")
                .context("TWITCH_CLIENT_SECRET must be set (Twitch application client secret)")?,
            discord_guild_id: std::env::var("DISCORD_GUILD_ID").ok(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| default_log_level()),
        })
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn test_config_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<Config>();
    }
}
