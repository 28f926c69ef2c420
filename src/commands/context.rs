//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use std::sync::Arc;

use crate::twitch::TwitchClient;

/// Shared services injected into every command handler.
///
/// Handlers receive this instead of reaching into process globals:
/// - [`TwitchClient`] for the /twitch lookup flow
/// - a general-purpose reqwest client for other outbound calls (/meme)
#[derive(Clone)]
pub struct CommandContext {
    pub twitch: Arc<TwitchClient>,
    pub http: reqwest::Client,
}

impl CommandContext {
    pub fn new(twitch: Arc<TwitchClient>, http: reqwest::Client) -> Self {
        Self { twitch, http }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_context_clone() {
        // CommandContext must be Clone for sharing across handlers
        fn assert_clone<T: Clone>() {}
        assert_clone::<CommandContext>();
    }
}
