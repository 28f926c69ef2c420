//! Per-command handler implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation (twitch, choose, meme, poll)

pub mod choose;
pub mod meme;
pub mod poll;
pub mod twitch;

use std::sync::Arc;

use super::handler::SlashCommandHandler;

/// Create all registered command handlers
///
/// Returns a vector of handlers ready to be registered with CommandRegistry.
pub fn create_all_handlers() -> Vec<Arc<dyn SlashCommandHandler>> {
    vec![
        Arc::new(twitch::TwitchHandler),
        Arc::new(choose::ChooseHandler),
        Arc::new(meme::MemeHandler),
        Arc::new(poll::PollHandler),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_handlers_cover_all_commands() {
        let mut registry = crate::commands::registry::CommandRegistry::new();
        for handler in create_all_handlers() {
            registry.register(handler);
        }

        for name in ["twitch", "choose", "meme", "poll"] {
            assert!(registry.contains(name), "Missing handler for: {name}");
        }
        assert_eq!(registry.len(), 4);
    }
}
