//! Slash command handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use anyhow::Result;
use async_trait::async_trait;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

use super::context::CommandContext;

/// Trait for slash command handlers.
///
/// Each handler processes one or more slash commands and is dispatched by
/// name through a [`super::registry::CommandRegistry`].
///
/// # Example
///
/// ```ignore
/// pub struct ChooseHandler;
///
/// #[async_trait]
/// impl SlashCommandHandler for ChooseHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["choose"]
///     }
///
///     async fn handle(
///         &self,
///         ctx: Arc<CommandContext>,
///         serenity_ctx: &Context,
///         command: &ApplicationCommandInteraction,
///     ) -> Result<()> {
///         // Handle choose command
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait SlashCommandHandler: Send + Sync {
    /// Command name(s) this handler processes
    fn command_names(&self) -> &'static [&'static str];

    /// Handle the slash command
    ///
    /// # Arguments
    ///
    /// * `ctx` - Shared command context (Twitch client, HTTP client)
    /// * `serenity_ctx` - Serenity context for Discord API calls
    /// * `command` - The slash command interaction to handle
    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe (can be used with dyn)
    fn _assert_object_safe(_: &dyn SlashCommandHandler) {}
}
