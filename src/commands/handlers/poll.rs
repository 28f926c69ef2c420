//! Poll command handler
//!
//! Handles: poll
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::model::channel::ReactionType;
use serenity::model::prelude::Mentionable;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::slash::get_string_option;
use crate::core::truncate_embed_description;

/// Voting reactions, attached in this order
const POLL_REACTIONS: [&str; 2] = ["✔️", "❌"];

/// Handler for the /poll command
pub struct PollHandler;

#[async_trait]
impl SlashCommandHandler for PollHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["poll"]
    }

    async fn handle(
        &self,
        _ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let question = get_string_option(&command.data.options, "question")
            .ok_or_else(|| anyhow::anyhow!("Missing question argument"))?;

        command
            .create_interaction_response(&serenity_ctx.http, |r| {
                r.kind(InteractionResponseType::DeferredChannelMessageWithSource)
            })
            .await?;

        if !is_valid_question(&question) {
            let mention = command.user.mention().to_string();
            command
                .edit_original_interaction_response(&serenity_ctx.http, |r| {
                    r.content(format!(":x: {mention}: You need to specify a question."))
                })
                .await?;
            return Ok(());
        }

        info!(
            "Poll command | User: {} | Question: {}",
            command.user.id,
            question.chars().take(100).collect::<String>()
        );

        let author = command.user.name.clone();
        command
            .edit_original_interaction_response(&serenity_ctx.http, |r| {
                r.embed(|e| {
                    e.title(format!("Poll by **{author}**:"))
                        .description(truncate_embed_description(&question))
                })
            })
            .await?;

        // Reactions go on the posted message, so fetch it back first
        let message = command.get_interaction_response(&serenity_ctx.http).await?;
        for emoji in POLL_REACTIONS {
            message
                .react(&serenity_ctx.http, ReactionType::Unicode(emoji.to_string()))
                .await?;
        }

        Ok(())
    }
}

/// A poll needs a non-blank question.
fn is_valid_question(question: &str) -> bool {
    !question.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_handler_commands() {
        let handler = PollHandler;
        let names = handler.command_names();
        assert!(names.contains(&"poll"));
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_blank_question_invalid() {
        assert!(!is_valid_question(""));
        assert!(!is_valid_question("   "));
        assert!(!is_valid_question("\n\t"));
    }

    #[test]
    fn test_question_valid() {
        assert!(is_valid_question("Pizza for lunch?"));
    }

    #[test]
    fn test_reactions_fixed_order() {
        assert_eq!(POLL_REACTIONS, ["✔️", "❌"]);
    }
}
