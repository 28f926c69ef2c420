//! Choose command handler
//!
//! Handles: choose
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use rand::Rng;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::model::prelude::Mentionable;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::slash::get_string_option;
use crate::core::truncate_embed_title;

/// Handler for the /choose random-pick command
pub struct ChooseHandler;

#[async_trait]
impl SlashCommandHandler for ChooseHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["choose"]
    }

    async fn handle(
        &self,
        _ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let input = get_string_option(&command.data.options, "choices")
            .ok_or_else(|| anyhow::anyhow!("Missing choices argument"))?;

        // Defer first: validation errors keep the same reply shape as results
        command
            .create_interaction_response(&serenity_ctx.http, |r| {
                r.kind(InteractionResponseType::DeferredChannelMessageWithSource)
            })
            .await?;

        let choices = parse_choices(&input);
        let mention = command.user.mention().to_string();

        match validate_choices(&choices) {
            Err(reason) => {
                command
                    .edit_original_interaction_response(&serenity_ctx.http, |r| {
                        r.content(format!(":x: {mention}: {reason}"))
                    })
                    .await?;
            }
            Ok(()) => {
                let pick = pick_choice(&choices);
                info!(
                    "Choose command | User: {} | {} options | Picked: {}",
                    command.user.id,
                    choices.len(),
                    pick
                );

                let title = truncate_embed_title(&format!("🎲 I choose {pick}"));
                command
                    .edit_original_interaction_response(&serenity_ctx.http, |r| {
                        r.embed(|e| e.title(title))
                    })
                    .await?;
            }
        }

        Ok(())
    }
}

/// Split the free-text argument into choice tokens on whitespace.
fn parse_choices(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

/// A pick needs at least two options; the error text is the user-facing
/// reason.
fn validate_choices(choices: &[&str]) -> Result<(), &'static str> {
    match choices.len() {
        0 => Err("You need to give me choices to choose from."),
        1 => Err("I need more than one choice!"),
        _ => Ok(()),
    }
}

/// Pick one token verbatim from the set.
fn pick_choice<'a>(choices: &[&'a str]) -> &'a str {
    choices[rand::rng().random_range(0..choices.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_handler_commands() {
        let handler = ChooseHandler;
        let names = handler.command_names();
        assert!(names.contains(&"choose"));
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_parse_choices_splits_on_whitespace() {
        assert_eq!(parse_choices("tea coffee"), vec!["tea", "coffee"]);
        assert_eq!(parse_choices("  tea   coffee  "), vec!["tea", "coffee"]);
    }

    #[test]
    fn test_empty_input_rejected() {
        let choices = parse_choices("   ");
        assert!(choices.is_empty());
        assert_eq!(
            validate_choices(&choices),
            Err("You need to give me choices to choose from.")
        );
    }

    #[test]
    fn test_single_choice_rejected() {
        let choices = parse_choices("tea");
        assert_eq!(validate_choices(&choices), Err("I need more than one choice!"));
    }

    #[test]
    fn test_two_choices_accepted() {
        let choices = parse_choices("tea coffee");
        assert_eq!(validate_choices(&choices), Ok(()));
    }

    #[test]
    fn test_pick_is_always_from_input_set() {
        let choices = vec!["tea", "coffee", "water", "juice"];
        for _ in 0..200 {
            let pick = pick_choice(&choices);
            assert!(choices.contains(&pick), "picked out-of-set value: {pick}");
        }
    }

    #[test]
    fn test_pick_is_verbatim() {
        let choices = vec!["TeA", "CoFFee"];
        for _ in 0..50 {
            let pick = pick_choice(&choices);
            assert!(pick == "TeA" || pick == "CoFFee");
        }
    }
}
