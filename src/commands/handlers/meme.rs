//! Meme command handler
//!
//! Handles: meme
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::info;
use serde::Deserialize;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::core::truncate_embed_title;

/// Fixed meme endpoint; returns one random post per request
const MEME_API_URL: &str = "https://meme-api.com/gimme";

/// Payload of the meme endpoint. Extra fields (subreddit, author, ups)
/// are ignored.
#[derive(Debug, Deserialize)]
struct MemeResponse {
    title: String,
    url: String,
}

/// Handler for the /meme command
pub struct MemeHandler;

#[async_trait]
impl SlashCommandHandler for MemeHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["meme"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        command
            .create_interaction_response(&serenity_ctx.http, |r| {
                r.kind(InteractionResponseType::DeferredChannelMessageWithSource)
            })
            .await?;

        let response = ctx.http.get(MEME_API_URL).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("meme endpoint returned HTTP {status}"));
        }

        let meme: MemeResponse = response.json().await?;
        info!(
            "Meme command | User: {} | {}",
            command.user.id, meme.url
        );

        command
            .edit_original_interaction_response(&serenity_ctx.http, |r| {
                r.embed(|e| e.title(truncate_embed_title(&meme.title)).image(&meme.url))
            })
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meme_handler_commands() {
        let handler = MemeHandler;
        let names = handler.command_names();
        assert!(names.contains(&"meme"));
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_decode_meme_response() {
        let json = r#"{
            "postLink": "https://redd.it/abc123",
            "subreddit": "memes",
            "title": "Fresh out of the oven",
            "url": "https://i.redd.it/abc123.jpg",
            "nsfw": false,
            "spoiler": false,
            "author": "someone",
            "ups": 1234
        }"#;

        let meme: MemeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(meme.title, "Fresh out of the oven");
        assert_eq!(meme.url, "https://i.redd.it/abc123.jpg");
    }

    #[test]
    fn test_decode_meme_response_missing_url_fails() {
        let result: Result<MemeResponse, _> = serde_json::from_str(r#"{"title": "no url"}"#);
        assert!(result.is_err());
    }
}
