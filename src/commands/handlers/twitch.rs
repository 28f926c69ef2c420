//! Twitch command handler
//!
//! Handles: twitch
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use log::{error, info};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::model::channel::AttachmentType;
use serenity::model::prelude::Mentionable;
use serenity::model::Timestamp;
use serenity::prelude::Context;
use std::borrow::Cow;
use std::sync::Arc;
use uuid::Uuid;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::slash::get_string_option;
use crate::core::truncate_embed_title;
use crate::twitch::lookup::{lookup, not_found_reply, offline_reply, snapshot_fields};
use crate::twitch::LookupOutcome;

/// Filename of the attached stream preview, referenced by the embed image
const THUMBNAIL_FILENAME: &str = "stream.png";

/// Handler for the /twitch streamer lookup command
pub struct TwitchHandler;

#[async_trait]
impl SlashCommandHandler for TwitchHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["twitch"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let request_id = Uuid::new_v4();
        self.handle_twitch(&ctx, serenity_ctx, command, request_id)
            .await
    }
}

impl TwitchHandler {
    async fn handle_twitch(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        request_id: Uuid,
    ) -> Result<()> {
        let name = get_string_option(&command.data.options, "name")
            .ok_or_else(|| anyhow::anyhow!("Missing name argument"))?;

        info!(
            "[{request_id}] /twitch command | Name: {} | User: {}",
            name, command.user.id
        );

        // Defer: resolving identity + status + thumbnail takes several calls
        command
            .create_interaction_response(&serenity_ctx.http, |r| {
                r.kind(InteractionResponseType::DeferredChannelMessageWithSource)
            })
            .await
            .map_err(|e| {
                error!("[{request_id}] Failed to defer interaction: {e}");
                anyhow::anyhow!("Failed to defer interaction: {e}")
            })?;

        match lookup(&ctx.twitch, &name).await? {
            LookupOutcome::NotFound => {
                info!("[{request_id}] No identity for '{name}'");
                let mention = command.user.mention().to_string();
                command
                    .edit_original_interaction_response(&serenity_ctx.http, |r| {
                        r.content(not_found_reply(&mention, &name))
                    })
                    .await?;
            }
            LookupOutcome::Offline { display_name } => {
                info!("[{request_id}] '{display_name}' is offline");
                command
                    .edit_original_interaction_response(&serenity_ctx.http, |r| {
                        r.content(offline_reply(&display_name))
                    })
                    .await?;
            }
            LookupOutcome::Live(snapshot) => {
                info!(
                    "[{request_id}] '{}' is live | {} viewers | {}",
                    snapshot.username, snapshot.viewer_count, snapshot.game_name
                );

                let fields = snapshot_fields(&snapshot, Utc::now());
                let title = truncate_embed_title(&snapshot.title);
                let stream_url = snapshot.stream_url.clone();
                let game_box_art_url = snapshot.game_box_art_url.clone();
                let thumbnail = snapshot.thumbnail;

                command
                    .create_followup_message(&serenity_ctx.http, |m| {
                        m.add_file(AttachmentType::Bytes {
                            data: Cow::Owned(thumbnail),
                            filename: THUMBNAIL_FILENAME.to_string(),
                        })
                        .embed(|e| {
                            e.title(title)
                                .url(stream_url)
                                .image(format!("attachment://{THUMBNAIL_FILENAME}"))
                                .timestamp(Timestamp::now());
                            if let Some(box_art) = game_box_art_url {
                                e.thumbnail(box_art);
                            }
                            for (label, value) in fields {
                                e.field(label, value, true);
                            }
                            e
                        })
                    })
                    .await
                    .map_err(|e| {
                        error!("[{request_id}] Failed to send stream embed: {e}");
                        anyhow::anyhow!("Failed to send stream embed: {e}")
                    })?;
            }
        }

        info!("[{request_id}] /twitch response sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twitch_handler_commands() {
        let handler = TwitchHandler;
        let names = handler.command_names();
        assert!(names.contains(&"twitch"));
        assert_eq!(names.len(), 1);
    }
}
