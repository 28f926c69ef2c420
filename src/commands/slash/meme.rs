//! # Meme Command
//!
//! Fetch a random meme from Reddit.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use serenity::builder::CreateApplicationCommand;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_meme_command()]
}

fn create_meme_command() -> CreateApplicationCommand {
    let mut command = CreateApplicationCommand::default();
    command
        .name("meme")
        .description("Sends a random meme from Reddit");
    command
}
