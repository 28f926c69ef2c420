//! # Twitch Command
//!
//! Show information about a Twitch streamer's live broadcast.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_twitch_command()]
}

fn create_twitch_command() -> CreateApplicationCommand {
    let mut command = CreateApplicationCommand::default();
    command
        .name("twitch")
        .description("Shows information about a Twitch streamer")
        .create_option(|option| {
            option
                .name("name")
                .description("Twitch streamer's name")
                .kind(CommandOptionType::String)
                .required(true)
                .min_length(1)
                .max_length(100)
        });
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_twitch_command() {
        let commands = create_commands();
        assert_eq!(commands.len(), 1);

        let twitch = &commands[0];
        let name = twitch.0.get("name").unwrap().as_str().unwrap();
        assert_eq!(name, "twitch");
    }
}
