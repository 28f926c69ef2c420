//! # Poll Command
//!
//! Open a simple yes/no poll with reaction voting.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_poll_command()]
}

fn create_poll_command() -> CreateApplicationCommand {
    let mut command = CreateApplicationCommand::default();
    command
        .name("poll")
        .description("Creates a simple yes or no poll")
        .create_option(|option| {
            option
                .name("question")
                .description("The question you want to open the poll for")
                .kind(CommandOptionType::String)
                .required(true)
                .max_length(2000)
        });
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_poll_command() {
        let commands = create_commands();
        assert_eq!(commands.len(), 1);

        let poll = &commands[0];
        let name = poll.0.get("name").unwrap().as_str().unwrap();
        assert_eq!(name, "poll");
    }
}
