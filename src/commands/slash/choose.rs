//! # Choose Command
//!
//! Pick a random option from a space-separated list of choices.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_choose_command()]
}

fn create_choose_command() -> CreateApplicationCommand {
    let mut command = CreateApplicationCommand::default();
    command
        .name("choose")
        .description("Chooses a random option from a list of choices")
        .create_option(|option| {
            option
                .name("choices")
                .description("Your choices separated by spaces")
                .kind(CommandOptionType::String)
                .required(true)
                .min_length(1)
                .max_length(2000)
        });
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_choose_command() {
        let commands = create_commands();
        assert_eq!(commands.len(), 1);

        let choose = &commands[0];
        let name = choose.0.get("name").unwrap().as_str().unwrap();
        assert_eq!(name, "choose");
    }
}
