//! Daily reminder slash commands

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

/// Creates reminder commands
pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_set_reminder_command(), create_remove_reminder_command()]
}

fn create_set_reminder_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("set_reminder")
        .description("Set your daily study reminder time (HH:MM, local time)")
        .create_option(|option| {
            option
                .name("time")
                .description("Example: 07:30")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .to_owned()
}

fn create_remove_reminder_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("remove_reminder")
        .description("Remove your daily study reminder")
        .to_owned()
}
