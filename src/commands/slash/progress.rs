//! Progress note slash commands

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

/// Creates progress note commands
pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_progress_add_command(), create_progress_list_command()]
}

fn create_progress_add_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("progress_add")
        .description("Save a short progress note")
        .create_option(|option| {
            option
                .name("text")
                .description("What did you work on? Keep it short.")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .to_owned()
}

fn create_progress_list_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("progress_list")
        .description("Show your recent progress notes (default 10)")
        .create_option(|option| {
            option
                .name("limit")
                .description("Number of recent notes to show (1-25)")
                .kind(CommandOptionType::Integer)
                .required(false)
                .min_int_value(1)
                .max_int_value(25)
        })
        .to_owned()
}
