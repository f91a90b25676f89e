//! Study session slash commands

use serenity::builder::CreateApplicationCommand;

/// Creates study session commands
pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![
        create_study_start_command(),
        create_study_stop_command(),
        create_study_summary_command(),
    ]
}

fn create_study_start_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("study_start")
        .description("Start a study session (begins your timer)")
        .to_owned()
}

fn create_study_stop_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("study_stop")
        .description("Stop your study session and save its duration")
        .to_owned()
}

fn create_study_summary_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("study_summary")
        .description("Summary of your study sessions for today")
        .to_owned()
}
