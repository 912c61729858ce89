use clap::{Args, Subcommand};

mod set_role;

#[derive(Debug, Args)]
pub(crate) struct ProfileCommand {
    #[command(subcommand)]
    command: ProfileSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProfileSubcommand {
    /// Change a profile's role and hotel assignment
    SetRole(set_role::SetRoleArgs),
}

pub(crate) async fn run(command: ProfileCommand) -> Result<(), String> {
    match command.command {
        ProfileSubcommand::SetRole(args) => set_role::run(args).await,
    }
}
