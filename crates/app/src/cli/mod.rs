use clap::{Parser, Subcommand};

mod db;
mod price;
mod profile;

#[derive(Debug, Parser)]
#[command(name = "bliss-app", about = "Bliss at Home operator CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print a treatment's price sheet
    Price(price::PriceArgs),
    Db(db::DbCommand),
    Profile(profile::ProfileCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Price(args) => price::run(&args),
            Commands::Db(command) => db::run(command).await,
            Commands::Profile(command) => profile::run(command).await,
        }
    }
}
