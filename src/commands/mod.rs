pub mod activity;
pub mod export;
pub mod init;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the Jira connection")]
    Init(init::InitArgs),
    #[command(about = "Show your Jira status changes as a log and an issue-by-day table")]
    Activity(activity::ActivityArgs),
    #[command(about = "Export your Jira status changes to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Activity(args) => activity::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
        }
    }
}
