use clap::{Parser, Subcommand};
use eyre::Result;

use onesheet_cli::commands::{self, ConfigureArgs, GenerateArgs};

#[derive(Parser)]
#[command(name = "onesheet")]
#[command(author, version, about = "Turn product notes into a marketing one-pager", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a one-pager from a prompt or pasted notes
    Generate(GenerateArgs),
    /// Write the config file
    Configure(ConfigureArgs),
    /// List the canned example prompts
    Examples,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Commands::Generate(args) => commands::generate(args).await,
        Commands::Configure(args) => commands::configure(args),
        Commands::Examples => {
            commands::examples();
            Ok(())
        }
    }
}
