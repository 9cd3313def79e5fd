mod chart;
mod cli;
mod commands;
mod session;

use clap::Parser;
use cli::{Cli, Commands, TrainingArgs};

fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for the interactive session
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => commands::run::run(&TrainingArgs::default().to_config()),
        Some(Commands::Run { training }) => commands::run::run(&training.to_config()),
        Some(Commands::Train { training, json }) => {
            commands::train::run(&training.to_config(), json)
        }
        Some(Commands::Version) => commands::version::run(),
    }
}
