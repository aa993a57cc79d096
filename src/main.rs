use clap::Parser;
use sip_happens::cli::commands::{
    init::InitCommand, menu::MenuCommand, open::OpenCommand, suggest::SuggestCommand,
    validate::ValidateCommand, CommandHandler,
};
use sip_happens::cli::{Cli, Commands, LogLevel};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so the café's own output on stdout stays clean
fn initialize_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    let menu_path = cli.menu;
    let command = cli.command.unwrap_or(Commands::Open);
    tracing::debug!(command = command.name(), "Starting");

    let handler: Box<dyn CommandHandler> = match command {
        Commands::Open => Box::new(OpenCommand::new(menu_path)),
        Commands::Menu { format } => Box::new(MenuCommand::new(menu_path, format)),
        Commands::Suggest { mood } => Box::new(SuggestCommand::new(menu_path, mood)),
        Commands::Validate => Box::new(ValidateCommand::new(menu_path)),
        Commands::Init { global, force } => Box::new(InitCommand::new(global, force)),
    };

    handler.execute()?;
    tracing::debug!(command = handler.name(), "Finished");
    Ok(())
}
