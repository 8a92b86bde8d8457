//! Lexboard CLI - Command-line interface for the legal precedent dashboard.

use clap::Parser;
use lexboard_cli::commands;
use lexboard_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> lexboard_cli::Result<()> {
    let cli = Cli::parse();

    // Load or create config
    let mut config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Override profile if specified
    if let Some(profile_name) = cli.profile {
        config.switch_profile(profile_name)?;
    }

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Search(args) => commands::execute_search(args, &config, &formatter).await?,
        Command::Compare(args) => commands::execute_compare(args, &config, &formatter).await?,
        Command::Recommend(args) => commands::execute_recommend(args, &config, &formatter).await?,
        Command::View(args) => commands::execute_view(args, &config, &formatter).await?,
        Command::History(args) => commands::execute_history(args, &formatter).await?,
        Command::Analyze(args) => commands::execute_analyze(args, &config, &formatter).await?,
        Command::Add(args) => commands::execute_add(args, &config, &formatter).await?,
        Command::Profile(args) => commands::execute_profile(args, &mut config, &formatter).await?,
    }

    Ok(())
}
