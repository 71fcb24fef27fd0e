//! nanordr CLI - Ripple-Down Rules inference for nanoparticle formulations.

use anyhow::Context;
use clap::Parser;
use nanordr_cli::commands;
use nanordr_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    // Log to stderr so stdout stays parseable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.settings.log_level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let tree = commands::load_tree().context("failed to build the standard rule tree")?;

    match cli.command {
        Command::Run(args) => {
            let input = args.input.display().to_string();
            commands::execute_run(args, &tree, &config, &formatter)
                .with_context(|| format!("batch run over {} failed", input))?;
        }
        Command::Eval(args) => {
            commands::execute_eval(args, &tree, &formatter)?;
        }
        Command::Tree => {
            commands::execute_tree(&tree, &formatter)?;
        }
        Command::Stats(args) => {
            commands::execute_stats(args, &formatter)?;
        }
    }

    Ok(())
}
