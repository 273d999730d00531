use std::process;

use clap::Parser;

use bbm_keys::config::set_config_path;
use bbm_keys::styling::eprintln;

mod cli;
mod commands;

use cli::{Cli, Commands};

/// `-v` count sets the default filter; `RUST_LOG` still wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(path) = cli.config {
        set_config_path(path);
    }
    let resolver = commands::process_resolver()?;

    match cli.command {
        Commands::Resolve {
            setting,
            value,
            split,
        } => commands::handle_resolve(&resolver, &setting, value.as_deref(), split),
        Commands::List { format } => commands::handle_list(&resolver, format),
        Commands::Model {
            model,
            key,
            ollama_model,
            agentic,
        } => commands::handle_model(
            &resolver,
            &model,
            key.as_deref(),
            ollama_model.as_deref(),
            agentic,
        ),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{e}");
        process::exit(1);
    }
}
