use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Color, Styles};
use clap::{Parser, Subcommand, ValueEnum};

/// Custom styles for help output
fn help_styles() -> Styles {
    Styles::styled()
        .header(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .usage(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .literal(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .placeholder(anstyle::Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
}

#[derive(Parser)]
#[command(name = "bbm-keys")]
#[command(about = "Resolve bilingual_book_maker API keys", long_about = None)]
#[command(version)]
#[command(styles = help_styles())]
#[command(after_long_help = "\
Each setting is read from an explicit option first, then from its
environment variables in order (BBM_* name first, legacy alias second).
Unset and empty variables are both skipped.

Environment:
  BBM_CONFIG_PATH   Override user config file location
  RUST_LOG          Override log filter (default set by -v)")]
pub(crate) struct Cli {
    /// User config file (default: ~/.config/bbm/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose output (-v: info, -vv: debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the effective value of a setting
    Resolve {
        /// Setting name (e.g. openai_key, deepseek_key)
        setting: String,

        /// Explicit value; wins over the environment when non-empty
        #[arg(long)]
        value: Option<String>,

        /// Print each comma-separated key on its own line
        #[arg(long)]
        split: bool,
    },

    /// Show where each setting gets its value (values are never printed)
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the key a translation model would use
    Model {
        /// Model name (e.g. gpt4o, deepseek-chat, claude-code)
        model: String,

        /// Explicit key; wins over the environment when non-empty
        #[arg(long)]
        key: Option<String>,

        /// Ollama model serving an OpenAI-compatible API (no key needed)
        #[arg(long)]
        ollama_model: Option<String>,

        /// Claude Code agentic mode (claude-code and glm models run without a key)
        #[arg(long)]
        agentic: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}
