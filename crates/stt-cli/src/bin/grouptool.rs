use std::fs;
use std::process;

use clap::{Parser, Subcommand};

use stt_cli::commands::{config_ops, group_ops};

#[derive(Parser)]
#[command(name = "grouptool", about = "Comment grouping diagnostics")]
struct Cli {
    /// Custom settings TOML (defaults are embedded)
    #[arg(long, global = true)]
    settings: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split a comment into groups learned from a history file
    Groups {
        /// Path to the history file (one comment per line)
        history_file: String,
        /// Comment to split
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List completions for a partially typed comment
    Expand {
        /// Path to the history file (one comment per line)
        history_file: String,
        /// Partial comment; a trailing space means the last word is complete
        partial: String,
        /// Maximum number of expansions (default: expansion.max_results)
        #[arg(short, long)]
        n: Option<usize>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Path to the settings file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(path) = &cli.settings {
        let content = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading {path}: {e}");
            process::exit(1);
        });
        if let Err(e) = stt_engine::settings::init_custom(content) {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }

    match cli.command {
        Command::Groups {
            history_file,
            text,
            json,
        } => group_ops::groups(&history_file, &text, json),
        Command::Expand {
            history_file,
            partial,
            n,
            json,
        } => group_ops::expand(&history_file, &partial, n, json),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
