use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::render::Format;

/// Output format for listing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// If user specified a format, use it.
    /// Otherwise: TTY → Text, non-TTY (pipe) → Json
    pub fn resolve(user_choice: Option<OutputFormat>) -> OutputFormat {
        match user_choice {
            Some(fmt) => fmt,
            None => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "persona",
    about = "Persona Engine - build AI agent personas from a trait vocabulary",
    version = env!("CARGO_PKG_VERSION"),
    after_help = "Logs are written to: ~/.local/share/persona-engine/logs/persona.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to persona.yaml config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, help = "Suppress non-error output")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a profile file (or the default persona)
    Render {
        /// Profile document or persona export (YAML or JSON)
        #[arg(long, short = 'p')]
        profile: Option<PathBuf>,

        /// Export format (defaults to output.format from config)
        #[arg(long, short = 'f', value_enum)]
        format: Option<Format>,

        /// Save persona.<ext> to a directory instead of printing
        #[arg(long, num_args = 0..=1, value_name = "DIR")]
        download: Option<Option<PathBuf>>,

        /// Print HTML-escaped output wrapped in <pre>
        #[arg(long, conflicts_with = "download")]
        html: bool,
    },

    /// Randomize a persona from the vocabulary and render it
    Random {
        /// Vocabulary path or URL (defaults to vocabulary.source)
        #[arg(long)]
        vocab: Option<String>,

        #[arg(long, short = 'f', value_enum)]
        format: Option<Format>,

        /// Seed for a reproducible persona
        #[arg(long)]
        seed: Option<u64>,

        /// Save persona.<ext> to a directory instead of printing
        #[arg(long, num_args = 0..=1, value_name = "DIR")]
        download: Option<Option<PathBuf>>,

        /// Also write the profile document here
        #[arg(long, value_name = "FILE")]
        save: Option<PathBuf>,
    },

    /// Show the selectable options for a field
    Options {
        /// Field name, e.g. primary_traits
        field: String,

        #[arg(long)]
        vocab: Option<String>,

        /// Mark options selected in this profile
        #[arg(long, short = 'p')]
        profile: Option<PathBuf>,

        /// Case-insensitive substring filter
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Show every option (expand all groups)
        #[arg(long)]
        all: bool,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        output: Option<OutputFormat>,
    },

    /// List fields and dimensions
    Fields {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        output: Option<OutputFormat>,
    },

    /// Build a persona interactively
    Session {
        #[arg(long)]
        vocab: Option<String>,

        #[arg(long, short = 'f', value_enum)]
        format: Option<Format>,

        /// Start from this profile
        #[arg(long, short = 'p')]
        profile: Option<PathBuf>,
    },

    /// Build the trait index from a profile corpus
    Index {
        /// Corpus file (defaults to indexer.input)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Index file (defaults to indexer.output)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Summary format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Clean a raw vocabulary file
    Clean {
        /// Raw vocabulary (defaults to vocabulary.source)
        #[arg(long, short = 'i')]
        input: Option<String>,

        /// Cleaned vocabulary file
        #[arg(long, default_value = "trait-data-cleaned.json")]
        output: PathBuf,

        /// Report format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
