use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "aiact")]
#[command(about = "Preliminary EU AI Act risk classification for AI systems")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.aiact)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify an AI system against the EU AI Act
    Classify {
        /// Name of the AI system
        name: String,

        /// Organization deploying the system
        #[arg(short, long)]
        company: String,

        /// System description (what it does, who uses it, where)
        #[arg(short, long)]
        description: Option<String>,

        /// Read the description from a file instead
        #[arg(short, long, conflicts_with = "description")]
        file: Option<PathBuf>,

        /// Search the web for additional context
        #[arg(long)]
        search: bool,

        /// Skip web search even if enabled in config
        #[arg(long, conflicts_with = "search")]
        no_search: bool,

        /// Maximum results per search query
        #[arg(long)]
        max_results: Option<usize>,

        /// Print the report as JSON instead of the formatted view
        #[arg(short, long)]
        json: bool,

        /// Write the JSON report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show bundled example use cases and their expected classification
    Examples,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., search.enabled)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., search.enabled)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all config values
    List,

    /// Create the config file with a commented template
    Init,

    /// Print the config file path
    Path,
}
