//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Text,
    /// The JSON response envelope
    Json,
}

impl From<OutputFormat> for trivia_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => trivia_domain::OutputFormat::Text,
            OutputFormat::Json => trivia_domain::OutputFormat::Json,
        }
    }
}

/// Question store selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// JSON file on disk
    Json,
    /// Process memory, seeded fresh on every run
    Memory,
}

/// CLI arguments for trivia
#[derive(Parser, Debug)]
#[command(name = "trivia")]
#[command(author, version, about = "Trivia questions: browse, search, add, delete and play")]
#[command(long_about = r#"
Trivia keeps a store of categorised questions and picks quiz questions from it.

Configuration files are loaded from (in priority order):
1. TRIVIA_* environment variables (TRIVIA_STORE__BACKEND=memory)
2. --config <path>     Explicit config file
3. ./trivia.toml       Project-level config
4. ~/.config/trivia/config.toml   Global config

Example:
  trivia questions --page 2
  trivia search title
  trivia quiz --previous 5 9 --category 4
  trivia play --category 2 --rounds 3
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Question store backend
    #[arg(long, value_enum, global = true)]
    pub store: Option<StoreKind>,

    /// Path of the JSON question store
    #[arg(long, value_name = "PATH", global = true)]
    pub store_path: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all categories
    Categories,

    /// List questions, ten per page
    Questions {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
    },

    /// List the questions of one category
    Category {
        /// Category id
        id: u64,
    },

    /// Search question text (case-insensitive)
    Search {
        /// Text to look for
        term: String,
    },

    /// Add a question
    Add {
        #[arg(long)]
        question: String,
        #[arg(long)]
        answer: String,
        /// Category id
        #[arg(long)]
        category: u64,
        #[arg(long)]
        difficulty: u32,
    },

    /// Delete a question
    Delete {
        /// Question id
        id: u64,
    },

    /// Draw the next quiz question
    Quiz {
        /// Ids already asked; pass the flag with no ids for a fresh quiz
        #[arg(long, num_args = 0.., value_name = "ID")]
        previous: Option<Vec<u64>>,

        /// Category to draw from (omitted = all)
        #[arg(long)]
        category: Option<u64>,
    },

    /// Play an interactive quiz
    Play {
        /// Category to play (asked interactively when omitted)
        #[arg(long)]
        category: Option<u64>,

        /// Number of questions
        #[arg(long)]
        rounds: Option<usize>,
    },

    /// Answer newline-delimited JSON requests from stdin
    ServeStdin,
}
