//! Command line argument parsing for the Colloquy CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Colloquy - a small intent-classifying chatbot
#[derive(Parser, Debug, Clone)]
#[command(name = "colloquy")]
#[command(about = "A small intent-classifying chatbot")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ColloquyArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Chatbot configuration file (JSON)
    #[arg(short, long, env = "COLLOQUY_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Intent registry file (JSON array of intents) replacing the built-in set
    #[arg(short, long, env = "COLLOQUY_INTENTS", global = true)]
    pub intents: Option<PathBuf>,

    /// Lemma table file (JSON object of word -> lemma)
    #[arg(short, long, env = "COLLOQUY_LEMMAS", global = true)]
    pub lemmas: Option<PathBuf>,

    /// Seed for response selection
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ColloquyArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Chat interactively on standard input
    Chat,

    /// Answer a single message
    Ask(AskArgs),

    /// Show how a message is classified
    Classify(ClassifyArgs),

    /// Run the canned demo conversation
    Demo,

    /// List the known intents
    Intents(IntentsArgs),
}

/// Arguments for answering one message
#[derive(Parser, Debug, Clone)]
pub struct AskArgs {
    /// The message (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

/// Arguments for classifying one message
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// The message (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

/// Arguments for listing intents
#[derive(Parser, Debug, Clone)]
pub struct IntentsArgs {
    /// Also print patterns and responses
    #[arg(short = 'a', long)]
    pub all: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
