//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "namelint",
    version,
    about = "Naming-convention linter for identifier descriptors",
    long_about = "namelint classifies identifiers by semantic role and checks their names against a rule table.\n\nDescriptors are read as a JSON array or JSON Lines produced by a syntax provider.\n\nConfiguration precedence: CLI > namelint.toml > defaults.",
    after_help = "Examples:\n  namelint lint --input build/identifiers.jsonl\n  namelint lint --input 'build/**/*.jsonl' --output json\n  extract-identifiers src | namelint lint --input -\n  namelint analyze HttpRequestComponent",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[arg(long, short, global = true, action = clap::ArgAction::SetTrue, help = "Enable debug logging (RUST_LOG takes precedence)")]
    pub verbose: bool,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current namelint version."
    )]
    Version,
    /// Lint identifier descriptors
    #[command(
        about = "Run naming checks",
        long_about = "Classify every descriptor, evaluate the rule table and print the findings. Exits 1 when an error-severity finding is reported.",
        after_help = "Examples:\n  namelint lint --input ids.jsonl\n  namelint lint --input ids.json --output jsonl --jobs 4"
    )]
    Lint {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Explicit config file (skips discovery)")]
        config: Option<String>,
        #[arg(long = "input", short, help = "Descriptor file, glob pattern or '-' for stdin (repeatable)")]
        inputs: Vec<String>,
        #[arg(long, help = "Output mode: human|json|jsonl (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Worker threads (default: all cores)")]
        jobs: Option<usize>,
    },
    /// List the effective rule table
    #[command(
        about = "List rules",
        long_about = "Print the rule table after applying [rules] select/disable/severity and custom rules."
    )]
    Rules {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Explicit config file (skips discovery)")]
        config: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Show how a name is spelled
    #[command(
        about = "Analyze a name",
        long_about = "Print the case style, tokens, contractions and acronym mismatches detected for one name."
    )]
    Analyze {
        #[arg(help = "Identifier to analyze")]
        name: String,
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
