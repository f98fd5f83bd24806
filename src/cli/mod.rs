//! CLI argument definitions.

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Snippets - store and retrieve named snippets of text.
///
/// Robot Mode: Use --robot or --format=json for machine-parseable output.
#[derive(Parser, Debug)]
#[command(name = "snippets", version, about, long_about = None)]
#[command(propagate_version = true)]
#[allow(clippy::struct_excessive_bools)] // CLI flags naturally use multiple bools
pub struct Cli {
    /// Output format (text for humans, json for agents/scripts)
    #[arg(
        long,
        short = 'f',
        default_value = "text",
        global = true,
        env = "SNIPPETS_FORMAT"
    )]
    pub format: OutputFormat,

    /// Robot mode: equivalent to --format=json
    #[arg(long, global = true)]
    pub robot: bool,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress confirmations and non-error logs)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Disable colored output (any non-empty NO_COLOR other than 0/false/no/off)
    #[arg(long, global = true, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Snippet database file
    #[arg(long, global = true, env = "SNIPPETS_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// TOML config file
    #[arg(long, global = true, env = "SNIPPETS_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file (appended to)
    #[arg(long, global = true, env = "SNIPPETS_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log to stderr instead of the log file (wins over --log-file)
    #[arg(long, global = true)]
    pub log_stderr: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with optional color
    #[default]
    Text,
    /// JSON output for scripts and agents
    Json,
    /// Compact JSON (single line)
    JsonCompact,
}

impl Cli {
    /// Returns true if output should be JSON (robot mode or explicit --format=json).
    pub const fn use_json(&self) -> bool {
        self.robot || matches!(self.format, OutputFormat::Json | OutputFormat::JsonCompact)
    }

    /// Returns true if output should be compact JSON.
    pub const fn use_compact_json(&self) -> bool {
        matches!(self.format, OutputFormat::JsonCompact)
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Store(StoreCommand),

    // === Utilities ===
    /// Show version and build information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Commands that run against the snippet database.
#[derive(Subcommand, Debug)]
pub enum StoreCommand {
    /// Store a snippet (replaces any snippet with the same name)
    Put(PutArgs),

    /// Retrieve a snippet
    Get(GetArgs),

    /// Delete a snippet
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),

    /// List the names of all visible snippets
    #[command(visible_alias = "ls")]
    Catalog,

    /// Find visible snippets whose text contains a string
    Search(SearchArgs),
}

// === Argument Structs ===

/// Arguments for storing a snippet.
///
/// # Examples
///
/// ```bash
/// snippets put greeting "hello world"
///
/// # Keep it out of catalog and search
/// snippets put password "hunter2" --hide
///
/// # Make a hidden snippet visible again
/// snippets put password "hunter2" --show
/// ```
#[derive(Parser, Debug)]
pub struct PutArgs {
    /// Name of the snippet
    pub name: String,

    /// Snippet text
    pub snippet: String,

    /// Hide the snippet from catalog and search
    #[arg(long, conflicts_with = "show")]
    pub hide: bool,

    /// Make the snippet visible in catalog and search
    #[arg(long)]
    pub show: bool,
}

impl PutArgs {
    /// Requested visibility; `None` keeps an existing snippet's flag.
    pub const fn hidden(&self) -> Option<bool> {
        if self.hide {
            Some(true)
        } else if self.show {
            Some(false)
        } else {
            None
        }
    }
}

#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Name of the snippet
    pub name: String,
}

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Name of the snippet
    pub name: String,
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Text to look for inside snippet bodies (case-sensitive)
    pub mkey: String,
}

#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
