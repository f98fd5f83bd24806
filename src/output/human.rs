//! Human-friendly output implementation using `console` styling.

use console::style;
use tracing::{debug, instrument};

use crate::error::SnipError;
use crate::store::{CatalogEntry, Snippet};

use super::{Output, VersionInfo, plural};

/// Styled terminal output implementation for human users.
pub struct HumanOutput {
    quiet: bool,
}

impl HumanOutput {
    #[instrument]
    pub fn new(quiet: bool) -> Self {
        debug!("Creating HumanOutput");
        Self { quiet }
    }

    fn stored_text(snippet: &Snippet) -> String {
        let visibility = if snippet.hidden { "hidden" } else { "visible" };
        format!(
            "Stored {:?} as {} ({})",
            snippet.message,
            style(&snippet.keyword).green().bold(),
            style(visibility).dim()
        )
    }

    fn catalog_text(entries: &[CatalogEntry]) -> String {
        let mut out = style(plural(entries.len(), "snippet", "snippets"))
            .bold()
            .to_string();
        for entry in entries {
            out.push_str("\n  ");
            out.push_str(&entry.keyword);
        }
        out
    }

    fn search_text(pattern: &str, results: &[Snippet]) -> String {
        let header = format!(
            "{} for {pattern:?}",
            plural(results.len(), "match", "matches")
        );
        let mut out = style(header).bold().to_string();
        for snippet in results {
            out.push_str(&format!(
                "\n  {}: {:?}",
                style(&snippet.keyword).green(),
                snippet.message
            ));
        }
        out
    }
}

impl Output for HumanOutput {
    fn snippet_stored(&self, snippet: &Snippet) {
        if !self.quiet {
            println!("{}", Self::stored_text(snippet));
        }
    }

    fn snippet_retrieved(&self, keyword: &str, message: Option<&str>) {
        match message {
            Some(message) => println!("{message}"),
            None => println!(
                "{}",
                style(format!("Snippet not found: {keyword:?}")).yellow()
            ),
        }
    }

    fn snippet_deleted(&self, keyword: &str, existed: bool) {
        if self.quiet {
            return;
        }
        if existed {
            println!("Deleted {}", style(keyword).green().bold());
        } else {
            println!("Deleted {} {}", style(keyword).bold(), style("(not stored)").dim());
        }
    }

    fn catalog(&self, entries: &[CatalogEntry]) {
        println!("{}", Self::catalog_text(entries));
    }

    fn search_results(&self, pattern: &str, results: &[Snippet]) {
        println!("{}", Self::search_text(pattern, results));
    }

    fn version_info(&self, info: &VersionInfo) {
        println!("snippets {}", info.version);
        println!(
            "git: {}{}",
            info.git_sha,
            if info.git_dirty { " (dirty)" } else { "" }
        );
        println!("built: {}", info.build_timestamp);
        println!("rustc: {}", info.rustc_version);
        println!("target: {}", info.target);
    }

    fn quick_start(&self, version: &str) {
        println!("{} {version} - named text snippets\n", style("snippets").bold().cyan());

        println!("{}", style("QUICK START").bold().underlined());
        println!();
        println!("  {}  Store a snippet", style("snippets put greeting \"hello\"").green());
        println!(
            "  {}  Store, hidden from listings",
            style("snippets put pw \"s3cret\" --hide").green()
        );
        println!("  {}  Retrieve a snippet", style("snippets get greeting").green());
        println!("  {}  List visible snippets", style("snippets catalog").green());
        println!("  {}  Search snippet text", style("snippets search hello").green());
        println!("  {}  Delete a snippet", style("snippets delete greeting").green());
        println!();
        println!("{}", style("ROBOT MODE").bold().underlined());
        println!();
        println!("  {}  JSON output", style("snippets --robot <command>").cyan());
        println!();
        println!("Run {} for full help", style("snippets --help").yellow());
    }

    fn error(&self, error: &SnipError) {
        eprintln!("{}: {error}", style("Error").red().bold());
        if let Some(suggestion) = error.suggestion() {
            eprintln!("{}: {suggestion}", style("Hint").yellow());
        }
    }
}
