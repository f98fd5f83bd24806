//! Robot mode JSON output implementation.

use serde::Serialize;
use tracing::{debug, error, instrument, trace};

use crate::error::SnipError;
use crate::store::{CatalogEntry, Snippet};

use super::{Output, RobotFormat, VersionInfo};

/// JSON output implementation for agents and scripting.
pub struct RobotOutput {
    format: RobotFormat,
}

#[derive(Serialize)]
struct Stored<'a> {
    ok: bool,
    #[serde(flatten)]
    snippet: &'a Snippet,
}

#[derive(Serialize)]
struct Retrieved<'a> {
    keyword: &'a str,
    found: bool,
    message: Option<&'a str>,
}

#[derive(Serialize)]
struct Deleted<'a> {
    ok: bool,
    keyword: &'a str,
    deleted: bool,
}

#[derive(Serialize)]
struct Catalog<'a> {
    count: usize,
    snippets: &'a [CatalogEntry],
}

#[derive(Serialize)]
struct SearchResults<'a> {
    pattern: &'a str,
    count: usize,
    results: &'a [Snippet],
}

#[derive(Serialize)]
struct ErrorReport {
    error: bool,
    message: String,
    suggestion: Option<&'static str>,
    recoverable: bool,
}

#[derive(Serialize)]
struct RobotQuickStart<'a> {
    tool: &'static str,
    version: &'a str,
    description: &'static str,
    commands: RobotCommands,
    output_modes: OutputModes,
}

#[derive(Serialize)]
struct RobotCommands {
    put: &'static str,
    put_hidden: &'static str,
    get: &'static str,
    delete: &'static str,
    catalog: &'static str,
    search: &'static str,
}

#[derive(Serialize)]
struct OutputModes {
    human: &'static str,
    robot: &'static str,
    compact: &'static str,
}

impl RobotOutput {
    #[instrument]
    pub fn new(format: RobotFormat) -> Self {
        debug!(?format, "Creating RobotOutput");
        Self { format }
    }

    /// Serialize according to the selected format.
    pub(crate) fn render<T: Serialize + ?Sized>(&self, data: &T) -> serde_json::Result<String> {
        match self.format {
            RobotFormat::Json => serde_json::to_string_pretty(data),
            RobotFormat::JsonCompact => serde_json::to_string(data),
        }
    }

    fn output_json<T: Serialize + ?Sized>(&self, data: &T) {
        match self.render(data) {
            Ok(json) => {
                trace!(json_len = json.len(), "JSON serialized");
                println!("{json}");
            }
            Err(e) => error!(error = %e, "Failed to serialize output"),
        }
    }
}

impl Output for RobotOutput {
    fn snippet_stored(&self, snippet: &Snippet) {
        self.output_json(&Stored { ok: true, snippet });
    }

    fn snippet_retrieved(&self, keyword: &str, message: Option<&str>) {
        self.output_json(&Retrieved {
            keyword,
            found: message.is_some(),
            message,
        });
    }

    fn snippet_deleted(&self, keyword: &str, existed: bool) {
        self.output_json(&Deleted {
            ok: true,
            keyword,
            deleted: existed,
        });
    }

    fn catalog(&self, entries: &[CatalogEntry]) {
        self.output_json(&Catalog {
            count: entries.len(),
            snippets: entries,
        });
    }

    fn search_results(&self, pattern: &str, results: &[Snippet]) {
        self.output_json(&SearchResults {
            pattern,
            count: results.len(),
            results,
        });
    }

    fn version_info(&self, info: &VersionInfo) {
        self.output_json(info);
    }

    fn quick_start(&self, version: &str) {
        self.output_json(&RobotQuickStart {
            tool: "snippets",
            version,
            description: "Store, retrieve, list and search named text snippets",
            commands: RobotCommands {
                put: "snippets put <NAME> <SNIPPET>",
                put_hidden: "snippets put <NAME> <SNIPPET> --hide",
                get: "snippets get <NAME>",
                delete: "snippets delete <NAME>",
                catalog: "snippets catalog",
                search: "snippets search <TEXT>",
            },
            output_modes: OutputModes {
                human: "--format=text (default)",
                robot: "--robot or --format=json",
                compact: "--format=json-compact",
            },
        });
    }

    fn error(&self, error: &SnipError) {
        let report = ErrorReport {
            error: true,
            message: error.to_string(),
            suggestion: error.suggestion(),
            recoverable: error.is_user_recoverable(),
        };
        // Errors are always pretty-printed on stderr.
        match serde_json::to_string_pretty(&report) {
            Ok(json) => eprintln!("{json}"),
            Err(_) => eprintln!("{error}"),
        }
    }
}
