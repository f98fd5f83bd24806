//! Snippets CLI - store and retrieve named snippets of text.
//!
//! Provides both human-friendly and agent-friendly (robot mode) interfaces.
#![forbid(unsafe_code)]

use std::io;

use clap::Parser;
use tracing::{debug, error};

use snippets::cli::{Cli, Commands};
use snippets::commands;
use snippets::config::Settings;
use snippets::error::Result;
use snippets::logging::init_logging;
use snippets::output::{Output, OutputMode, VersionInfo};
use snippets::store::SnippetStore;

/// Build information embedded at compile time.
mod build_info {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub fn git_sha() -> &'static str {
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    }

    pub fn git_dirty() -> bool {
        option_env!("VERGEN_GIT_DIRTY") == Some("true")
    }

    pub fn build_timestamp() -> &'static str {
        option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown")
    }

    pub fn rustc_semver() -> &'static str {
        option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown")
    }

    pub fn target() -> &'static str {
        option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown")
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let output = OutputMode::from_cli(&cli).into_output();

    if let Err(e) = run(&cli, output.as_ref()) {
        error!(error = %e, "Command failed");
        output.error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, output: &dyn Output) -> Result<()> {
    match &cli.command {
        None => {
            output.quick_start(build_info::VERSION);
            Ok(())
        }
        Some(Commands::Version) => {
            output.version_info(&version_info());
            Ok(())
        }
        Some(Commands::Completions(args)) => {
            use clap::CommandFactory;
            clap_complete::generate(args.shell, &mut Cli::command(), "snippets", &mut io::stdout());
            Ok(())
        }
        Some(Commands::Store(command)) => {
            let settings = Settings::resolve(cli)?;
            init_logging(&settings.log, cli.use_json(), cli.verbose, cli.quiet)?;
            debug!(
                database = %settings.database.display(),
                config = ?settings.config_file,
                "Settings resolved"
            );

            let mut store = SnippetStore::open(&settings.database)?;
            let result = commands::execute(command, &mut store, output);
            let closed = store.close();
            result?;
            closed
        }
    }
}

fn version_info() -> VersionInfo {
    VersionInfo {
        version: build_info::VERSION,
        git_sha: build_info::git_sha(),
        git_dirty: build_info::git_dirty(),
        build_timestamp: build_info::build_timestamp(),
        rustc_version: build_info::rustc_semver(),
        target: build_info::target(),
    }
}
