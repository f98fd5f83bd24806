//! CLI test runner with fluent assertions.
//!
//! Provides infrastructure for executing the `snippets` binary against a
//! private temporary database and verifying output, exit codes and JSON
//! responses in robot mode.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde_json::Value;
use tempfile::TempDir;

/// Environment variables that would leak the developer's setup into tests.
const SCRUBBED_ENV: &[&str] = &[
    "SNIPPETS_FORMAT",
    "SNIPPETS_CONFIG",
    "NO_COLOR",
    "RUST_LOG",
];

/// Main test runner for the `snippets` CLI binary.
///
/// Every runner owns a temporary directory holding its database, log file
/// and config home, so successive `run` calls on one runner share state
/// while separate runners are isolated.
///
/// # Example
///
/// ```ignore
/// let cli = CliRunner::new();
/// cli.run(&["put", "alpha", "hello"]).assert_success();
/// cli.run(&["get", "alpha"]).assert_stdout_contains("hello");
/// ```
pub struct CliRunner {
    binary_path: PathBuf,
    env_vars: HashMap<String, Option<String>>,
    home: TempDir,
}

impl Default for CliRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CliRunner {
    /// Create a new CLI runner pointing to the compiled `snippets` binary.
    #[must_use]
    pub fn new() -> Self {
        let home = tempfile::tempdir().expect("Failed to create temp dir");
        Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_snippets")),
            env_vars: HashMap::new(),
            home,
        }
    }

    /// Temporary directory owned by this runner.
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.home.path()
    }

    /// Database file used by this runner.
    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.dir().join("snippets.db")
    }

    /// Log file used by this runner.
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.dir().join("snippets.log")
    }

    /// Add an environment variable for command execution.
    #[must_use]
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env_vars
            .insert(key.to_string(), Some(value.to_string()));
        self
    }

    /// Remove an environment variable, including the runner's defaults.
    #[must_use]
    pub fn without_env(mut self, key: &str) -> Self {
        self.env_vars.insert(key.to_string(), None);
        self
    }

    /// Execute the command with the given arguments.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute.
    #[must_use]
    pub fn run(&self, args: &[&str]) -> CliResult {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());

        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        cmd.env("SNIPPETS_DB", self.db_path())
            .env("SNIPPETS_LOG_FILE", self.log_path())
            .env("XDG_CONFIG_HOME", self.dir().join("config"))
            .env("XDG_DATA_HOME", self.dir().join("data"));

        // Per-test overrides win over the defaults above
        for (key, value) in &self.env_vars {
            match value {
                Some(value) => cmd.env(key, value),
                None => cmd.env_remove(key),
            };
        }

        let output = cmd.output().expect("Failed to execute command");

        CliResult {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
            args: args.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Execute with `--robot` flag for JSON output.
    #[must_use]
    pub fn run_robot(&self, args: &[&str]) -> CliResult {
        let mut full_args = vec!["--robot"];
        full_args.extend(args);
        self.run(&full_args)
    }
}

/// Captured output from CLI execution with fluent assertions.
#[derive(Debug, Clone)]
pub struct CliResult {
    /// Standard output captured from the command.
    pub stdout: String,
    /// Standard error captured from the command.
    pub stderr: String,
    /// Exit code from the command.
    pub exit_code: i32,
    /// Arguments passed to the command.
    pub args: Vec<String>,
}

impl CliResult {
    /// Check if the command succeeded (exit code 0).
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    // === Fluent Assertions (all return &Self for chaining) ===

    /// Assert the command succeeded.
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success(),
            "Command {:?} failed with exit code {}: {}",
            self.args,
            self.exit_code,
            self.stderr
        );
        self
    }

    /// Assert the command failed.
    pub fn assert_failure(&self) -> &Self {
        assert!(
            !self.success(),
            "Command {:?} unexpectedly succeeded",
            self.args
        );
        self
    }

    /// Assert a specific exit code.
    pub fn assert_exit_code(&self, expected: i32) -> &Self {
        assert_eq!(
            self.exit_code, expected,
            "Expected exit code {expected}, got {} for {:?}",
            self.exit_code, self.args
        );
        self
    }

    // === Stdout Assertions ===

    /// Assert stdout contains the given text.
    pub fn assert_stdout_contains(&self, text: &str) -> &Self {
        assert!(
            self.stdout.contains(text),
            "stdout does not contain \"{text}\"\nActual stdout:\n{}",
            self.stdout
        );
        self
    }

    /// Assert stdout does not contain the given text.
    pub fn assert_stdout_not_contains(&self, text: &str) -> &Self {
        assert!(
            !self.stdout.contains(text),
            "stdout unexpectedly contains \"{text}\"\nActual stdout:\n{}",
            self.stdout
        );
        self
    }

    /// Assert stdout is empty.
    pub fn assert_stdout_is_empty(&self) -> &Self {
        assert!(
            self.stdout.is_empty(),
            "Expected empty stdout, got: {}",
            self.stdout
        );
        self
    }

    // === Stderr Assertions ===

    /// Assert stderr contains the given text.
    pub fn assert_stderr_contains(&self, text: &str) -> &Self {
        assert!(
            self.stderr.contains(text),
            "stderr does not contain \"{text}\"\nActual stderr:\n{}",
            self.stderr
        );
        self
    }

    /// Assert stderr is empty (or contains only whitespace).
    pub fn assert_stderr_is_empty(&self) -> &Self {
        assert!(
            self.stderr.trim().is_empty(),
            "Expected empty stderr, got: {}",
            self.stderr
        );
        self
    }

    // === JSON Assertions (for robot mode) ===

    /// Parse stdout as JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|_| panic!("Failed to parse JSON from stdout:\n{}", self.stdout))
    }

    /// Parse stderr as JSON (robot mode errors).
    #[must_use]
    pub fn stderr_json(&self) -> Value {
        serde_json::from_str(&self.stderr)
            .unwrap_or_else(|_| panic!("Failed to parse JSON from stderr:\n{}", self.stderr))
    }

    /// Assert a JSON field matches an expected value using JSON pointer syntax.
    pub fn assert_json_field(&self, json_pointer: &str, expected: &Value) -> &Self {
        let json = self.json();
        let actual = json.pointer(json_pointer).unwrap_or_else(|| {
            panic!(
                "JSON path {json_pointer} not found in:\n{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            )
        });
        assert_eq!(actual, expected, "JSON field {json_pointer} mismatch");
        self
    }

    /// Assert a JSON array has the expected length.
    pub fn assert_json_array_len(&self, json_pointer: &str, expected_len: usize) -> &Self {
        let json = self.json();
        let arr = json
            .pointer(json_pointer)
            .unwrap_or_else(|| panic!("JSON path {json_pointer} not found"))
            .as_array()
            .unwrap_or_else(|| panic!("JSON path {json_pointer} is not an array"));
        assert_eq!(
            arr.len(),
            expected_len,
            "Array at {json_pointer} has {} elements, expected {expected_len}",
            arr.len()
        );
        self
    }
}
