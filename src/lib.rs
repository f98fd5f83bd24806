//! Snippets library - a keyword-indexed snippet store with a CLI front end.
//!
//! This library exposes the core functionality of the `snippets` CLI for use
//! in tests and potentially other applications.
//!
//! # Modules
//!
//! - `store`: SQLite-backed snippet storage (put/get/delete/catalog/search)
//! - `cli`: clap argument definitions
//! - `commands`: dispatch of subcommands onto the store
//! - `output`: Output mode abstraction (robot/human)
//! - `config`: Database and log path resolution
//! - `logging`: tracing subscriber setup
//! - `error`: Error types with user-recoverable hints
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod store;
