//! CLI module for neodb
//!
//! Provides command-line interface for:
//! - inspect: Look up a single NEO
//! - query: Filter close approaches, print or export them

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, InspectArgs, QueryArgs};
pub use commands::{inspect, open_database, query, resolve_config, run, run_cli};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_approaches, write_neo};
