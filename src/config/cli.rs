//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// yarp: send one HTTP request and print the normalized outcome
///
/// Responses up to status 399 print the parsed body. Status 400 and above
/// fail, unless --resolve-all is given, in which case the status code,
/// parsed body, raw body and headers are printed for any status.
#[derive(Debug, Parser)]
#[command(name = "yarp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Request URL
    pub url: Option<String>,

    /// HTTP method (default: get)
    #[arg(long, short = 'X')]
    pub method: Option<String>,

    /// HTTP headers in 'Key=Value' or 'Key: Value' format (can be specified multiple times)
    #[arg(long = "header", short = 'H', value_name = "K=V")]
    pub headers: Vec<String>,

    /// Query parameters in 'key=value' format (can be specified multiple times)
    #[arg(long = "query", short = 'q', value_name = "K=V")]
    pub query: Vec<String>,

    /// Request body
    #[arg(long, short = 'd')]
    pub data: Option<String>,

    /// Send the body as JSON and ask for JSON back
    #[arg(long)]
    pub json: bool,

    /// User name for basic authentication
    #[arg(long)]
    pub user: Option<String>,

    /// Password for basic authentication
    #[arg(long)]
    pub password: Option<String>,

    /// Bearer token for the Authorization header
    #[arg(long)]
    pub bearer: Option<String>,

    /// Succeed on any HTTP status and print the full response
    #[arg(long = "resolve-all")]
    pub resolve_all: bool,

    /// Total request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Connection timeout in seconds
    #[arg(long = "connect-timeout")]
    pub connect_timeout: Option<u64>,

    /// User-Agent header value
    #[arg(long = "user-agent")]
    pub user_agent: Option<String>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for yarp
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
