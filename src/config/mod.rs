//! Configuration layer for the `yarp` command-line client.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file**
//! 3. **Built-in defaults**
//!
//! Headers and query parameters are merged by name: TOML entries first,
//! then CLI entries replace any with the same name.
//!
//! # Boolean Flag Semantics
//!
//! `--json` and `--resolve-all` use OR semantics: set in either source,
//! the result is `true`. Flags only enable, never disable.
//!
//! # Credentials
//!
//! A bearer token wins over a user/password pair. A password without a
//! user is rejected. Credentials never appear in the `Display` output.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
