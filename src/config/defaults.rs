//! Default values for configuration options.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

/// Default HTTP method for requests.
pub const METHOD: &str = "get";

/// Default `User-Agent` header sent by the command-line client.
pub const USER_AGENT: &str = concat!("yarp/", env!("CARGO_PKG_VERSION"));

/// Default path written by `yarp init`.
pub const CONFIG_FILE: &str = "yarp.toml";
