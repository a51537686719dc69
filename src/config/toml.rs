//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// HTTP client section
    #[serde(default)]
    pub client: ClientSection,

    /// Request defaults section
    #[serde(default)]
    pub request: RequestSection,

    /// Credentials section
    #[serde(default)]
    pub auth: AuthSection,
}

/// HTTP client configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientSection {
    /// Total request timeout in seconds
    pub timeout: Option<u64>,

    /// Connection timeout in seconds
    pub connect_timeout: Option<u64>,

    /// User-Agent header value
    pub user_agent: Option<String>,
}

/// Request defaults section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestSection {
    /// Request URL
    pub url: Option<String>,

    /// HTTP method (default: get)
    pub method: Option<String>,

    /// Send the body as JSON and ask for JSON back
    #[serde(default)]
    pub json: bool,

    /// Succeed on any HTTP status
    #[serde(default)]
    pub resolve_all: bool,

    /// HTTP headers as key-value pairs
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Query parameters as key-value pairs
    #[serde(default)]
    pub query: BTreeMap<String, String>,
}

/// Credentials section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthSection {
    /// User name for basic authentication
    pub user: Option<String>,

    /// Password for basic authentication
    pub password: Option<String>,

    /// Bearer token
    pub bearer: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# yarp configuration file
# Command-line options take precedence over values in this file.

[client]
# Total request timeout in seconds (default: none)
# timeout = 30

# Connection timeout in seconds (default: none)
# connect_timeout = 10

# User-Agent header value (default: yarp/<version>)
# user_agent = "yarp"

[request]
# Request URL (can be given on the command line instead)
# url = "https://api.example.com/items"

# HTTP method (default: get)
# method = "get"

# Send the body as JSON and ask for JSON back
# json = false

# Succeed on any HTTP status and print the full response
# resolve_all = false

# HTTP headers (CLI headers with the same name replace these)
# [request.headers]
# X-Custom-Header = "value"

# Query parameters (CLI parameters with the same name replace these)
# [request.query]
# page = "1"

[auth]
# Basic authentication
# user = "alice"
# password = "secret"

# Bearer token (takes precedence over user/password)
# bearer = "your-token-here"
"#
    .to_string()
}
