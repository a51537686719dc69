//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the binary. All validation is performed during construction.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde_json::Value;

use crate::request::{Credentials, RequestConfig};
use crate::transport::ClientSettings;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the binary.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// The request to send
    pub request: RequestConfig,

    /// Succeed on any HTTP status
    pub resolve_all: bool,

    /// Settings for the HTTP client
    pub client: ClientSettings,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = |d: Option<Duration>| {
            d.map_or_else(|| "none".to_string(), |d| format!("{}s", d.as_secs()))
        };

        write!(
            f,
            "Config {{ request: {}, resolve_all: {}, auth: {}, timeout: {}, connect_timeout: {} }}",
            self.request.describe(),
            self.resolve_all,
            if self.request.auth.is_some() { "set" } else { "none" },
            secs(self.client.timeout),
            secs(self.client.connect_timeout),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The URL is missing
    /// - Header or query syntax is invalid
    /// - The body is not JSON while JSON mode is on
    /// - A timeout is zero
    /// - A password is given without a user
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let url = Self::resolve_url(cli, toml)?;

        // Priority: CLI explicit > TOML > default
        let method = cli
            .method
            .as_deref()
            .or_else(|| toml.and_then(|t| t.request.method.as_deref()))
            .unwrap_or(defaults::METHOD);

        let json = cli.json || toml.is_some_and(|t| t.request.json);

        let mut request = RequestConfig::new(method, url).with_json(json);
        request.headers = Self::resolve_headers(cli, toml)?;
        request.query = Self::resolve_query(cli, toml)?;
        request.body = Self::resolve_body(cli, json)?;
        request.auth = Self::resolve_auth(cli, toml)?;

        Ok(Self {
            request,
            resolve_all: cli.resolve_all || toml.is_some_and(|t| t.request.resolve_all),
            client: Self::resolve_client(cli, toml)?,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    // The URL is not parsed here; a malformed one fails when the request is sent.
    fn resolve_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        cli.url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.request.url.as_deref()))
            .map(ToString::to_string)
            .ok_or_else(|| {
                ConfigError::missing(field::URL, "Pass a URL or set request.url in config file")
            })
    }

    fn resolve_headers(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<BTreeMap<String, String>, ConfigError> {
        let mut headers = toml.map(|t| t.request.headers.clone()).unwrap_or_default();

        for header_str in &cli.headers {
            let (name, value) = parse_header_string(header_str)?;
            headers.insert(name, value);
        }

        Ok(headers)
    }

    fn resolve_query(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<BTreeMap<String, String>, ConfigError> {
        let mut query = toml.map(|t| t.request.query.clone()).unwrap_or_default();

        for pair in &cli.query {
            let (name, value) = pair
                .split_once('=')
                .filter(|(name, _)| !name.is_empty())
                .ok_or_else(|| ConfigError::InvalidQuery {
                    value: pair.clone(),
                })?;
            query.insert(name.to_string(), value.to_string());
        }

        Ok(query)
    }

    fn resolve_body(cli: &Cli, json: bool) -> Result<Option<Value>, ConfigError> {
        let Some(ref data) = cli.data else {
            return Ok(None);
        };

        if json {
            serde_json::from_str(data)
                .map(Some)
                .map_err(ConfigError::InvalidBody)
        } else {
            Ok(Some(Value::String(data.clone())))
        }
    }

    fn resolve_auth(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<Credentials>, ConfigError> {
        let auth = toml.map(|t| &t.auth);

        // Bearer wins over basic (CLI, then TOML)
        let bearer = cli
            .bearer
            .as_deref()
            .or_else(|| auth.and_then(|a| a.bearer.as_deref()));
        if let Some(token) = bearer {
            return Ok(Some(Credentials::bearer(token)));
        }

        let user = cli
            .user
            .as_deref()
            .or_else(|| auth.and_then(|a| a.user.as_deref()));
        let password = cli
            .password
            .as_deref()
            .or_else(|| auth.and_then(|a| a.password.as_deref()));

        match (user, password) {
            (Some(user), password) => Ok(Some(Credentials::basic(
                user,
                password.unwrap_or_default(),
            ))),
            (None, Some(_)) => Err(ConfigError::InvalidAuth(
                "password given without a user".to_string(),
            )),
            (None, None) => Ok(None),
        }
    }

    fn resolve_client(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<ClientSettings, ConfigError> {
        let client = toml.map(|t| &t.client);

        let timeout = cli.timeout.or_else(|| client.and_then(|c| c.timeout));
        let connect_timeout = cli
            .connect_timeout
            .or_else(|| client.and_then(|c| c.connect_timeout));

        let user_agent = cli
            .user_agent
            .as_deref()
            .or_else(|| client.and_then(|c| c.user_agent.as_deref()))
            .unwrap_or(defaults::USER_AGENT);

        Ok(ClientSettings {
            timeout: timeout.map(|s| positive_secs("timeout", s)).transpose()?,
            connect_timeout: connect_timeout
                .map(|s| positive_secs("connect_timeout", s))
                .transpose()?,
            user_agent: Some(user_agent.to_string()),
        })
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn positive_secs(field: &'static str, seconds: u64) -> Result<Duration, ConfigError> {
    if seconds == 0 {
        return Err(ConfigError::InvalidDuration {
            field,
            reason: "must be greater than 0".to_string(),
        });
    }
    Ok(Duration::from_secs(seconds))
}

fn parse_header_string(s: &str) -> Result<(String, String), ConfigError> {
    // Split at whichever of "Key=Value" or "Key: Value" comes first
    s.find(['=', ':'])
        .map(|at| (s[..at].trim(), s[at + 1..].trim()))
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| ConfigError::InvalidHeader {
            value: s.to_string(),
        })
}
