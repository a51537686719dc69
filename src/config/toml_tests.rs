//! Tests for TOML configuration parsing.

use super::ConfigError;
use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [client]
            timeout = 30
            connect_timeout = 5
            user_agent = "probe/1"

            [request]
            url = "https://example.com/items"
            method = "post"
            json = true
            resolve_all = true

            [request.headers]
            X-Api-Key = "secret"

            [request.query]
            page = "1"

            [auth]
            user = "alice"
            password = "s3cret"
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.client.timeout, Some(30));
        assert_eq!(config.client.connect_timeout, Some(5));
        assert_eq!(config.client.user_agent.as_deref(), Some("probe/1"));
        assert_eq!(config.request.url.as_deref(), Some("https://example.com/items"));
        assert_eq!(config.request.method.as_deref(), Some("post"));
        assert!(config.request.json);
        assert!(config.request.resolve_all);
        assert_eq!(config.request.headers["X-Api-Key"], "secret");
        assert_eq!(config.request.query["page"], "1");
        assert_eq!(config.auth.user.as_deref(), Some("alice"));
        assert_eq!(config.auth.password.as_deref(), Some("s3cret"));
        assert!(config.auth.bearer.is_none());
    }

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.request.url.is_none());
        assert!(config.request.headers.is_empty());
        assert!(!config.request.resolve_all);
        assert!(config.client.timeout.is_none());
    }

    #[test]
    fn reject_unknown_fields() {
        let result = TomlConfig::parse(
            r"
            [request]
            retries = 3
        ",
        );

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn reject_unknown_sections() {
        let result = TomlConfig::parse("[retry]\nmax_attempts = 3\n");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn reject_wrong_types() {
        let result = TomlConfig::parse("[client]\ntimeout = \"soon\"\n");

        assert!(result.is_err());
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = TomlConfig::load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::FileRead { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("yarp.toml");
        std::fs::write(&path, "[request]\nurl = \"https://example.com/\"\n").unwrap();

        let config = TomlConfig::load(&path).unwrap();

        assert_eq!(config.request.url.as_deref(), Some("https://example.com/"));
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert!(config.request.url.is_none());
        assert!(config.auth.bearer.is_none());
    }

    #[test]
    fn default_template_documents_every_section() {
        let template = default_config_template();

        for section in ["[client]", "[request]", "[auth]", "[request.headers]"] {
            assert!(template.contains(section), "missing {section}");
        }
    }
}
