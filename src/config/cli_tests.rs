//! Tests for CLI argument parsing.

use std::path::PathBuf;

use super::cli::{Cli, Command};

mod parsing {
    use super::*;

    #[test]
    fn parse_bare_url() {
        let cli = Cli::parse_from_iter(["yarp", "https://example.com/api"]);

        assert_eq!(cli.url.as_deref(), Some("https://example.com/api"));
        assert!(cli.command.is_none());
        assert!(!cli.resolve_all);
        assert!(!cli.json);
    }

    #[test]
    fn parse_request_options() {
        let cli = Cli::parse_from_iter([
            "yarp",
            "https://example.com/items",
            "-X",
            "post",
            "-H",
            "X-Api-Key=secret",
            "--header",
            "Accept: application/json",
            "-q",
            "page=2",
            "-d",
            r#"{"name":"widget"}"#,
            "--json",
            "--resolve-all",
        ]);

        assert_eq!(cli.method.as_deref(), Some("post"));
        assert_eq!(cli.headers, vec!["X-Api-Key=secret", "Accept: application/json"]);
        assert_eq!(cli.query, vec!["page=2"]);
        assert_eq!(cli.data.as_deref(), Some(r#"{"name":"widget"}"#));
        assert!(cli.json);
        assert!(cli.resolve_all);
    }

    #[test]
    fn parse_auth_options() {
        let cli = Cli::parse_from_iter([
            "yarp",
            "https://example.com/",
            "--user",
            "alice",
            "--password",
            "s3cret",
            "--bearer",
            "t0ken",
        ]);

        assert_eq!(cli.user.as_deref(), Some("alice"));
        assert_eq!(cli.password.as_deref(), Some("s3cret"));
        assert_eq!(cli.bearer.as_deref(), Some("t0ken"));
    }

    #[test]
    fn parse_client_options() {
        let cli = Cli::parse_from_iter([
            "yarp",
            "https://example.com/",
            "--timeout",
            "30",
            "--connect-timeout",
            "5",
            "--user-agent",
            "probe/1",
            "-c",
            "custom.toml",
            "-v",
        ]);

        assert_eq!(cli.timeout, Some(30));
        assert_eq!(cli.connect_timeout, Some(5));
        assert_eq!(cli.user_agent.as_deref(), Some("probe/1"));
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn url_is_optional_for_config_files() {
        let cli = Cli::parse_from_iter(["yarp", "--config", "yarp.toml"]);

        assert!(cli.url.is_none());
    }
}

mod init_command {
    use super::*;

    #[test]
    fn init_uses_default_output() {
        let cli = Cli::parse_from_iter(["yarp", "init"]);

        assert!(cli.is_init());
        assert!(matches!(
            cli.command,
            Some(Command::Init { ref output }) if output == &PathBuf::from("yarp.toml")
        ));
    }

    #[test]
    fn init_accepts_output_path() {
        let cli = Cli::parse_from_iter(["yarp", "init", "--output", "conf/yarp.toml"]);

        assert!(matches!(
            cli.command,
            Some(Command::Init { ref output }) if output == &PathBuf::from("conf/yarp.toml")
        ));
    }

    #[test]
    fn request_is_not_init() {
        let cli = Cli::parse_from_iter(["yarp", "https://example.com/"]);

        assert!(!cli.is_init());
    }
}
