//! Tests for `RequestConfig` and `Credentials`.

use serde_json::json;

use super::{Credentials, RequestConfig};

mod construction {
    use super::*;

    #[test]
    fn bare_url_is_a_get() {
        let from_str = RequestConfig::from("http://example.com/api/test");
        let from_string = RequestConfig::from("http://example.com/api/test".to_string());

        assert_eq!(from_str, RequestConfig::new("get", "http://example.com/api/test"));
        assert_eq!(from_str, from_string);
    }

    #[test]
    fn builders_fill_fields() {
        let config = RequestConfig::new("post", "http://example.com/items")
            .with_header("X-Trace", "abc")
            .with_query("page", "2")
            .with_body(json!({"name": "widget"}))
            .with_json(true)
            .with_auth(Credentials::bearer("t0ken"));

        assert_eq!(config.method, "post");
        assert_eq!(config.headers.get("X-Trace").map(String::as_str), Some("abc"));
        assert_eq!(config.query.get("page").map(String::as_str), Some("2"));
        assert_eq!(config.body, Some(json!({"name": "widget"})));
        assert!(config.json);
        assert_eq!(config.auth, Some(Credentials::bearer("t0ken")));
    }

    #[test]
    fn with_header_replaces_existing_value() {
        let config = RequestConfig::get("http://example.com/")
            .with_header("Accept", "text/plain")
            .with_header("Accept", "text/html");

        assert_eq!(config.headers.len(), 1);
        assert_eq!(config.headers["Accept"], "text/html");
    }
}

mod redaction {
    use super::*;

    fn with_secret() -> RequestConfig {
        RequestConfig::get("http://example.com/private").with_auth(Credentials::basic("alice", "s3cret"))
    }

    #[test]
    fn redacted_drops_credentials_without_touching_original() {
        let original = with_secret();
        let redacted = original.redacted();

        assert!(redacted.auth.is_none());
        assert_eq!(redacted.url, original.url);
        assert_eq!(original.auth, Some(Credentials::basic("alice", "s3cret")));
    }

    #[test]
    fn describe_never_contains_secrets() {
        let description = with_secret().describe();

        assert!(!description.contains("s3cret"));
        assert!(!description.contains("alice"));
        assert!(!description.contains("auth"));
        assert!(description.contains("http://example.com/private"));
    }

    #[test]
    fn describe_skips_empty_fields() {
        let description = RequestConfig::get("http://example.com/api/test").describe();

        assert_eq!(
            description,
            r#"{"method":"get","url":"http://example.com/api/test"}"#
        );
    }

    #[test]
    fn debug_hides_secrets() {
        let debug = format!("{:?}", with_secret());

        assert!(debug.contains("alice"));
        assert!(!debug.contains("s3cret"));

        let bearer = format!("{:?}", Credentials::bearer("t0ken"));
        assert!(!bearer.contains("t0ken"));
    }
}

mod serde_shape {
    use super::*;

    #[test]
    fn credentials_serialize_untagged() {
        assert_eq!(
            serde_json::to_value(Credentials::basic("u", "p")).unwrap(),
            json!({"user": "u", "pass": "p"})
        );
        assert_eq!(
            serde_json::to_value(Credentials::bearer("t")).unwrap(),
            json!({"bearer": "t"})
        );
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: RequestConfig =
            serde_json::from_value(json!({"url": "http://example.com/"})).unwrap();

        assert_eq!(config, RequestConfig::get("http://example.com/"));
    }

    #[test]
    fn deserializes_credentials_by_shape() {
        let config: RequestConfig = serde_json::from_value(json!({
            "method": "put",
            "url": "http://example.com/",
            "auth": {"bearer": "t"}
        }))
        .unwrap();

        assert_eq!(config.auth, Some(Credentials::bearer("t")));
    }
}
