//! Tests for `ReqwestClient`.
//!
//! Exchanges against a live server are covered in `tests/normalize_http.rs`.

use std::time::Duration;

use super::*;

mod reqwest_client {
    use super::*;

    #[test]
    fn default_creates_client() {
        let client = ReqwestClient::default();

        assert!(format!("{client:?}").contains("ReqwestClient"));
    }

    #[test]
    fn from_settings_accepts_timeouts_and_user_agent() {
        let settings = ClientSettings {
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: Some(Duration::from_secs(5)),
            user_agent: Some("yarp-test/1.0".to_string()),
        };

        assert!(ReqwestClient::from_settings(&settings).is_ok());
    }

    #[test]
    fn from_settings_accepts_empty_settings() {
        assert!(ReqwestClient::from_settings(&ClientSettings::default()).is_ok());
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestClient>();
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error_or_proxy_response() {
        let client = ReqwestClient::new();
        let url = url::Url::parse("http://invalid.invalid.invalid/").unwrap();

        let result = client.request(HttpRequest::get(url)).await;

        // Behind a proxy the proxy may answer with an error status instead.
        match result {
            Err(TransportError::Connection(_)) => {}
            Ok(resp) if !resp.status.is_success() => {}
            other => panic!("Expected connection error or proxy error response, got {other:?}"),
        }
    }
}
