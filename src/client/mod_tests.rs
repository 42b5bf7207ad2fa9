//! Tests for the API client.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine as _;
use serde::Deserialize;

use super::{API_VERSION, ClientBuilder, ConfigError, RequestError, RequestObserver, RequestOutcome};
use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Mock HTTP client that returns a configurable sequence of responses.
#[derive(Debug)]
struct MockClient {
    responses: std::sync::Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: std::sync::Mutex<Vec<HttpRequest>>,
}

impl MockClient {
    fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: std::sync::Mutex::new(responses),
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }

    fn json(status: http::StatusCode, body: &str) -> Self {
        Self::new(vec![Ok(HttpResponse::new(
            status,
            http::HeaderMap::new(),
            body.as_bytes().to_vec(),
        ))])
    }

    fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

impl HttpClient for Arc<MockClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}

/// Minimal response envelope mirroring the service's error embedding.
#[derive(Debug, Default, Deserialize, PartialEq)]
struct Envelope {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    error: Option<EmbeddedError>,
}

#[derive(Debug, Deserialize, PartialEq)]
struct EmbeddedError {
    message: String,
    status_code: i64,
}

const API_KEY: &str = "test_0dc8d51e0acffcb1880e0f19c79b2f5b0cc";

fn client_with(mock: Arc<MockClient>) -> super::Client<Arc<MockClient>> {
    ClientBuilder::new(API_KEY)
        .build_with_http(mock)
        .expect("valid test configuration")
}

mod builder {
    use super::*;

    #[test]
    fn empty_api_key_is_rejected() {
        let result = ClientBuilder::new("").build_with_http(MockClient::new(vec![]));
        assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn api_key_with_control_bytes_is_rejected() {
        let result = ClientBuilder::new("key\nwith-newline").build_with_http(MockClient::new(vec![]));
        assert!(matches!(result, Err(ConfigError::InvalidApiKey)));
    }

    #[test]
    fn unparseable_base_url_is_rejected() {
        let result = ClientBuilder::new(API_KEY)
            .base_url("not a url")
            .build_with_http(MockClient::new(vec![]));
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn user_agent_with_control_bytes_is_rejected() {
        let result = ClientBuilder::new(API_KEY)
            .user_agent("agent\r\n")
            .build_with_http(MockClient::new(vec![]));
        assert!(matches!(result, Err(ConfigError::InvalidUserAgent)));
    }

    #[tokio::test]
    async fn base_url_without_trailing_slash_is_normalized() {
        let mock = Arc::new(MockClient::json(http::StatusCode::OK, "{}"));
        let client = ClientBuilder::new(API_KEY)
            .base_url("https://staging.inkpost.test/v1")
            .build_with_http(mock.clone())
            .unwrap();

        let _: Result<Envelope, _> = client.get("addresses", &[]).await;

        let requests = mock.captured_requests();
        assert_eq!(
            requests[0].url.as_str(),
            "https://staging.inkpost.test/v1/addresses"
        );
    }

    #[test]
    fn debug_redacts_api_key() {
        let builder = ClientBuilder::new(API_KEY);
        let client = client_with(Arc::new(MockClient::new(vec![])));

        assert!(!format!("{builder:?}").contains(API_KEY));
        assert!(!format!("{client:?}").contains(API_KEY));
    }
}

mod request_headers {
    use super::*;

    #[tokio::test]
    async fn every_request_carries_auth_version_accept_and_agent() {
        let mock = Arc::new(MockClient::json(http::StatusCode::OK, "{}"));
        let client = client_with(mock.clone());

        let _: Result<Envelope, _> = client.get("addresses", &[]).await;

        let requests = mock.captured_requests();
        let headers = &requests[0].headers;

        let expected_auth = format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(format!("{API_KEY}:"))
        );
        assert_eq!(
            headers.get(http::header::AUTHORIZATION).unwrap(),
            expected_auth.as_str()
        );
        assert_eq!(headers.get("Inkpost-Version").unwrap(), API_VERSION);
        assert_eq!(
            headers.get(http::header::ACCEPT).unwrap(),
            "application/json"
        );
        assert_eq!(
            headers.get(http::header::USER_AGENT).unwrap(),
            ClientBuilder::DEFAULT_USER_AGENT
        );
    }

    #[tokio::test]
    async fn custom_user_agent_is_sent() {
        let mock = Arc::new(MockClient::json(http::StatusCode::OK, "{}"));
        let client = ClientBuilder::new(API_KEY)
            .user_agent("mailer/2.3")
            .build_with_http(mock.clone())
            .unwrap();

        let _: Result<Envelope, _> = client.get("addresses", &[]).await;

        let requests = mock.captured_requests();
        assert_eq!(
            requests[0].headers.get(http::header::USER_AGENT).unwrap(),
            "mailer/2.3"
        );
    }

    #[tokio::test]
    async fn configured_timeout_is_applied_per_request() {
        let mock = Arc::new(MockClient::json(http::StatusCode::OK, "{}"));
        let client = ClientBuilder::new(API_KEY)
            .timeout(Duration::from_secs(7))
            .build_with_http(mock.clone())
            .unwrap();

        let _: Result<Envelope, _> = client.get("addresses", &[]).await;

        let requests = mock.captured_requests();
        assert_eq!(requests[0].timeout, Some(Duration::from_secs(7)));
    }
}

mod get {
    use super::*;

    #[tokio::test]
    async fn decodes_success_response() {
        let mock = Arc::new(MockClient::json(
            http::StatusCode::OK,
            r#"{"id":"adr_123"}"#,
        ));
        let client = client_with(mock);

        let envelope: Envelope = client.get("addresses/adr_123", &[]).await.unwrap();

        assert_eq!(envelope.id.as_deref(), Some("adr_123"));
        assert!(envelope.error.is_none());
    }

    #[tokio::test]
    async fn sends_no_body() {
        let mock = Arc::new(MockClient::json(http::StatusCode::OK, "{}"));
        let client = client_with(mock.clone());

        let _: Result<Envelope, _> = client.get("addresses", &[]).await;

        assert!(mock.captured_requests()[0].body.is_none());
    }

    #[tokio::test]
    async fn query_parameters_are_escaped() {
        let mock = Arc::new(MockClient::json(http::StatusCode::OK, "{}"));
        let client = client_with(mock.clone());

        let _: Result<Envelope, _> = client
            .get(
                "addresses",
                &[("count", "10".to_owned()), ("q", "a b&c".to_owned())],
            )
            .await;

        let requests = mock.captured_requests();
        assert_eq!(
            requests[0].url.query(),
            Some("count=10&q=a+b%26c")
        );
    }

    #[tokio::test]
    async fn connection_error_is_reported_as_http() {
        let mock = Arc::new(MockClient::new(vec![Err(HttpError::Timeout)]));
        let client = client_with(mock);

        let result: Result<Envelope, _> = client.get("addresses", &[]).await;

        match result {
            Err(RequestError::Http { source, .. }) => {
                assert!(matches!(source, HttpError::Timeout));
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_success_body_is_a_decode_error() {
        let mock = Arc::new(MockClient::json(http::StatusCode::OK, "not json"));
        let client = client_with(mock);

        let result: Result<Envelope, _> = client.get("addresses", &[]).await;

        assert!(matches!(result, Err(RequestError::Decode { .. })));
    }
}

mod post {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[tokio::test]
    async fn form_is_urlencoded_with_content_type() {
        let mock = Arc::new(MockClient::json(http::StatusCode::OK, "{}"));
        let client = client_with(mock.clone());

        let _: Result<Envelope, _> = client
            .post(
                "addresses",
                &form(&[("name", "Ana Mendieta"), ("metadata[batch]", "42")]),
            )
            .await;

        let requests = mock.captured_requests();
        assert_eq!(requests[0].method, http::Method::POST);
        assert_eq!(
            requests[0].headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
        let body = String::from_utf8(requests[0].body.clone().unwrap()).unwrap();
        assert_eq!(body, "metadata%5Bbatch%5D=42&name=Ana+Mendieta");
    }

    #[tokio::test]
    async fn empty_form_sends_no_body_and_no_content_type() {
        let mock = Arc::new(MockClient::json(http::StatusCode::OK, "{}"));
        let client = client_with(mock.clone());

        let _: Result<Envelope, _> = client.post("letters", &BTreeMap::new()).await;

        let requests = mock.captured_requests();
        assert!(requests[0].body.is_none());
        assert!(!requests[0].headers.contains_key(http::header::CONTENT_TYPE));
    }

    #[tokio::test]
    async fn unprocessable_entity_carries_decoded_error_payload() {
        let mock = Arc::new(MockClient::json(
            http::StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"error":{"message":"bad input","status_code":422}}"#,
        ));
        let client = client_with(mock);

        let result: Result<Envelope, _> = client.post("addresses", &form(&[("name", "x")])).await;

        match result {
            Err(RequestError::Status {
                status,
                body,
                decoded,
                ..
            }) => {
                assert_eq!(status, http::StatusCode::UNPROCESSABLE_ENTITY);
                assert!(body.contains("bad input"));

                let envelope = decoded.expect("error body should decode");
                let embedded = envelope.error.expect("embedded error should be present");
                assert_eq!(embedded.message, "bad input");
                assert_eq!(embedded.status_code, 422);
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }
}

mod delete {
    use super::*;

    #[tokio::test]
    async fn sends_delete_with_no_body() {
        let mock = Arc::new(MockClient::json(http::StatusCode::OK, "{}"));
        let client = client_with(mock.clone());

        let _: Result<Envelope, _> = client.delete("addresses/adr_123").await;

        let requests = mock.captured_requests();
        assert_eq!(requests[0].method, http::Method::DELETE);
        assert!(requests[0].body.is_none());
        assert!(
            requests[0]
                .url
                .as_str()
                .ends_with("/v1/addresses/adr_123")
        );
    }
}

mod status_errors {
    use super::*;

    #[tokio::test]
    async fn undecodable_error_body_is_swallowed() {
        let mock = Arc::new(MockClient::json(
            http::StatusCode::INTERNAL_SERVER_ERROR,
            "<html>gateway error</html>",
        ));
        let client = client_with(mock);

        let result: Result<Envelope, _> = client.get("addresses", &[]).await;

        match result {
            Err(RequestError::Status {
                status, decoded, ..
            }) => {
                assert_eq!(status, http::StatusCode::INTERNAL_SERVER_ERROR);
                assert!(decoded.is_none());
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn error_display_includes_status_and_body() {
        let mock = Arc::new(MockClient::json(
            http::StatusCode::NOT_FOUND,
            r#"{"error":{"message":"no such address","status_code":404}}"#,
        ));
        let client = client_with(mock);

        let err = client
            .get::<Envelope>("addresses/missing", &[])
            .await
            .unwrap_err();

        let display = err.to_string();
        assert!(display.contains("404"));
        assert!(display.contains("no such address"));
        assert_eq!(err.status(), Some(http::StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn decoded_accessors_expose_partial_value() {
        let mock = Arc::new(MockClient::json(
            http::StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"id":"adr_9","error":{"message":"bad","status_code":422}}"#,
        ));
        let client = client_with(mock);

        let err = client.get::<Envelope>("addresses", &[]).await.unwrap_err();

        assert_eq!(
            err.decoded().and_then(|e| e.id.as_deref()),
            Some("adr_9")
        );
        let envelope = err.into_decoded().unwrap();
        assert_eq!(envelope.id.as_deref(), Some("adr_9"));
    }
}

mod observer {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: std::sync::Mutex<Vec<(http::Method, String, RequestOutcome)>>,
    }

    impl RequestObserver for Recorder {
        fn on_request(
            &self,
            method: &http::Method,
            path: &str,
            outcome: RequestOutcome,
            _elapsed: Duration,
        ) {
            self.calls
                .lock()
                .unwrap()
                .push((method.clone(), path.to_owned(), outcome));
        }
    }

    #[tokio::test]
    async fn success_and_error_outcomes_are_recorded() {
        let recorder = Arc::new(Recorder::default());
        let mock = Arc::new(MockClient::new(vec![
            Ok(HttpResponse::new(
                http::StatusCode::OK,
                http::HeaderMap::new(),
                b"{}".to_vec(),
            )),
            Ok(HttpResponse::new(
                http::StatusCode::UNPROCESSABLE_ENTITY,
                http::HeaderMap::new(),
                b"{}".to_vec(),
            )),
        ]));
        let client = ClientBuilder::new(API_KEY)
            .observer(recorder.clone())
            .build_with_http(mock)
            .unwrap();

        let _: Result<Envelope, _> = client.get("addresses", &[]).await;
        let _: Result<Envelope, _> = client.get("addresses/adr_1", &[]).await;

        let calls = recorder.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            (&calls[0].0, calls[0].1.as_str(), calls[0].2),
            (&http::Method::GET, "addresses", RequestOutcome::Success)
        );
        assert_eq!(
            (&calls[1].0, calls[1].1.as_str(), calls[1].2),
            (&http::Method::GET, "addresses/adr_1", RequestOutcome::Error)
        );
    }
}
