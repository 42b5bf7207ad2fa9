//! The Inkpost API client.
//!
//! [`Client`] wraps an [`HttpClient`] with everything an Inkpost call
//! needs: base URL resolution, basic-auth and version headers, form-body
//! submission, and response decoding. Resource operations (addresses,
//! checks, bank accounts, letters) are implemented on top of the three
//! generic verbs [`Client::get`], [`Client::post`] and [`Client::delete`].
//!
//! Every verb decodes the response body into the caller's type even when
//! the status is not a success, so the service's structured error payload
//! survives; see [`RequestError::Status`].

mod config;
mod error;
mod observer;

#[cfg(test)]
mod mod_tests;

pub use config::{API_VERSION, BASE_API, ClientBuilder, ConfigError, VERSION_HEADER};
pub use error::RequestError;
pub use observer::{NoopObserver, RequestObserver, RequestOutcome};

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::de::DeserializeOwned;
use url::Url;

use crate::transport::{HttpClient, HttpError, HttpRequest, ReqwestClient};

/// Client for the Inkpost API.
///
/// Holds only immutable configuration; concurrent calls from independent
/// tasks need no synchronization. Construct via [`ClientBuilder`].
///
/// # Example
///
/// ```no_run
/// use inkpost::client::ClientBuilder;
/// use inkpost::resources::Address;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ClientBuilder::new("test_0dc8d51e0acffcb1880e0f19c79b2f5b0cc").build()?;
/// let address: Address = client.get("addresses/adr_43769b47aed248c2", &[]).await?;
/// println!("{:?}", address.name);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client<H = ReqwestClient> {
    http: H,
    base_url: Url,
    auth_header: String,
    user_agent: String,
    timeout: Option<Duration>,
    observer: Arc<dyn RequestObserver>,
}

impl ClientBuilder {
    /// Builds a client backed by the production HTTP stack.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the API key is empty or unusable in a
    /// header, or the base URL is invalid.
    pub fn build(self) -> Result<Client, ConfigError> {
        self.build_with_http(ReqwestClient::new())
    }

    /// Builds a client backed by a custom [`HttpClient`] implementation.
    ///
    /// This is how tests substitute a mock transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the API key is empty or unusable in a
    /// header, or the base URL is invalid.
    pub fn build_with_http<H: HttpClient>(self, http: H) -> Result<Client<H>, ConfigError> {
        let config = self.validate()?;

        // Basic auth: the API key is the username, the password is empty.
        let auth_header = format!(
            "Basic {}",
            BASE64.encode(format!("{}:", config.api_key))
        );

        Ok(Client {
            http,
            base_url: config.base_url,
            auth_header,
            user_agent: config.user_agent,
            timeout: config.timeout,
            observer: config.observer,
        })
    }
}

impl<H: HttpClient> Client<H> {
    /// Performs a GET request.
    ///
    /// `query` pairs are percent-escaped and appended as the query string.
    ///
    /// # Errors
    ///
    /// See [`RequestError`]; a non-success status still carries the
    /// best-effort decoded body.
    pub async fn get<T: DeserializeOwned + fmt::Debug>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, RequestError<T>> {
        let mut url = self.endpoint_url(path)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        tracing::debug!("Inkpost GET {url}");

        self.execute(path, self.prepare(HttpRequest::get(url))).await
    }

    /// Performs a POST request with a flattened form body.
    ///
    /// `form` is the output of [`crate::form::encode`]. A non-empty form is
    /// sent URL-encoded with an `application/x-www-form-urlencoded` content
    /// type; an empty form sends no body and no content type.
    ///
    /// # Errors
    ///
    /// See [`RequestError`]; a non-success status still carries the
    /// best-effort decoded body.
    pub async fn post<T: DeserializeOwned + fmt::Debug>(
        &self,
        path: &str,
        form: &BTreeMap<String, String>,
    ) -> Result<T, RequestError<T>> {
        let url = self.endpoint_url(path)?;
        tracing::debug!("Inkpost POST {url}");

        let mut request = HttpRequest::post(url);
        if !form.is_empty() {
            let mut serializer = url::form_urlencoded::Serializer::new(String::new());
            for (key, value) in form {
                serializer.append_pair(key, value);
            }
            request = request
                .with_header(
                    http::header::CONTENT_TYPE,
                    http::HeaderValue::from_static("application/x-www-form-urlencoded"),
                )
                .with_body(serializer.finish().into_bytes());
        }

        self.execute(path, self.prepare(request)).await
    }

    /// Performs a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`RequestError`]; a non-success status still carries the
    /// best-effort decoded body.
    pub async fn delete<T: DeserializeOwned + fmt::Debug>(
        &self,
        path: &str,
    ) -> Result<T, RequestError<T>> {
        let url = self.endpoint_url(path)?;
        tracing::debug!("Inkpost DELETE {url}");

        self.execute(path, self.prepare(HttpRequest::delete(url)))
            .await
    }

    /// Resolves an endpoint path against the base URL.
    fn endpoint_url<T: fmt::Debug>(&self, path: &str) -> Result<Url, RequestError<T>> {
        self.base_url.join(path).map_err(|e| RequestError::Http {
            url: self.base_url.clone(),
            source: HttpError::InvalidUrl(format!("cannot join endpoint '{path}': {e}")),
        })
    }

    /// Attaches the headers every Inkpost request carries.
    fn prepare(&self, mut request: HttpRequest) -> HttpRequest {
        // Static strings validated at build time; dynamic values at
        // construction time. from_str only fails on control bytes, which
        // ClientBuilder::validate has already excluded.
        if let Ok(auth) = http::HeaderValue::from_str(&self.auth_header) {
            request.headers.insert(http::header::AUTHORIZATION, auth);
        }
        request.headers.insert(
            http::HeaderName::from_static("inkpost-version"),
            http::HeaderValue::from_static(API_VERSION),
        );
        request.headers.insert(
            http::header::ACCEPT,
            http::HeaderValue::from_static("application/json"),
        );
        if let Ok(agent) = http::HeaderValue::from_str(&self.user_agent) {
            request.headers.insert(http::header::USER_AGENT, agent);
        }
        request.timeout = self.timeout;
        request
    }

    /// Runs a prepared request and reports its outcome to the observer.
    async fn execute<T: DeserializeOwned + fmt::Debug>(
        &self,
        path: &str,
        request: HttpRequest,
    ) -> Result<T, RequestError<T>> {
        let method = request.method.clone();
        let started = Instant::now();

        let result = self.round_trip(request).await;

        let outcome = if result.is_ok() {
            RequestOutcome::Success
        } else {
            RequestOutcome::Error
        };
        self.observer
            .on_request(&method, path, outcome, started.elapsed());

        result
    }

    /// One HTTP round trip: send, then decode the body regardless of
    /// status so a structured error payload is never lost.
    async fn round_trip<T: DeserializeOwned + fmt::Debug>(
        &self,
        request: HttpRequest,
    ) -> Result<T, RequestError<T>> {
        let url = request.url.clone();

        let response = self
            .http
            .request(request)
            .await
            .map_err(|source| RequestError::Http {
                url: url.clone(),
                source,
            })?;

        if response.is_success() {
            return serde_json::from_slice(&response.body).map_err(|source| {
                RequestError::Decode {
                    url: url.clone(),
                    source,
                }
            });
        }

        // Decode anyway; the error payload lives in the body. A body that
        // fails to decode here is not an additional error.
        let decoded = serde_json::from_slice(&response.body).ok();
        Err(RequestError::Status {
            status: response.status,
            url,
            body: String::from_utf8_lossy(&response.body).into_owned(),
            decoded,
        })
    }
}

impl<H> fmt::Debug for Client<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("auth_header", &"[REDACTED]")
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
