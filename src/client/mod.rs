//! Client layer: the request wrapper that owns HTTP configuration and verb methods.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::domain::{ApiKey, ValidationError};
use crate::transport::{
    HttpMethod, HttpRequest, HttpResponse, QueryError, decode_json_body, encode_query,
};

#[cfg(test)]
pub(crate) mod fake;

/// Default Iterable API root (US data center).
pub const DEFAULT_BASE_URL: &str = "https://api.iterable.com/api";

/// Environment variable read by [`IterableClient::from_env`].
pub const API_KEY_ENV: &str = "ITERABLE_API_KEY";

const TCP_KEEPALIVE: Duration = Duration::from_secs(60);
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

/// Boxed future returned by [`HttpTransport::send`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Error type transports report for I/O failures.
pub type TransportError = Box<dyn StdError + Send + Sync>;

/// Something that can execute one [`HttpRequest`].
///
/// The default implementation is backed by `reqwest`; tests and callers can
/// substitute their own through [`IterableClient::from_transport`].
pub trait HttpTransport: Send + Sync {
    fn send<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, Result<HttpResponse, TransportError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, Result<HttpResponse, TransportError>> {
        Box::pin(async move {
            let mut url = join_url(&self.base_url, &request.path)?;
            if !request.query.is_empty() {
                url.query_pairs_mut().extend_pairs(&request.query);
            }

            let mut builder = self.client.request(request.method.into(), url);
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok::<_, TransportError>(HttpResponse { status, body })
        })
    }
}

fn join_url(base: &Url, path: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    ))
}

fn default_headers(api_key: &ApiKey) -> Result<HeaderMap, IterableError> {
    let mut key =
        HeaderValue::from_str(api_key.as_str()).map_err(|_| ValidationError::InvalidCharacters {
            field: ApiKey::FIELD,
        })?;
    key.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(ApiKey::HEADER, key);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`IterableClient`].
///
/// Construction-time problems surface as [`IterableError::Validation`] or
/// [`IterableError::InvalidBaseUrl`]. Everything else is the transport or the
/// API rejecting a call; nothing is retried.
pub enum IterableError {
    /// One of the domain constructors rejected an invalid value.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The configured base URL is not a valid absolute URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] TransportError),

    /// The request payload could not be encoded as JSON.
    #[error("request could not be serialized: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl IterableError {
    /// HTTP status of a rejected call, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<QueryError> for IterableError {
    fn from(value: QueryError) -> Self {
        match value {
            QueryError::Json(err) => Self::Serialize(err),
            QueryError::Validation(err) => Self::Validation(err),
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`IterableClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct IterableClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl IterableClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API root, e.g. `https://api.eu.iterable.com/api`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build an [`IterableClient`].
    pub fn build(self) -> Result<IterableClient, IterableError> {
        let base_url = Url::parse(&self.base_url)?;

        let mut builder = reqwest::Client::builder()
            .default_headers(default_headers(&self.api_key)?)
            .tcp_keepalive(TCP_KEEPALIVE)
            .pool_idle_timeout(POOL_IDLE_TIMEOUT);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| IterableError::Transport(Box::new(err)))?;

        Ok(IterableClient {
            base_url: base_url.as_str().trim_end_matches('/').to_owned(),
            http: Arc::new(ReqwestTransport { client, base_url }),
        })
    }
}

#[derive(Clone)]
/// Iterable request wrapper.
///
/// Holds one configured HTTP client with the `Api-Key` and
/// `Content-Type: application/json` headers and keep-alive connection reuse.
/// Cloning is cheap and shares the connection pool.
///
/// Every verb resolves with the decoded response body. Non-2xx responses
/// become [`IterableError::HttpStatus`] with the original status and body.
pub struct IterableClient {
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for IterableClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterableClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl IterableClient {
    /// Create a client for `api_key` using the default base URL.
    ///
    /// Fails with `apiKey is required` when the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, IterableError> {
        Self::builder(ApiKey::new(api_key)?).build()
    }

    /// Create a client from the `ITERABLE_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, IterableError> {
        Self::from_env_value(std::env::var(API_KEY_ENV).ok())
    }

    fn from_env_value(value: Option<String>) -> Result<Self, IterableError> {
        let value = value.ok_or(ValidationError::Required {
            field: ApiKey::FIELD,
        })?;
        Self::new(value)
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> IterableClientBuilder {
        IterableClientBuilder::new(api_key)
    }

    /// Wrap a caller-provided transport. Paths are handed to it unchanged.
    pub fn from_transport(transport: impl HttpTransport + 'static) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(transport),
        }
    }

    /// API root every path is resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET path` with no query parameters.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, IterableError> {
        self.execute(HttpRequest::new(HttpMethod::Get, path)).await
    }

    /// `GET path` with `params` forwarded as the query string.
    ///
    /// `params` must serialize to a JSON object (or `null`).
    pub async fn get_with_params<T, P>(&self, path: &str, params: &P) -> Result<T, IterableError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let query = encode_query(params)?;
        self.execute(HttpRequest::new(HttpMethod::Get, path).with_query(query))
            .await
    }

    /// `POST path` with `data` as the JSON body.
    pub async fn post<T, B>(&self, path: &str, data: &B) -> Result<T, IterableError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(HttpMethod::Post, path, data).await
    }

    /// `PUT path` with `data` as the JSON body.
    pub async fn put<T, B>(&self, path: &str, data: &B) -> Result<T, IterableError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(HttpMethod::Put, path, data).await
    }

    /// `PATCH path` with `data` as the JSON body.
    pub async fn patch<T, B>(&self, path: &str, data: &B) -> Result<T, IterableError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(HttpMethod::Patch, path, data).await
    }

    /// `DELETE path` without a body.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, IterableError> {
        self.execute(HttpRequest::new(HttpMethod::Delete, path))
            .await
    }

    async fn send_json<T, B>(
        &self,
        method: HttpMethod,
        path: &str,
        data: &B,
    ) -> Result<T, IterableError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(data).map_err(IterableError::Serialize)?;
        self.execute(HttpRequest::new(method, path).with_body(body))
            .await
    }

    async fn execute<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, IterableError> {
        let method = request.method;
        let path = request.path.clone();
        debug!(%method, %path, query_params = request.query.len(), "sending request");

        let response = self
            .http
            .send(request)
            .await
            .map_err(IterableError::Transport)?;
        debug!(%method, %path, status = response.status, "received response");

        if !response.is_success() {
            warn!(%method, %path, status = response.status, "request rejected");
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(IterableError::HttpStatus {
                status: response.status,
                body,
            });
        }

        decode_json_body(&response.body).map_err(|err| IterableError::Parse(Box::new(err)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::domain::ApiResponse;

    use super::fake::FakeTransport;
    use super::*;

    const SUCCESS: &str = r#"{ "msg": "", "code": "Success", "params": null }"#;

    #[test]
    fn new_rejects_missing_api_key() {
        let err = IterableClient::new("").unwrap_err();
        assert_eq!(err.to_string(), "apiKey is required");

        let err = IterableClient::new("   ").unwrap_err();
        assert!(matches!(
            err,
            IterableError::Validation(ValidationError::Required {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn from_env_requires_variable() {
        let err = IterableClient::from_env_value(None).unwrap_err();
        assert_eq!(err.to_string(), "apiKey is required");

        let client = IterableClient::from_env_value(Some("key".to_owned())).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn default_headers_carry_api_key_and_json_content_type() {
        let headers = default_headers(&ApiKey::new("blah").unwrap()).unwrap();
        assert_eq!(headers.get("Api-Key").unwrap(), "blah");
        assert!(headers.get("Api-Key").unwrap().is_sensitive());
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn new_rejects_key_that_cannot_be_a_header() {
        let err = IterableClient::new("bad\nkey").unwrap_err();
        assert!(matches!(
            err,
            IterableError::Validation(ValidationError::InvalidCharacters {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn builder_applies_base_url_override() {
        let client = IterableClient::builder(ApiKey::new("key").unwrap())
            .base_url("https://api.eu.iterable.com/api/")
            .timeout(Duration::from_secs(5))
            .user_agent("iterable-api-tests")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://api.eu.iterable.com/api");

        let client = IterableClient::new("key").unwrap();
        assert_eq!(client.base_url(), "https://api.iterable.com/api");
    }

    #[test]
    fn builder_rejects_invalid_base_url() {
        let err = IterableClient::builder(ApiKey::new("key").unwrap())
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, IterableError::InvalidBaseUrl(_)));
    }

    #[test]
    fn join_url_keeps_base_path() {
        let base = Url::parse("https://api.iterable.com/api").unwrap();
        assert_eq!(
            join_url(&base, "/lists").unwrap().as_str(),
            "https://api.iterable.com/api/lists"
        );

        let base = Url::parse("http://127.0.0.1:8080/api/").unwrap();
        assert_eq!(
            join_url(&base, "/catalogs/fancy restaurants/items/1").unwrap().as_str(),
            "http://127.0.0.1:8080/api/catalogs/fancy%20restaurants/items/1"
        );
    }

    #[tokio::test]
    async fn get_sends_empty_query_and_returns_body() {
        let transport = FakeTransport::new(200, r#"{ "lists": [] }"#);
        let client = transport.client();

        let body: Value = client.get("/lists").await.unwrap();
        assert!(body["lists"].as_array().unwrap().is_empty());

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/lists");
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn get_with_params_forwards_params_verbatim() {
        let transport = FakeTransport::new(200, r#"{ "lists": [] }"#);
        let client = transport.client();

        let body: Value = client
            .get_with_params("/lists", &json!({ "limit": 100 }))
            .await
            .unwrap();
        assert!(body["lists"].is_array());

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.query, vec![("limit".to_owned(), "100".to_owned())]);
    }

    #[tokio::test]
    async fn get_with_params_rejects_non_object_without_sending() {
        let transport = FakeTransport::new(200, "{}");
        let client = transport.client();

        let err = client
            .get_with_params::<Value, _>("/lists", &json!("limit=100"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            IterableError::Validation(ValidationError::NotAnObject { .. })
        ));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn post_forwards_body_and_decodes_envelope() {
        let transport = FakeTransport::new(200, SUCCESS);
        let client = transport.client();
        let data = json!({
            "email": "some@email.com",
            "dataFields": { "some": "custom_field" }
        });

        let response: ApiResponse = client.post("/users/update", &data).await.unwrap();
        assert!(response.is_success());

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/users/update");
        assert_eq!(request.body, Some(data));
    }

    #[tokio::test]
    async fn put_forwards_body() {
        let transport = FakeTransport::new(200, SUCCESS);
        let client = transport.client();
        let value = json!({ "value": { "name": "Tikki Tacos" } });

        let response: ApiResponse = client
            .put("/catalogs/fancy-restaurants/items/1", &value)
            .await
            .unwrap();
        assert!(response.is_success());

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.path, "/catalogs/fancy-restaurants/items/1");
        assert_eq!(request.body, Some(value));
    }

    #[tokio::test]
    async fn patch_forwards_body() {
        let transport = FakeTransport::new(200, SUCCESS);
        let client = transport.client();
        let update = json!({ "update": { "name": "Tikki Tacos" } });

        let response: ApiResponse = client
            .patch("/catalogs/fancy-restaurants/items/1", &update)
            .await
            .unwrap();
        assert!(response.is_success());

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Patch);
        assert_eq!(request.body, Some(update));
    }

    #[tokio::test]
    async fn delete_sends_no_body() {
        let transport = FakeTransport::new(200, SUCCESS);
        let client = transport.client();

        let response: ApiResponse = client.delete("/users/some@email.com").await.unwrap();
        assert!(response.is_success());

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.path, "/users/some@email.com");
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn unauthorized_surfaces_status_and_body() {
        let transport = FakeTransport::new(401, r#"{ "msg": "Invalid API key", "code": "BadApiKey" }"#);
        let client = transport.client();

        let err = client.get::<Value>("/lists").await.unwrap_err();
        assert_eq!(err.status(), Some(401));
        match err {
            IterableError::HttpStatus { status, body } => {
                assert_eq!(status, 401);
                assert!(body.unwrap().contains("BadApiKey"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn blank_error_body_maps_to_none() {
        let transport = FakeTransport::new(503, "   ");
        let client = transport.client();

        let err = client.delete::<Value>("/lists/1").await.unwrap_err();
        assert!(matches!(
            err,
            IterableError::HttpStatus {
                status: 503,
                body: None
            }
        ));
    }

    #[tokio::test]
    async fn transport_failure_is_propagated() {
        let transport = FakeTransport::failing("connection refused");
        let client = transport.client();

        let err = client.get::<Value>("/lists").await.unwrap_err();
        assert!(matches!(err, IterableError::Transport(_)));
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn invalid_json_maps_to_parse_error() {
        let transport = FakeTransport::new(200, "{ not json }");
        let client = transport.client();

        let err = client.get::<Value>("/lists").await.unwrap_err();
        assert!(matches!(err, IterableError::Parse(_)));
    }

    #[tokio::test]
    async fn empty_success_body_decodes_as_null() {
        let transport = FakeTransport::new(200, "");
        let client = transport.client();

        let body: Value = client.delete("/catalogs/empty").await.unwrap();
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn each_call_issues_exactly_one_request() {
        let transport = FakeTransport::new(200, SUCCESS);
        let client = transport.client();

        let _: Value = client.get("/lists").await.unwrap();
        let _: Value = client.post("/lists", &json!({ "name": "x" })).await.unwrap();
        assert_eq!(transport.requests().len(), 2);
    }
}
