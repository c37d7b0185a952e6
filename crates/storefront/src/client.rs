//! HTTP transport

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::{header, Method, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

use crate::config::ClientConfig;
use crate::endpoints::{self, Endpoints};
use crate::error::{Error, ErrorDetail, Result};
use crate::services;
use crate::validate::Validate;
use crate::VERSION;

/// Fallback wait when a 429 carries no usable `Retry-After`
const DEFAULT_RETRY_AFTER_SECS: u64 = 30;

/// Storefront API client
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: ClientConfig,
    endpoints: Endpoints,
    http: reqwest::Client,
    access_token: RwLock<Option<String>>,
}

impl Client {
    /// Create a client against the given base URL with default settings
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::default().with_base_url(base_url))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Url::parse(&config.base_url)?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&format!("storefront-rust/{}", VERSION))
                .map_err(|e| Error::Config(format!("invalid user agent: {e}")))?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        let endpoints = Endpoints::new(config.base_url.clone());
        let access_token = RwLock::new(config.access_token.clone());

        Ok(Self {
            inner: Arc::new(ClientInner {
                config,
                endpoints,
                http,
                access_token,
            }),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.inner.endpoints
    }

    /// Attach a bearer token to every subsequent request
    pub fn set_access_token(&self, token: impl Into<String>) {
        *self.inner.access_token.write() = Some(token.into());
    }

    pub fn clear_access_token(&self) {
        *self.inner.access_token.write() = None;
    }

    pub fn access_token(&self) -> Option<String> {
        self.inner.access_token.read().clone()
    }

    pub fn auth(&self) -> services::AuthService {
        services::AuthService::new(self.clone())
    }

    pub fn customers(&self) -> services::CustomersService {
        services::CustomersService::new(self.clone())
    }

    pub fn employees(&self) -> services::EmployeesService {
        services::EmployeesService::new(self.clone())
    }

    pub fn products(&self) -> services::ProductsService {
        services::ProductsService::new(self.clone())
    }

    pub fn product_versions(&self) -> services::ProductVersionsService {
        services::ProductVersionsService::new(self.clone())
    }

    pub fn brands(&self) -> services::ReferenceService<crate::BrandResponse> {
        services::ReferenceService::new(self.clone(), endpoints::brand::PATHS)
    }

    pub fn categories(&self) -> services::ReferenceService<crate::CategoryResponse> {
        services::ReferenceService::new(self.clone(), endpoints::category::PATHS)
    }

    pub fn suppliers(&self) -> services::ReferenceService<crate::SupplierResponse> {
        services::ReferenceService::new(self.clone(), endpoints::supplier::PATHS)
    }

    pub fn import_orders(&self) -> services::ImportOrdersService {
        services::ImportOrdersService::new(self.clone())
    }

    pub fn cart(&self) -> services::CartService {
        services::CartService::new(self.clone())
    }

    pub fn promotions(&self) -> services::PromotionsService {
        services::PromotionsService::new(self.clone())
    }

    pub fn reviews(&self) -> services::ReviewsService {
        services::ReviewsService::new(self.clone())
    }

    pub fn banners(&self) -> services::BannersService {
        services::BannersService::new(self.clone())
    }

    /// Make a GET request
    pub(crate) async fn get<T>(&self, path: &str, query: &[(&'static str, String)]) -> Result<T>
    where
        T: DeserializeOwned + Validate,
    {
        self.request(Method::GET, path, None::<&()>, query).await
    }

    /// Make a POST request
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Validate,
        B: Serialize,
    {
        self.request(Method::POST, path, Some(body), &[]).await
    }

    /// Make a PUT request
    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Validate,
        B: Serialize,
    {
        self.request(Method::PUT, path, Some(body), &[]).await
    }

    /// Make a DELETE request, discarding any response body
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.execute(Method::DELETE, path, None::<&()>, &[])
            .await
            .map(|_| ())
    }

    async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: &[(&'static str, String)],
    ) -> Result<T>
    where
        T: DeserializeOwned + Validate,
        B: Serialize,
    {
        let bytes = self.execute(method, path, body, query).await?;
        let value = decode::<T>(bytes.as_deref())?;
        self.conform(path, value)
    }

    /// Run the contract checks, failing or warning per configuration
    fn conform<T: Validate>(&self, path: &str, value: T) -> Result<T> {
        if let Err(violation) = value.validate() {
            if self.inner.config.strict_contracts {
                return Err(violation.into());
            }
            tracing::warn!(%path, %violation, "response drifted from contract");
        }
        Ok(value)
    }

    /// Send with retries; `None` means the server returned no content
    async fn execute<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: &[(&'static str, String)],
    ) -> Result<Option<Vec<u8>>> {
        let mut url = Url::parse(&self.inner.endpoints.url(path))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        let config = &self.inner.config;
        let idempotent = method != Method::POST && method != Method::PATCH;
        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            let mut request = self.inner.http.request(method.clone(), url.clone());

            if let Some(body) = body {
                request = request.json(body);
            }

            if let Some(token) = self.access_token() {
                request = request.bearer_auth(token);
            }

            tracing::debug!(%method, %url, attempt, "sending request");

            let response = match request.send().await {
                Ok(resp) => resp,
                Err(e) => {
                    // a non-idempotent write is only resent if it never left the client
                    let resend = idempotent || e.is_connect();
                    let error = Error::Http(e);
                    if resend && error.is_retryable() && attempt < config.max_retries {
                        tracing::warn!(%url, attempt, %error, "transport error, retrying");
                        last_error = Some(error);
                        tokio::time::sleep(backoff(config.retry_delay, attempt)).await;
                        continue;
                    }
                    return Err(error);
                }
            };

            let status = response.status();

            if status == StatusCode::NO_CONTENT {
                return Ok(None);
            }

            if status == StatusCode::TOO_MANY_REQUESTS {
                let retry_after = response
                    .headers()
                    .get(header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_RETRY_AFTER_SECS);

                let error = Error::RateLimit { retry_after };

                if Duration::from_secs(retry_after) > config.timeout {
                    tracing::warn!(%url, retry_after, "Retry-After exceeds timeout, giving up");
                    return Err(error);
                }

                if attempt < config.max_retries {
                    tracing::warn!(%url, retry_after, "rate limited, waiting");
                    last_error = Some(error);
                    tokio::time::sleep(Duration::from_secs(retry_after)).await;
                    continue;
                }

                return Err(error);
            }

            let body_bytes = response.bytes().await?;

            if status.is_success() {
                return Ok(Some(body_bytes.to_vec()));
            }

            let error = api_error(status, &body_bytes);

            if idempotent && error.is_retryable() && attempt < config.max_retries {
                tracing::warn!(%url, attempt, %error, "server error, retrying");
                last_error = Some(error);
                tokio::time::sleep(backoff(config.retry_delay, attempt)).await;
                continue;
            }

            return Err(error);
        }

        Err(last_error.unwrap_or_else(|| Error::Config("request failed".to_string())))
    }
}

fn backoff(base: Duration, attempt: u32) -> Duration {
    base * (1u32 << attempt.min(16))
}

/// Decode a success body, unwrapping an optional `{ "data": ... }` envelope
fn decode<T: DeserializeOwned>(body: Option<&[u8]>) -> Result<T> {
    let body = match body {
        Some(bytes) if !bytes.iter().all(u8::is_ascii_whitespace) => bytes,
        _ => return Ok(serde_json::from_str("null")?),
    };

    #[derive(Deserialize)]
    struct ApiResponse<T> {
        data: Option<T>,
    }

    if let Ok(resp) = serde_json::from_slice::<ApiResponse<T>>(body) {
        if let Some(data) = resp.data {
            return Ok(data);
        }
    }

    Ok(serde_json::from_slice(body)?)
}

/// Build an API error from a failed response body
fn api_error(status: StatusCode, body: &[u8]) -> Error {
    #[derive(Deserialize)]
    struct Wrapped {
        error: ErrorBody,
    }

    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        code: Option<String>,
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        details: Vec<ErrorDetail>,
    }

    let parsed = serde_json::from_slice::<Wrapped>(body)
        .map(|w| w.error)
        .or_else(|_| serde_json::from_slice::<ErrorBody>(body));

    let default_code = || {
        status
            .canonical_reason()
            .unwrap_or("unknown_error")
            .to_lowercase()
            .replace(' ', "_")
    };

    match parsed {
        Ok(err) => Error::Api {
            code: err.code.unwrap_or_else(default_code),
            message: err
                .message
                .unwrap_or_else(|| String::from_utf8_lossy(body).to_string()),
            status_code: status.as_u16(),
            details: err.details,
        },
        Err(_) => Error::Api {
            code: default_code(),
            message: String::from_utf8_lossy(body).to_string(),
            status_code: status.as_u16(),
            details: vec![],
        },
    }
}
