//! Client configuration

use std::time::Duration;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable overriding [`DEFAULT_BASE_URL`]
pub const BASE_URL_ENV: &str = "STOREFRONT_API_URL";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default max retries
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Pick the base URL: a non-blank override wins, otherwise the default.
pub fn resolve_base_url(override_url: Option<String>) -> String {
    match override_url {
        Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}

/// Configuration for the storefront client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Bearer token attached to every request, if present
    pub access_token: Option<String>,
    pub timeout: Duration,
    pub max_retries: u32,
    pub retry_delay: Duration,
    /// Turn contract violations into errors instead of warnings
    pub strict_contracts: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: None,
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: Duration::from_secs(1),
            strict_contracts: false,
        }
    }
}

impl ClientConfig {
    /// Resolve the base URL from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the base URL through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = resolve_base_url(lookup(BASE_URL_ENV));
        tracing::debug!(%base_url, "resolved storefront base url");
        Self {
            base_url,
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = resolve_base_url(Some(base_url.into()));
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn strict(mut self) -> Self {
        self.strict_contracts = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_without_override() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(resolve_base_url(None), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_override_wins() {
        let config = ClientConfig::from_lookup(|key| {
            (key == BASE_URL_ENV).then(|| "https://api.shop.example/".to_string())
        });
        assert_eq!(config.base_url, "https://api.shop.example");
    }

    #[test]
    fn test_blank_override_falls_back() {
        assert_eq!(resolve_base_url(Some("   ".into())), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_builder_methods() {
        let config = ClientConfig::default()
            .with_base_url("http://10.0.0.5:9000/")
            .with_access_token("tok")
            .with_max_retries(0)
            .strict();
        assert_eq!(config.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.access_token.as_deref(), Some("tok"));
        assert_eq!(config.max_retries, 0);
        assert!(config.strict_contracts);
    }
}
