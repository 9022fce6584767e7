use std::time::Duration;

/// Production API base every client points at unless overridden.
pub const DEFAULT_API_BASE: &str = "https://api.stripe.com/v1";

/// API version sent with every request via the `Stripe-Version` header.
pub const DEFAULT_API_VERSION: &str = "2018-02-28";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the client.
///
/// Everything except the secret key has a working default; the builder
/// methods override individual fields.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL requests are resolved against. A trailing slash is
    /// tolerated and stripped during URL assembly.
    pub api_base: String,
    /// Secret key sent as the bearer credential.
    pub secret_key: String,
    /// Value of the `Stripe-Version` header.
    pub api_version: String,
    /// Per-request timeout applied to the underlying HTTP client.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            secret_key: secret_key.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at a different API base, for test servers or
    /// proxies.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_production() {
        let config = ClientConfig::new("sk_test_123");
        assert_eq!(config.api_base, "https://api.stripe.com/v1");
        assert_eq!(config.api_version, "2018-02-28");
        assert_eq!(config.secret_key, "sk_test_123");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_overrides_fields() {
        let config = ClientConfig::new("sk_test_123")
            .with_api_base("http://localhost:4242/v1")
            .with_api_version("2019-03-14")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.api_base, "http://localhost:4242/v1");
        assert_eq!(config.api_version, "2019-03-14");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
