use billwire_form::Form;
use reqwest::{Method, StatusCode, header};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    config::ClientConfig,
    error::{ApiError, Error, ErrorEnvelope, Result},
    subscriptions::Subscriptions,
};

/// HTTP client for the payments API.
///
/// Wraps a connection-pooling [`reqwest::Client`], so it is cheap to
/// clone and share across tasks.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Build a client with default configuration and the given secret key.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(secret_key))
    }

    /// Build a client from explicit configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("failed to build http client");
        Self { http, config }
    }

    /// Build a client on top of an already configured `reqwest` client.
    /// The configured timeout is ignored in favor of the given client's.
    pub fn with_http_client(http: reqwest::Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Subscription operations scoped to this client.
    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions::new(self)
    }

    fn build_url(&self, path: &str, query: Option<&Form>) -> String {
        let mut url = format!("{}/{}", self.config.api_base.trim_end_matches('/'), path);
        if let Some(query) = query {
            if !query.is_empty() {
                url.push('?');
                url.push_str(&query.urlencoded());
            }
        }
        url
    }

    /// Send one request and decode the JSON response.
    ///
    /// An empty body form is treated as no body at all, so requests
    /// without parameters carry neither payload nor content type.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Form>,
        query: Option<&Form>,
    ) -> Result<T> {
        let url = self.build_url(path, query);
        debug!(method = %method, url = %url, "dispatching api request");

        let mut request = self
            .http
            .request(method, &url)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.config.secret_key),
            )
            .header("Stripe-Version", self.config.api_version.as_str());
        if let Some(body) = body {
            if !body.is_empty() {
                request = request
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(body.urlencoded());
            }
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(decode_api_error(status, response).await);
        }
        Ok(response.json::<T>().await?)
    }
}

/// Turn a non-success response into [`Error::Api`], keeping whatever
/// the server sent even when it is not the usual error envelope.
async fn decode_api_error(status: StatusCode, response: reqwest::Response) -> Error {
    let body = response.text().await.unwrap_or_default();
    let error = serde_json::from_str::<ErrorEnvelope>(&body)
        .map(|envelope| envelope.error)
        .unwrap_or_else(|_| ApiError {
            message: Some(body),
            ..Default::default()
        });
    Error::Api {
        status: status.as_u16(),
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_at(base: &str) -> Client {
        Client::with_config(ClientConfig::new("sk_test_123").with_api_base(base))
    }

    #[test]
    fn test_build_url_joins_base_and_path() {
        let client = client_at("https://api.stripe.com/v1");
        assert_eq!(
            client.build_url("subscriptions", None),
            "https://api.stripe.com/v1/subscriptions"
        );
    }

    #[test]
    fn test_build_url_strips_trailing_slash() {
        let client = client_at("https://api.stripe.com/v1/");
        assert_eq!(
            client.build_url("subscriptions/sub_1", None),
            "https://api.stripe.com/v1/subscriptions/sub_1"
        );
    }

    #[test]
    fn test_build_url_appends_query_when_present() {
        let client = client_at("https://api.stripe.com/v1");
        let mut query = Form::new();
        query.insert("limit", 3_i64);
        query.insert_keyed("created", "gte", 1_527_000_000_i64);
        assert_eq!(
            client.build_url("subscriptions", Some(&query)),
            "https://api.stripe.com/v1/subscriptions?limit=3&created%5Bgte%5D=1527000000"
        );
    }

    #[test]
    fn test_build_url_skips_question_mark_for_empty_query() {
        let client = client_at("https://api.stripe.com/v1");
        let query = Form::new();
        assert_eq!(
            client.build_url("subscriptions", Some(&query)),
            "https://api.stripe.com/v1/subscriptions"
        );
    }
}
