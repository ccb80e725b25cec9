//! TMDB client: shared configuration and request plumbing

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;

const BASE_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_LANGUAGE: &str = "en-US";

/// Client for the TMDB v3 API.
///
/// Stateless beyond its shared configuration (base URL, bearer token,
/// default `language` parameter). Cheap to clone; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    token: String,
    lang: String,
}

impl TmdbClient {
    /// Create a client with the default base URL and `en-US` locale.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: BASE_URL.to_string(),
            token: token.into(),
            lang: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Override the base URL (local test servers, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the `language` query parameter sent with every request.
    pub fn with_language(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configured `language` query parameter.
    pub fn language(&self) -> &str {
        &self.lang
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a single GET and deserialize the JSON body.
    ///
    /// One request per call: no retries, no pagination. 404 and other
    /// non-2xx statuses surface as [`ApiError::Api`] with the raw body kept
    /// as the message.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> crate::Result<T> {
        let url = self.url(path);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[("language", self.lang.as_str())])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = TmdbClient::new("token");
        assert_eq!(
            client.url("/trending/movie/week"),
            "https://api.themoviedb.org/3/trending/movie/week"
        );
    }

    #[test]
    fn test_with_base_url_override() {
        let client = TmdbClient::new("token").with_base_url("http://127.0.0.1:8080/v3");
        assert_eq!(client.url("/movie/550"), "http://127.0.0.1:8080/v3/movie/550");
    }

    #[test]
    fn test_with_language_override() {
        let client = TmdbClient::new("token").with_language("de-DE");
        assert_eq!(client.language(), "de-DE");
    }

    #[test]
    fn test_default_language() {
        let client = TmdbClient::new("token");
        assert_eq!(client.language(), "en-US");
        assert_eq!(client.base_url(), "https://api.themoviedb.org/3");
    }
}
