use core::time::Duration;
use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use catalog_core::{
    ApiConfig, Comment, DataSource, Error, Post, PostId, Request, Result, User, UserId,
};

/// Data source backed by the remote JSON API.
///
/// Issues one GET per call. Transport errors, non-2xx statuses and bodies of
/// the wrong shape all become [`Error::Fetch`].
#[derive(Debug, Clone)]
pub struct RestClient {
    /// HTTP client for API requests.
    client: Client,
    /// Base URL without a trailing slash.
    base_url: String,
}

impl RestClient {
    /// Creates a client for `base_url` with default transport settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::default(),
            base_url: trim_base(base_url.into()),
        }
    }

    /// Creates a client from API configuration.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_config(api: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(api.user_agent.clone());
        if api.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(api.timeout_seconds));
        }
        let client = builder
            .build()
            .map_err(|err| Error::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url: api.normalized_base_url().to_owned(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a request.
    pub fn url_for(&self, request: Request) -> String {
        format!("{}{}", self.base_url, request.path())
    }

    /// Performs the GET for `request` and decodes the body.
    async fn get_json<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let url = self.url_for(request);
        let start = Instant::now();
        tracing::debug!("GET {url}");

        let response = self.client.get(&url).send().await.map_err(|err| {
            tracing::warn!("GET {url} failed: {err}");
            Error::fetch(format!("Failed to fetch {request}: request failed: {err}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GET {url} returned {status}");
            return Err(Error::fetch(format!("Failed to fetch {request}: HTTP {status}")));
        }

        let decoded = response.json::<T>().await.map_err(|err| {
            tracing::warn!("GET {url} returned an unexpected body: {err}");
            Error::fetch(format!(
                "Failed to fetch {request}: unexpected response body: {err}"
            ))
        })?;

        tracing::debug!(
            "GET {url} completed in {elapsed}ms",
            elapsed = start.elapsed().as_millis()
        );
        Ok(decoded)
    }
}

fn trim_base(base_url: String) -> String {
    base_url.trim_end_matches('/').to_owned()
}

#[async_trait]
impl DataSource for RestClient {
    async fn posts(&self) -> Result<Vec<Post>> {
        self.get_json(Request::Posts).await
    }

    async fn post(&self, id: PostId) -> Result<Post> {
        self.get_json(Request::Post(id)).await
    }

    async fn post_comments(&self, id: PostId) -> Result<Vec<Comment>> {
        self.get_json(Request::PostComments(id)).await
    }

    async fn users(&self) -> Result<Vec<User>> {
        self.get_json(Request::Users).await
    }

    async fn user(&self, id: UserId) -> Result<User> {
        self.get_json(Request::User(id)).await
    }

    async fn user_posts(&self, id: UserId) -> Result<Vec<Post>> {
        self.get_json(Request::UserPosts(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = RestClient::new("https://example.test/api//");
        assert_eq!(client.base_url(), "https://example.test/api");
        assert_eq!(
            client.url_for(Request::UserPosts(2)),
            "https://example.test/api/posts?userId=2"
        );
    }

    #[test]
    fn test_from_config_uses_base_url() {
        let api = ApiConfig {
            base_url: "http://127.0.0.1:8080/".to_owned(),
            timeout_seconds: 5,
            ..ApiConfig::default()
        };
        let client = RestClient::from_config(&api).expect("client should build");
        assert_eq!(client.url_for(Request::Post(1)), "http://127.0.0.1:8080/posts/1");
    }
}
