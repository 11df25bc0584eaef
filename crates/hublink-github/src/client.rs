//! GitHub API client.

use hublink_oauth::Credential;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::Auth;
use crate::context;
use crate::error::{Error, Result};
use crate::repo::Repository;
use crate::types::Repo;

/// GitHub API client.
///
/// A thin connector: it owns the base URL, the default headers, and the
/// credential, and maps GitHub's error statuses onto [`Error`] variants.
/// Higher-level packages build their requests on the generic verbs.
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
    credential: Credential,
}

impl GitHubClient {
    /// Default GitHub API URL.
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";

    /// Create a new GitHub client.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(auth: &Auth) -> Result<Self> {
        Self::with_base_url(auth, Self::DEFAULT_API_URL)
    }

    /// Create a new GitHub client with a custom API URL (for GitHub
    /// Enterprise).
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_base_url(auth: &Auth, base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("hublink"));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            credential: auth.credential(),
        })
    }

    /// Make a GET request.
    ///
    /// # Errors
    /// Returns error if the request fails or the response is an error
    /// status.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.credential.header_value())
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make a POST request.
    ///
    /// # Errors
    /// Returns error if the request fails or the response is an error
    /// status.
    pub async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.credential.header_value())
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make a PATCH request.
    ///
    /// # Errors
    /// Returns error if the request fails or the response is an error
    /// status.
    pub async fn patch<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .patch(&url)
            .header(AUTHORIZATION, self.credential.header_value())
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make a PUT request.
    ///
    /// # Errors
    /// Returns error if the request fails or the response is an error
    /// status.
    pub async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .put(&url)
            .header(AUTHORIZATION, self.credential.header_value())
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make a DELETE request.
    ///
    /// # Errors
    /// Returns error if the request fails or the response is an error
    /// status.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .delete(&url)
            .header(AUTHORIZATION, self.credential.header_value())
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(());
        }

        Err(map_error(response).await)
    }

    /// Fetch repository metadata.
    ///
    /// # Errors
    /// Returns error if the repository cannot be fetched.
    pub async fn get_repo(&self, repo: &Repository) -> Result<Repo> {
        self.get(&format!("/repos/{repo}")).await
    }

    /// Fetch metadata for the ambient repository context.
    ///
    /// # Errors
    /// Returns [`Error::NoRepoContext`] if no context is set on this
    /// thread, or an API error if the fetch fails.
    pub async fn current_repo(&self) -> Result<Repo> {
        let repo = context::require_current()?;
        self.get_repo(&repo).await
    }

    /// Handle API response.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        if response.status().is_success() {
            let body = response.json().await?;
            return Ok(body);
        }

        Err(map_error(response).await)
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url)
            .field("credential", &"[redacted]")
            .finish_non_exhaustive()
    }
}

/// Map an error response onto the GitHub error taxonomy.
async fn map_error(response: reqwest::Response) -> Error {
    let status = response.status().as_u16();

    if status == 403 {
        let limit = rate_limit_header(&response, "x-ratelimit-limit");
        let remaining = rate_limit_header(&response, "x-ratelimit-remaining");
        let reset = rate_limit_header(&response, "x-ratelimit-reset");

        if remaining == Some(0) {
            return Error::RateLimited {
                limit,
                remaining,
                reset,
            };
        }

        return Error::Forbidden {
            message: api_message(response).await,
        };
    }

    match status {
        401 => Error::AuthenticationFailed,
        404 => Error::NotFound {
            message: api_message(response).await,
        },
        422 => {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("GitHub API validation failed")
                .to_string();
            let errors = body
                .get("errors")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            Error::Validation { message, errors }
        }
        500 | 502 | 503 | 504 => Error::Server { status },
        _ => {
            let message = response.text().await.unwrap_or_default();
            Error::Api { status, message }
        }
    }
}

/// Parse a numeric rate-limit header, if present.
fn rate_limit_header(response: &reqwest::Response, name: &str) -> Option<u64> {
    response.headers().get(name)?.to_str().ok()?.parse().ok()
}

/// The `message` field of an error body, falling back to the raw text.
async fn api_message(response: reqwest::Response) -> String {
    let text = response.text().await.unwrap_or_default();
    serde_json::from_str::<Value>(&text)
        .ok()
        .and_then(|body| {
            body.get("message")
                .and_then(Value::as_str)
                .map(String::from)
        })
        .unwrap_or(text)
}
