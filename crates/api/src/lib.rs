pub mod error;
pub mod issues;
pub mod models;

use error::{ApiError, Result};
use jira_cli_auth::AuthHeaders;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

pub use issues::Outcome;

/// Raw status and body of a completed request.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url` sending `auth` on every request.
    ///
    /// No request timeout is configured; calls wait for the server or the
    /// transport to give up.
    pub fn new(base_url: impl AsRef<str>, auth: &AuthHeaders) -> Result<Self> {
        let base_url = base_url.as_ref().trim().trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        let mut headers = HeaderMap::new();
        let mut authorization = HeaderValue::from_str(&auth.authorization)?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(auth.content_type));

        let client = Client::builder()
            .user_agent(format!("jira-cli/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Absolute URL for an API path such as `/rest/api/3/issue/PROJ-1`.
    pub fn url(&self, path: &str) -> Result<Url> {
        let path = path.strip_prefix('/').unwrap_or(path);
        Ok(Url::parse(&format!("{}/{}", self.base_url, path))?)
    }

    pub async fn get(&self, url: Url) -> Result<ApiResponse> {
        self.send(Method::GET, url, Option::<&()>::None).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, url: Url, body: &B) -> Result<ApiResponse> {
        self.send(Method::POST, url, Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, url: Url, body: &B) -> Result<ApiResponse> {
        self.send(Method::PUT, url, Some(body)).await
    }

    pub async fn delete(&self, url: Url) -> Result<ApiResponse> {
        self.send(Method::DELETE, url, Option::<&()>::None).await
    }

    /// Issue one request and hand back whatever the server answered.
    ///
    /// Only transport failures are errors; every HTTP status is returned as is.
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<ApiResponse> {
        debug!(method = %method, url = %url, "Sending request");

        let mut req = self.client.request(method, url);
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(ApiError::RequestFailed)?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::RequestFailed)?;

        debug!(status = status.as_u16(), bytes = body.len(), "Received response");
        Ok(ApiResponse { status, body })
    }
}
