//! HTTP client for the storefront backend.
//!
//! Each call makes a single attempt: there is no retry and no backoff. The
//! bearer token is looked up in storage for every request so a login or logout
//! elsewhere takes effect on the next call.

mod admin;
mod auth;
mod cart;
mod catalog;
mod orders;
mod personalization;

use std::sync::Arc;

use reqwest::{
    Client, Method, RequestBuilder,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use crate::{
    config::StorefrontConfig,
    error::{ApiError, ApiResult},
    response::normalize_body,
    storage::{KeyValueStore, TOKEN_KEY},
};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    storage: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(config: &StorefrontConfig, storage: Arc<dyn KeyValueStore>) -> ApiResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            storage,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> ApiResult<Option<String>> {
        Ok(self.storage.get(TOKEN_KEY)?.filter(|t| !t.is_empty()))
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.token(), Ok(Some(_)))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        let request_id = Uuid::new_v4().to_string();
        let url = self.url(path);
        tracing::debug!(method = %method, url = %url, request_id = %request_id, "api request");

        let mut request = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(REQUEST_ID_HEADER, request_id);
        if let Some(token) = self.token()? {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        Ok(request)
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await?;
        let status = response.status();
        let url = response.url().to_string();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, error = %text, "api request failed");
            return Err(ApiError::from_status(status, text));
        }
        tracing::debug!(url = %url, status = %status, "api response");

        Ok(serde_json::from_value(normalize_body(&text))?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.request(Method::GET, path)?;
        self.execute(request).await
    }

    async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.request(Method::GET, path)?.query(query);
        self.execute(request).await
    }

    async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(method, path)?.json(body);
        self.execute(request).await
    }

    /// Sends a request whose response body carries nothing the caller needs.
    async fn send_discarding(&self, request: RequestBuilder) -> ApiResult<()> {
        self.execute::<serde_json::Value>(request).await.map(|_| ())
    }
}
