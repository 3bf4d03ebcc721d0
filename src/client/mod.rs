//! Upstream API client
//!
//! One configured HTTP client (base URL, bearer-token injection,
//! timeout) shared by every resource module. The per-resource verb
//! methods live in their own files as `impl ApiClient` blocks.

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::config::ApiConfig;
use crate::errors::{message_from_body, ClientError};
use crate::models::PageInfo;

pub mod envelope;

pub mod categories;
pub mod coupons;
pub mod courses;
pub mod current_affairs;
pub mod daily_quizzes;
pub mod ebooks;
pub mod languages;
pub mod live_classes;
pub mod orders;
pub mod subcategories;
pub mod test_series;
pub mod validities;

pub use envelope::{ListBody, ResponseBody};

pub type ClientResult<T> = Result<T, ClientError>;

/// A list response after envelope normalization: the items plus
/// pagination metadata when the upstream endpoint paginates.
pub type ListResult<T> = ClientResult<(Vec<T>, Option<PageInfo>)>;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    auth_token: Option<String>,
    default_limit: u32,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let base_url = Url::parse(&config.base_url)?;

        Ok(Self {
            http,
            base_url,
            auth_token: config.auth_token.clone(),
            default_limit: crate::table::DEFAULT_LIMIT,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> ClientResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Start a request with the auth header injected
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and decode the body, normalizing failures to a
    /// display message with the standard precedence.
    async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        verb: &str,
        resource: &str,
    ) -> ClientResult<T> {
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = message_from_body(&body, verb, resource);
            debug!(%status, resource, "upstream request failed: {message}");
            return Err(ClientError::upstream(status.as_u16(), message));
        }

        if status == StatusCode::NO_CONTENT {
            // Decode from an empty object so `()` and Option targets work
            return serde_json::from_value(serde_json::Value::Null)
                .map_err(|e| ClientError::decode(resource, e.to_string()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::decode(resource, e.to_string()))
    }

    /// GET a single entity, unwrapping the `{ "data": ... }` envelope
    pub async fn get_entity<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &str,
    ) -> ClientResult<T> {
        let url = self.url(path)?;
        let body: ResponseBody<T> = self
            .execute(self.request(Method::GET, url), "fetch", resource)
            .await?;
        Ok(body.into_inner())
    }

    /// GET a list, normalizing whichever envelope shape comes back
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        resource: &str,
    ) -> ListResult<T> {
        let mut url = self.url(path)?;
        for (key, value) in query {
            url.query_pairs_mut().append_pair(key, value);
        }
        let body: ResponseBody<ListBody<T>> = self
            .execute(self.request(Method::GET, url), "fetch", resource)
            .await?;
        Ok(body.into_inner().normalize(self.default_limit))
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
        resource: &str,
    ) -> ClientResult<T> {
        let url = self.url(path)?;
        let body: ResponseBody<T> = self
            .execute(
                self.request(Method::POST, url).json(payload),
                "create",
                resource,
            )
            .await?;
        Ok(body.into_inner())
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
        resource: &str,
    ) -> ClientResult<T> {
        let url = self.url(path)?;
        let body: ResponseBody<T> = self
            .execute(
                self.request(Method::PUT, url).json(payload),
                "update",
                resource,
            )
            .await?;
        Ok(body.into_inner())
    }

    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
        resource: &str,
    ) -> ClientResult<T> {
        let url = self.url(path)?;
        let body: ResponseBody<T> = self
            .execute(
                self.request(Method::PATCH, url).json(payload),
                "update",
                resource,
            )
            .await?;
        Ok(body.into_inner())
    }

    pub async fn delete(&self, path: &str, resource: &str) -> ClientResult<()> {
        let url = self.url(path)?;
        let response = self
            .request(Method::DELETE, url)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = message_from_body(&body, "delete", resource);
            return Err(ClientError::upstream(status.as_u16(), message));
        }
        Ok(())
    }

    /// Send a multipart form (used whenever a file field is present)
    pub async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: reqwest::multipart::Form,
        resource: &str,
    ) -> ClientResult<T> {
        let verb = if method == Method::POST {
            "create"
        } else {
            "update"
        };
        let url = self.url(path)?;
        let body: ResponseBody<T> = self
            .execute(self.request(method, url).multipart(form), verb, resource)
            .await?;
        Ok(body.into_inner())
    }
}
