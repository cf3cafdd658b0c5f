use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client, RequestBuilder,
};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Status and raw body of a completed request.
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: build_http_client(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: build_http_client(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<RawResponse, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(e.to_string()))?;
        let method = request.method().clone();
        let url = request.url().clone();
        log::debug!("{} {}", method, url);

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = find_mock(&request) {
            let mock = responder.respond(&request)?;
            return Ok(RawResponse {
                status: mock.status,
                body: mock.body,
            });
        }

        let response = self.client.execute(request).await.map_err(|e| {
            log::warn!("{} {} failed: {}", method, url, e);
            ApiError::request_failed(e.to_string())
        })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(e.to_string()))?;
        if !(200..300).contains(&status) {
            log::warn!("{} {} responded with {}", method, url, status);
        }
        Ok(RawResponse { status, body })
    }

    pub(crate) fn parse_json<T: DeserializeOwned>(response: RawResponse) -> Result<T, ApiError> {
        if response.is_success() {
            serde_json::from_str(&response.body).map_err(|e| ApiError::decode(e.to_string()))
        } else {
            Err(ApiError::from_status(response.status, &response.body))
        }
    }

    pub(crate) fn expect_success(response: RawResponse) -> Result<(), ApiError> {
        if response.is_success() {
            Ok(())
        } else {
            Err(ApiError::from_status(response.status, &response.body))
        }
    }
}

fn build_http_client() -> Client {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    Client::builder()
        .default_headers(headers)
        .build()
        .unwrap_or_else(|_| Client::new())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_transport::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_transport::find_mock;
