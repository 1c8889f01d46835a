use crate::error::AppError;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::error;

/// Shared HTTP client for the marketplace REST API. One instance is built
/// at bootstrap and shared by every port implementation. Failures are
/// reported once and mapped to `AppError`; there is no retry policy.
pub struct UpstreamClient {
    client: Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let mut req = self.client.request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }
        req
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T, AppError> {
        self.execute(self.request(Method::GET, path, token)).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, AppError> {
        self.execute(self.request(Method::POST, path, token).json(body)).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, AppError> {
        self.execute(self.request(Method::PUT, path, token).json(body)).await
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<(), AppError> {
        let res = self
            .request(Method::DELETE, path, token)
            .send()
            .await
            .map_err(connection_error)?;

        let status = res.status();
        if status.is_success() {
            return Ok(());
        }
        let text = res.text().await.unwrap_or_default();
        Err(map_status(status, text))
    }

    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, AppError> {
        let res = req.send().await.map_err(connection_error)?;

        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            return Err(map_status(status, text));
        }

        res.json().await.map_err(|e| {
            let msg = format!("Marketplace API returned an invalid body: {}", e);
            error!("{}", msg);
            AppError::Upstream(msg)
        })
    }
}

fn connection_error(e: reqwest::Error) -> AppError {
    let msg = format!("Marketplace API connection error: {}", e);
    error!("{}", msg);
    AppError::Upstream(msg)
}

fn map_status(status: StatusCode, body: String) -> AppError {
    match status {
        StatusCode::UNAUTHORIZED => AppError::Unauthorized,
        StatusCode::FORBIDDEN => AppError::Forbidden("Rejected by marketplace API".into()),
        StatusCode::NOT_FOUND => AppError::NotFound("Not found in marketplace API".into()),
        StatusCode::CONFLICT => AppError::Conflict(body),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => AppError::Validation(body),
        _ => AppError::Upstream(format!("Marketplace API failed. Status: {}, Body: {}", status, body)),
    }
}
