use crate::domain::models::category::{Category, CategoryPatch, NewCategory};
use crate::domain::ports::CategoryApi;
use crate::error::AppError;
use crate::infra::upstream::client::UpstreamClient;
use async_trait::async_trait;
use std::sync::Arc;

pub struct HttpCategoryApi {
    client: Arc<UpstreamClient>,
}

impl HttpCategoryApi {
    pub fn new(client: Arc<UpstreamClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CategoryApi for HttpCategoryApi {
    async fn list(&self) -> Result<Vec<Category>, AppError> {
        self.client.get("/api/categories", None).await
    }

    async fn create(&self, token: &str, category: &NewCategory) -> Result<Category, AppError> {
        self.client.post("/api/categories", Some(token), category).await
    }

    async fn update(&self, token: &str, id: &str, patch: &CategoryPatch) -> Result<Category, AppError> {
        self.client.put(&format!("/api/categories/{}", id), Some(token), patch).await
    }

    async fn delete(&self, token: &str, id: &str) -> Result<(), AppError> {
        self.client.delete(&format!("/api/categories/{}", id), Some(token)).await
    }
}
