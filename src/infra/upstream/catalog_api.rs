use crate::domain::models::catalog::CatalogItem;
use crate::domain::ports::CatalogApi;
use crate::error::AppError;
use crate::infra::upstream::client::UpstreamClient;
use async_trait::async_trait;
use std::sync::Arc;

pub struct HttpCatalogApi {
    client: Arc<UpstreamClient>,
}

impl HttpCatalogApi {
    pub fn new(client: Arc<UpstreamClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn list_items(&self) -> Result<Vec<CatalogItem>, AppError> {
        self.client.get("/api/tests", None).await
    }
}
