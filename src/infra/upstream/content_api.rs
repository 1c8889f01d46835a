use crate::domain::models::content::{BlogPost, JobOpening};
use crate::domain::ports::ContentApi;
use crate::error::AppError;
use crate::infra::upstream::client::UpstreamClient;
use async_trait::async_trait;
use std::sync::Arc;

pub struct HttpContentApi {
    client: Arc<UpstreamClient>,
}

impl HttpContentApi {
    pub fn new(client: Arc<UpstreamClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentApi for HttpContentApi {
    async fn list_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        self.client.get("/api/blogs", None).await
    }

    async fn find_post(&self, slug: &str) -> Result<Option<BlogPost>, AppError> {
        match self.client.get(&format!("/api/blogs/{}", slug), None).await {
            Ok(post) => Ok(Some(post)),
            Err(AppError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn list_openings(&self) -> Result<Vec<JobOpening>, AppError> {
        self.client.get("/api/careers", None).await
    }
}
