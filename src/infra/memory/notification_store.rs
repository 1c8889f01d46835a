use crate::domain::models::notification::Toast;
use crate::domain::ports::NotificationStore;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

/// Dashboard toasts are ephemeral session state, so they live in process
/// memory; the background sweeper bounds the vector's growth.
#[derive(Default)]
pub struct InMemoryNotificationStore {
    inner: RwLock<Vec<Toast>>,
}

impl InMemoryNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationStore for InMemoryNotificationStore {
    async fn push(&self, toast: Toast) -> Result<Toast, AppError> {
        let mut toasts = self.inner.write().await;
        toasts.push(toast.clone());
        Ok(toast)
    }

    async fn list_active(&self, now: DateTime<Utc>) -> Result<Vec<Toast>, AppError> {
        let toasts = self.inner.read().await;
        Ok(toasts.iter().filter(|t| !t.is_expired(now)).cloned().collect())
    }

    async fn dismiss(&self, id: &str) -> Result<bool, AppError> {
        let mut toasts = self.inner.write().await;
        let before = toasts.len();
        toasts.retain(|t| t.id != id);
        Ok(toasts.len() < before)
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let mut toasts = self.inner.write().await;
        let before = toasts.len();
        toasts.retain(|t| !t.is_expired(now));
        Ok(before - toasts.len())
    }
}
