use crate::domain::models::booking::Customer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An uploaded prescription awaiting review. The file itself lives in
/// external storage; only its URL travels through the gateway.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: String,
    #[serde(default)]
    pub patient: Option<Customer>,
    pub file_url: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub assigned_provider_id: Option<String>,
    #[serde(default)]
    pub quoted_amount: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
