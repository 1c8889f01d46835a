use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer's order for a diagnostic test or package, as served by the
/// marketplace API. The gateway never writes bookings directly; admin
/// actions go through dedicated endpoints and return the updated entity.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_datetime::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub booking_type: String,
    #[serde(default)]
    pub user: Option<Customer>,
    #[serde(default)]
    pub assigned_provider_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    pub email: String,
}

pub const STATUS_PAID: &str = "PAID";

/// Timestamp parsing for upstream payloads. The marketplace emits RFC 3339
/// most of the time, but older records carry bare dates. An unparseable
/// value becomes `None` so the record drops out of month bucketing instead
/// of failing the whole response.
pub mod lenient_datetime {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse))
    }

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
            return Some(ndt.and_utc());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|ndt| ndt.and_utc())
    }
}
