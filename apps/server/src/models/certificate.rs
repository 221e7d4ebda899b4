use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A gift certificate with its attached tag names
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: i64,

    pub name: String,

    pub description: String,

    /// Non-negative price in the shop currency
    pub price: Decimal,

    /// Validity period in days
    pub duration: i32,

    /// Set once at creation, immutable afterwards
    pub create_date: DateTime<Utc>,

    /// Touched on every mutation
    pub last_update_date: DateTime<Utc>,

    /// Attached tag names, sorted for stable output
    pub tags: Vec<String>,
}
