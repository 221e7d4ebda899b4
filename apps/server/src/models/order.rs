use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A certificate purchase by a user.
///
/// `cost` snapshots the certificate price at purchase time; later price
/// changes do not alter past orders. `certificate_id` becomes `None` when
/// the certificate has been deleted since the purchase.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub certificate_id: Option<i64>,
    pub cost: Decimal,
    pub purchase_date: DateTime<Utc>,
}
