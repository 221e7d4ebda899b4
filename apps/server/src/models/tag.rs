use serde::{Deserialize, Serialize};

/// A label attached to gift certificates. Names are unique across all tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}
