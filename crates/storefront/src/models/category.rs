//! Category model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use magi_core::CategoryId;

/// A catalog category.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}
