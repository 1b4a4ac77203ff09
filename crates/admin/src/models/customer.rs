//! Customer models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use magi_core::{CustomerId, Email};

/// A shop customer record.
///
/// `segment` is free-form back-office labeling ("VIP", "New", ...); it never
/// drives program behavior, so it stays a plain string.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub segment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a customer.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub segment: Option<String>,
}

/// Partial update for a customer. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub segment: Option<String>,
}
