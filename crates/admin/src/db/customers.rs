//! Customer repository.

use sqlx::PgPool;

use magi_core::{CustomerId, Email};

use super::RepositoryError;
use crate::models::{Customer, CustomerPatch, NewCustomer};

#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: CustomerId,
    name: String,
    email: String,
    phone: Option<String>,
    address: Option<String>,
    segment: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = RepositoryError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("customer {}: {e}", row.id))
        })?;

        Ok(Self {
            id: row.id,
            name: row.name,
            email,
            phone: row.phone,
            address: row.address,
            segment: row.segment,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const SELECT_CUSTOMER: &str = "
    SELECT id, name, email, phone, address, segment, created_at, updated_at
    FROM shop.customers
";

/// Repository for customer management.
pub struct CustomerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List customers, newest first, optionally filtered by a
    /// case-insensitive name/email search.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails and
    /// `RepositoryError::DataCorruption` if a row fails validation.
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Customer>, RepositoryError> {
        let sql = format!(
            "{SELECT_CUSTOMER}
             WHERE $1::text IS NULL OR name ILIKE $2 OR email ILIKE $2
             ORDER BY created_at DESC"
        );
        let pattern = search.map(|s| format!("%{s}%"));
        let rows: Vec<CustomerRow> = sqlx::query_as(&sql)
            .bind(search)
            .bind(pattern)
            .fetch_all(self.pool)
            .await?;

        rows.into_iter().map(Customer::try_from).collect()
    }

    /// Get a customer by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails and
    /// `RepositoryError::DataCorruption` if the row fails validation.
    pub async fn get(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let sql = format!("{SELECT_CUSTOMER} WHERE id = $1");
        let row: Option<CustomerRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        row.map(Customer::try_from).transpose()
    }

    /// Insert a new customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if the email is invalid and
    /// `RepositoryError::Conflict` if it is already registered.
    pub async fn create(&self, new: &NewCustomer) -> Result<Customer, RepositoryError> {
        let email = Email::parse(&new.email)
            .map_err(|e| RepositoryError::DataCorruption(e.to_string()))?;

        let row: CustomerRow = sqlx::query_as(
            "INSERT INTO shop.customers (name, email, phone, address, segment)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, name, email, phone, address, segment, created_at, updated_at",
        )
        .bind(&new.name)
        .bind(&email)
        .bind(new.phone.as_deref())
        .bind(new.address.as_deref())
        .bind(new.segment.as_deref())
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_sqlx(e, "email already exists"))?;

        Customer::try_from(row)
    }

    /// Apply a partial update. Absent patch fields keep their current value.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the customer does not exist
    /// and `RepositoryError::Conflict` if the new email is taken.
    pub async fn update(
        &self,
        id: CustomerId,
        patch: &CustomerPatch,
    ) -> Result<Customer, RepositoryError> {
        let email = patch
            .email
            .as_deref()
            .map(Email::parse)
            .transpose()
            .map_err(|e| RepositoryError::DataCorruption(e.to_string()))?;

        let row: Option<CustomerRow> = sqlx::query_as(
            "UPDATE shop.customers SET
                 name = COALESCE($2, name),
                 email = COALESCE($3, email),
                 phone = COALESCE($4, phone),
                 address = COALESCE($5, address),
                 segment = COALESCE($6, segment),
                 updated_at = now()
             WHERE id = $1
             RETURNING id, name, email, phone, address, segment, created_at, updated_at",
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(email)
        .bind(patch.phone.as_deref())
        .bind(patch.address.as_deref())
        .bind(patch.segment.as_deref())
        .fetch_optional(self.pool)
        .await
        .map_err(|e| RepositoryError::from_sqlx(e, "email already exists"))?;

        row.map_or(Err(RepositoryError::NotFound), Customer::try_from)
    }

    /// Delete a customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the customer does not exist
    /// and `RepositoryError::Conflict` if orders still reference them.
    pub async fn delete(&self, id: CustomerId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM shop.customers WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx(e, "customer still has orders"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
