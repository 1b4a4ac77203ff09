//! Admin user repository.
//!
//! Holding a row here is what makes someone an admin; deleting the row
//! revokes all back-office access.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use magi_core::{AdminRole, AdminUserId, Email};

use super::RepositoryError;
use crate::models::AdminUser;

#[derive(Debug, sqlx::FromRow)]
struct AdminUserRow {
    id: AdminUserId,
    email: String,
    name: String,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AdminUserRow> for AdminUser {
    type Error = RepositoryError;

    fn try_from(row: AdminUserRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("admin user {}: {e}", row.id))
        })?;
        let role: AdminRole = row
            .role
            .parse()
            .map_err(|e| RepositoryError::DataCorruption(format!("admin user {}: {e}", row.id)))?;

        Ok(Self {
            id: row.id,
            email,
            name: row.name,
            role,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Repository for admin user management.
pub struct AdminUserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminUserRepository<'a> {
    /// Create a new admin user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all admin users by creation time.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails and
    /// `RepositoryError::DataCorruption` if a row fails validation.
    pub async fn list(&self) -> Result<Vec<AdminUser>, RepositoryError> {
        let rows: Vec<AdminUserRow> = sqlx::query_as(
            "SELECT id, email, name, role, created_at, updated_at
             FROM shop.admin_users
             ORDER BY created_at",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(AdminUser::try_from).collect()
    }

    /// Get an admin user by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails and
    /// `RepositoryError::DataCorruption` if the row fails validation.
    pub async fn get(&self, id: AdminUserId) -> Result<Option<AdminUser>, RepositoryError> {
        let row: Option<AdminUserRow> = sqlx::query_as(
            "SELECT id, email, name, role, created_at, updated_at
             FROM shop.admin_users
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(AdminUser::try_from).transpose()
    }

    /// Create an admin user with a password hash (grant access).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already holds access.
    pub async fn create(
        &self,
        email: &Email,
        name: &str,
        password_hash: &str,
        role: AdminRole,
    ) -> Result<AdminUser, RepositoryError> {
        let row: AdminUserRow = sqlx::query_as(
            "INSERT INTO shop.admin_users (email, name, password_hash, role)
             VALUES ($1, $2, $3, $4)
             RETURNING id, email, name, role, created_at, updated_at",
        )
        .bind(email)
        .bind(name)
        .bind(password_hash)
        .bind(role.to_string())
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_sqlx(e, "email already has admin access"))?;

        AdminUser::try_from(row)
    }

    /// Change an admin user's role.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the admin user does not exist.
    pub async fn set_role(
        &self,
        id: AdminUserId,
        role: AdminRole,
    ) -> Result<AdminUser, RepositoryError> {
        let row: Option<AdminUserRow> = sqlx::query_as(
            "UPDATE shop.admin_users SET role = $2, updated_at = now()
             WHERE id = $1
             RETURNING id, email, name, role, created_at, updated_at",
        )
        .bind(id)
        .bind(role.to_string())
        .fetch_optional(self.pool)
        .await?;

        row.map_or(Err(RepositoryError::NotFound), AdminUser::try_from)
    }

    /// Delete an admin user (revoke access).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the admin user does not exist.
    pub async fn delete(&self, id: AdminUserId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM shop.admin_users WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Get an admin user and their password hash by email, for login.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails and
    /// `RepositoryError::DataCorruption` if the row fails validation.
    pub async fn get_with_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(AdminUser, String)>, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct Row {
            id: AdminUserId,
            email: String,
            name: String,
            password_hash: String,
            role: String,
            created_at: DateTime<Utc>,
            updated_at: DateTime<Utc>,
        }

        let row: Option<Row> = sqlx::query_as(
            "SELECT id, email, name, password_hash, role, created_at, updated_at
             FROM shop.admin_users
             WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        let Some(r) = row else {
            return Ok(None);
        };

        let admin = AdminUser::try_from(AdminUserRow {
            id: r.id,
            email: r.email,
            name: r.name,
            role: r.role,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })?;

        Ok(Some((admin, r.password_hash)))
    }
}
