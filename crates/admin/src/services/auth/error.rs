//! Admin authentication errors.

use thiserror::Error;

use magi_core::EmailError;

use crate::db::RepositoryError;

/// Errors that can occur during admin authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email address failed validation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Password does not meet strength requirements.
    #[error("{0}")]
    WeakPassword(String),

    /// The email already holds admin access.
    #[error("admin user already exists")]
    AdminAlreadyExists,

    /// Email or password is wrong, or the user holds no admin row.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Password hashing or verification failed internally.
    #[error("password hash error: {0}")]
    PasswordHash(String),

    /// Underlying repository failure.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
