//! Authentication error types.

use thiserror::Error;

use magi_core::EmailError;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The email address is malformed.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The password does not meet requirements.
    #[error("weak password: {0}")]
    WeakPassword(String),

    /// An account with this email already exists.
    #[error("user already exists")]
    UserAlreadyExists,

    /// Wrong email or password. Deliberately indistinguishable.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Password hashing or verification failed internally.
    #[error("password hash error: {0}")]
    PasswordHash(String),

    /// Database failure.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
