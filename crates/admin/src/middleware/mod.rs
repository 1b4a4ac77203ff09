//! Middleware for the admin service.

pub mod auth;
pub mod session;

pub use auth::{RequireAdminAuth, RequireSuperAdmin, RequireWriteAccess};
pub use session::create_session_layer;
