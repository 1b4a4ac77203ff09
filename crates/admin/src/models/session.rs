//! Session key constants.

/// Keys used for values stored in the admin session.
pub mod session_keys {
    /// The logged-in admin (`CurrentAdmin`).
    pub const CURRENT_ADMIN: &str = "current_admin";
}
