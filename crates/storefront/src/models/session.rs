//! Session key constants.
//!
//! The cart and favorites snapshots use the keys defined in
//! `magi_core::snapshot` so the two blobs stay independently addressable.

/// Keys used for values stored in the visitor session.
pub mod session_keys {
    /// The logged-in user ([`crate::models::CurrentUser`]).
    pub const CURRENT_USER: &str = "current_user";
}
