//! Session types.
//!
//! A session is the authenticated identity plus its access level, persisted
//! client-side under the `user` key so a restart stays logged in.

use serde::{Deserialize, Serialize};

use clementine_core::{AccessLevel, Email};

/// An authenticated session.
///
/// Constructed only by a successful `authenticate`; absence of a session is
/// the anonymous state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Login identity.
    pub email: Email,
    /// Bearer token returned by the login endpoint.
    pub token: String,
    /// Derived from the identity at authentication time.
    pub access_level: AccessLevel,
}

impl Session {
    /// Whether this session grants product-management rights.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.access_level.is_admin()
    }
}
