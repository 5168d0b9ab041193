//! Access levels for authenticated sessions.

use serde::{Deserialize, Serialize};

use crate::types::email::Email;

/// Access level attached to a session.
///
/// Derived deterministically from the login identity at authentication time:
/// the designated administrator address maps to [`AccessLevel::Admin`], every
/// other identity to [`AccessLevel::Customer`]. There is no separate
/// authorization lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    /// Can create products in addition to everything a customer can do.
    Admin,
    /// Regular shopper.
    #[default]
    Customer,
}

impl AccessLevel {
    /// Derive the access level for `identity` given the designated admin
    /// address.
    #[must_use]
    pub fn for_identity(identity: &Email, admin: &Email) -> Self {
        if identity == admin {
            Self::Admin
        } else {
            Self::Customer
        }
    }

    /// Whether this level grants product-management rights.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Customer => write!(f, "customer"),
        }
    }
}
