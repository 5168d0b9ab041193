//! Core types for Clementine.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod access;
pub mod email;
pub mod id;

pub use access::AccessLevel;
pub use email::{Email, EmailError};
pub use id::ProductId;
