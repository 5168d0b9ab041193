//! Clementine Core - Shared types library.
//!
//! This crate provides common types used across all Clementine components:
//! - `storefront` - Cart/session state manager and catalog API client
//! - `cli` - Command-line front-end driving the state manager
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe ids, emails, and access levels

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
