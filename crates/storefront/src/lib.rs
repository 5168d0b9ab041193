//! Clementine Storefront library.
//!
//! The storefront client in three layers:
//!
//! - [`storage`] - durable key-value persistence of session and cart blobs
//! - [`catalog`] - JSON-over-HTTP client for the remote product/login API
//! - [`state`] - the state manager owning session, cart, and product list;
//!   every mutation funnels through it and is written through to storage
//!
//! Front-ends (the `clem` CLI, or anything else) hold no authoritative state:
//! they read [`state::StateSnapshot`] and dispatch the mutation operations.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod storage;

pub use config::StorefrontConfig;
pub use error::{Result, StorefrontError};
pub use state::{CheckoutOutcome, StateSnapshot, Storefront};
