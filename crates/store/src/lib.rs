//! # Store Crate
//!
//! User document persistence for shop-recs.
//!
//! This crate provides:
//! - Pooled SQLite connections with a fail-fast acquire timeout
//! - Idempotent schema bootstrap at connect time
//! - The [`UserStore`] trait with SQLite-backed and in-memory
//!   implementations
//!
//! The store treats users as documents: whole JSON lists in and out,
//! keyed by phone number, with `recommendations` replaced wholesale on
//! every save.

pub mod connection;
pub mod users;

// Re-export main types
pub use connection::{DbPool, connect, connect_with_settings};
pub use users::{InMemoryUserStore, SaveOutcome, SqlUserStore, StoreError, UserStore};
