//! SQLite backend for the Ultimate Frisbee registry.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime.

mod client;
mod encode;
mod schema;
mod store;
mod update;

pub mod error;

pub use client::{QueryResult, Violation};
pub use error::{Error, Result};
pub use schema::SCHEMA_VERSION;
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
