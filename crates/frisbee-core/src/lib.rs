//! Core types and trait definitions for the Ultimate Frisbee registry.
//!
//! Nothing here knows about HTTP or SQL. The entities and their update
//! attributes live in this crate alongside the store ports that backends
//! implement and the services written against those ports.

pub mod application;
pub mod attribute;
pub mod error;
pub mod membership;
pub mod person;
pub mod service;
pub mod store;
pub mod team;
pub mod timestamp;

pub use error::{Error, Result, ServiceError};

#[cfg(test)]
mod testing;
