//! # bizdir
//!
//! Read-only data access for a registry of company directors, businesses,
//! and the many-to-many links between them. Includes:
//! - Connection configuration and URL assembly
//! - A connection provider that opens handles on demand
//! - A record repository exposing the fixed query surface
//!
//! The backing store is external; this crate never creates, mutates, or
//! deletes rows.

pub mod config;
pub mod db;
pub mod error;

pub use config::{DatabaseConfig, Driver};
pub use db::{ConnectionProvider, RecordRepository};
pub use error::{Error, Result};
