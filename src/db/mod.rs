//! Database connection handling, models, and queries

pub mod connection;
pub mod models;
pub mod repository;

pub use connection::ConnectionProvider;
pub use models::*;
pub use repository::RecordRepository;
