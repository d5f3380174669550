//! Connection establishment
//!
//! [`ConnectionProvider`] turns a [`DatabaseConfig`] descriptor into live
//! connection handles on demand. Handles are not pooled or cached: every
//! call to [`ConnectionProvider::connect`] opens a fresh connection, and
//! dropping the handle releases it.

use crate::config::DatabaseConfig;
use crate::{Error, Result};
use sqlx::{AnyConnection, Connection};
use std::sync::Once;
use tracing::info;

static INSTALL_DRIVERS: Once = Once::new();

/// Opens database connections from an immutable configuration descriptor.
///
/// Injected into [`crate::RecordRepository`] at construction; tests inject
/// a provider pointed at a scratch database.
#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    config: DatabaseConfig,
}

impl ConnectionProvider {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Open a fresh connection to the configured database.
    ///
    /// Fails with [`Error::Config`] when the descriptor is incomplete and
    /// [`Error::Connection`] when the handshake fails. No retry is
    /// performed; that decision stays with the caller.
    pub async fn connect(&self) -> Result<AnyConnection> {
        INSTALL_DRIVERS.call_once(sqlx::any::install_default_drivers);

        let url = self.config.connection_url()?;
        info!(driver = %self.config.driver, "opening database connection");
        AnyConnection::connect(&url)
            .await
            .map_err(Error::Connection)
    }
}
