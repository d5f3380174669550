//! Registry queries
//!
//! [`RecordRepository`] is the read surface over the registry schema:
//! directors, businesses, and the `director_businesses` linking table.
//! Each operation opens a connection through the injected
//! [`ConnectionProvider`], runs a single statement, and returns typed rows.
//! Caller-supplied values are always bound parameters, never spliced into
//! the SQL text.

use crate::db::connection::ConnectionProvider;
use crate::db::models::{Business, BusinessDirectorName, Director, FullRecord};
use crate::{Error, Result};
use chrono::NaiveDate;
use sqlx::Row;
use tracing::debug;

/// Row cap for [`RecordRepository::list_recent_directors`].
const RECENT_DIRECTORS_LIMIT: i64 = 100;

/// Read-only repository over the registry database.
///
/// Stateless between calls: every operation acquires its own connection
/// and releases it on return, error paths included.
#[derive(Debug, Clone)]
pub struct RecordRepository {
    provider: ConnectionProvider,
}

impl RecordRepository {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }

    /// All director rows, in database-default order.
    pub async fn list_directors(&self) -> Result<Vec<Director>> {
        let mut conn = self.provider.connect().await?;
        sqlx::query_as("SELECT id, first_name, last_name FROM directors")
            .fetch_all(&mut conn)
            .await
            .map_err(Error::Query)
    }

    /// The director with the given id, or `None` when no row matches.
    pub async fn get_director(&self, id: i64) -> Result<Option<Director>> {
        let mut conn = self.provider.connect().await?;
        sqlx::query_as("SELECT id, first_name, last_name FROM directors WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut conn)
            .await
            .map_err(Error::Query)
    }

    /// All business rows, in database-default order.
    pub async fn list_businesses(&self) -> Result<Vec<Business>> {
        let mut conn = self.provider.connect().await?;
        sqlx::query_as(
            "SELECT id, name, registered_address, registration_number, registration_date \
             FROM businesses",
        )
        .fetch_all(&mut conn)
        .await
        .map_err(Error::Query)
    }

    /// The business with the given id, or `None` when no row matches.
    pub async fn get_business(&self, id: i64) -> Result<Option<Business>> {
        let mut conn = self.provider.connect().await?;
        sqlx::query_as(
            "SELECT id, name, registered_address, registration_number, registration_date \
             FROM businesses WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut conn)
        .await
        .map_err(Error::Query)
    }

    /// Businesses whose registration date falls within the given calendar
    /// year.
    ///
    /// Filters on the half-open range `[Jan 1 year, Jan 1 year+1)` with
    /// bound dates rather than extracting the year in SQL, which keeps the
    /// statement identical across backends. Years chrono cannot represent
    /// cannot match any stored date and return an empty list.
    pub async fn list_businesses_by_year(&self, year: i32) -> Result<Vec<Business>> {
        let bounds = NaiveDate::from_ymd_opt(year, 1, 1).zip(
            year.checked_add(1)
                .and_then(|next| NaiveDate::from_ymd_opt(next, 1, 1)),
        );
        let (start, end) = match bounds {
            Some(range) => range,
            None => {
                debug!(year, "registration year outside representable range");
                return Ok(Vec::new());
            }
        };

        let mut conn = self.provider.connect().await?;
        sqlx::query_as(
            "SELECT id, name, registered_address, registration_number, registration_date \
             FROM businesses \
             WHERE registration_date >= ? AND registration_date < ?",
        )
        .bind(start.format("%Y-%m-%d").to_string())
        .bind(end.format("%Y-%m-%d").to_string())
        .fetch_all(&mut conn)
        .await
        .map_err(Error::Query)
    }

    /// The most recently assigned directors: up to 100 rows, largest ids
    /// first.
    pub async fn list_recent_directors(&self) -> Result<Vec<Director>> {
        let mut conn = self.provider.connect().await?;
        sqlx::query_as(
            "SELECT id, first_name, last_name FROM directors ORDER BY id DESC LIMIT ?",
        )
        .bind(RECENT_DIRECTORS_LIMIT)
        .fetch_all(&mut conn)
        .await
        .map_err(Error::Query)
    }

    /// One row per director-business link: the business name alongside the
    /// director's full name (first and last name concatenated with no
    /// separator).
    pub async fn list_business_director_names(&self) -> Result<Vec<BusinessDirectorName>> {
        let mut conn = self.provider.connect().await?;
        let rows = sqlx::query(
            r#"
            SELECT b.name AS business_name, d.first_name, d.last_name
            FROM director_businesses AS db
            JOIN businesses AS b ON b.id = db.business_id
            JOIN directors AS d ON d.id = db.director_id
            "#,
        )
        .fetch_all(&mut conn)
        .await
        .map_err(Error::Query)?;

        rows.into_iter()
            .map(|row| {
                let first: String = row.try_get("first_name").map_err(Error::Query)?;
                let last: String = row.try_get("last_name").map_err(Error::Query)?;
                Ok(BusinessDirectorName {
                    business_name: row.try_get("business_name").map_err(Error::Query)?,
                    director_name: format!("{}{}", first, last),
                })
            })
            .collect()
    }

    /// One row per director-business link with the business registration
    /// details and the director's name columns.
    pub async fn list_full_records(&self) -> Result<Vec<FullRecord>> {
        let mut conn = self.provider.connect().await?;
        sqlx::query_as(
            r#"
            SELECT b.id, d.first_name, d.last_name, b.name,
                   b.registered_address, b.registration_number
            FROM director_businesses AS db
            JOIN businesses AS b ON b.id = db.business_id
            JOIN directors AS d ON d.id = db.director_id
            "#,
        )
        .fetch_all(&mut conn)
        .await
        .map_err(Error::Query)
    }
}
