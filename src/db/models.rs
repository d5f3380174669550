//! Row models for the registry schema
//!
//! All rows are read-only snapshots: the registry is maintained externally
//! and this crate never writes to it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};

/// A director row from the `directors` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Director {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// A business row from the `businesses` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    pub id: i64,
    pub name: String,
    pub registered_address: String,
    pub registration_number: String,
    pub registration_date: NaiveDate,
}

// Dates travel as ISO-8601 text through the `Any` driver, so the row
// mapping is written out by hand to parse them.
impl FromRow<'_, AnyRow> for Business {
    fn from_row(row: &AnyRow) -> std::result::Result<Self, sqlx::Error> {
        let raw_date: String = row.try_get("registration_date")?;
        let registration_date =
            NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d").map_err(|e| {
                sqlx::Error::ColumnDecode {
                    index: "registration_date".to_string(),
                    source: Box::new(e),
                }
            })?;

        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            registered_address: row.try_get("registered_address")?,
            registration_number: row.try_get("registration_number")?,
            registration_date,
        })
    }
}

/// One director-business link, rendered as the business name plus the
/// director's first and last name concatenated with no separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessDirectorName {
    pub business_name: String,
    pub director_name: String,
}

/// One director-business link with the business registration details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct FullRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub name: String,
    pub registered_address: String,
    pub registration_number: String,
}
