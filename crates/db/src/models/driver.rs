//! Driver reference entity.
//!
//! Read-only from the availability engine's perspective; the CRUD here is
//! the thin back-office surface that keeps the directory populated.

use chrono::NaiveDate;
use fleetops_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `drivers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Driver {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub license_number: Option<String>,
    pub license_expiry: Option<NaiveDate>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a driver.
#[derive(Debug, Deserialize)]
pub struct CreateDriver {
    pub first_name: String,
    pub last_name: String,
    pub license_number: Option<String>,
    pub license_expiry: Option<NaiveDate>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

/// DTO for patching a driver.
#[derive(Debug, Deserialize)]
pub struct UpdateDriver {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub license_number: Option<String>,
    pub license_expiry: Option<NaiveDate>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}
