//! Vehicle reference entity.

use chrono::NaiveDate;
use fleetops_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `vehicles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vehicle {
    pub id: DbId,
    pub plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub vehicle_kind: Option<String>,
    /// Next mandatory inspection deadline.
    pub inspection_due: Option<NaiveDate>,
    /// Insurance expiry deadline.
    pub insurance_due: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a vehicle.
#[derive(Debug, Deserialize)]
pub struct CreateVehicle {
    pub plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub vehicle_kind: Option<String>,
    pub inspection_due: Option<NaiveDate>,
    pub insurance_due: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// DTO for patching a vehicle.
#[derive(Debug, Deserialize)]
pub struct UpdateVehicle {
    pub plate: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub vehicle_kind: Option<String>,
    pub inspection_due: Option<NaiveDate>,
    pub insurance_due: Option<NaiveDate>,
    pub notes: Option<String>,
}
