//! Activity type reference entity (delivery, transport, rental, ...).

use fleetops_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `activity_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityType {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an activity type.
#[derive(Debug, Deserialize)]
pub struct CreateActivityType {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for patching an activity type.
#[derive(Debug, Deserialize)]
pub struct UpdateActivityType {
    pub name: Option<String>,
    pub description: Option<String>,
}
