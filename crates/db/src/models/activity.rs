//! Activity entity and its resource assignments.
//!
//! An activity is a time-bounded transport/service job. It owns an
//! ordered set of resource assignments (driver + optional vehicle),
//! replaced wholesale on every save.

use fleetops_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A row from the `activities` table.
///
/// `status` stays a free-form string: canonical values are written by the
/// API, but rows migrated from the legacy back-office carry Italian
/// spellings that must survive round-trips.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Activity {
    pub id: DbId,
    pub description: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Option<Timestamp>,
    pub status: String,
    pub client_id: Option<DbId>,
    pub site_id: Option<DbId>,
    pub activity_type_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `resource_assignments` table.
///
/// The assignment-scoped window (`starts_at`/`ends_at`) is advisory
/// rental/usage tracking; availability is always computed from the
/// parent activity's interval.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ResourceAssignment {
    pub id: DbId,
    pub activity_id: DbId,
    pub driver_id: DbId,
    pub vehicle_id: Option<DbId>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// An activity together with its current assignment set.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityWithResources {
    #[serde(flatten)]
    pub activity: Activity,
    pub resources: Vec<ResourceAssignment>,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// One driver + optional vehicle pair in a save request.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceInput {
    pub driver_id: DbId,
    pub vehicle_id: Option<DbId>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
}

/// DTO for creating an activity with its resource list.
#[derive(Debug, Deserialize)]
pub struct CreateActivity {
    pub description: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Option<Timestamp>,
    pub status: Option<String>,
    pub client_id: Option<DbId>,
    pub site_id: Option<DbId>,
    pub activity_type_id: Option<DbId>,
    #[serde(default)]
    pub resources: Vec<ResourceInput>,
}

/// DTO for patching an activity.
///
/// `resources: Some(..)` triggers a full replace of the assignment set;
/// `None` leaves the existing assignments untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateActivity {
    pub description: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub status: Option<String>,
    pub client_id: Option<DbId>,
    pub site_id: Option<DbId>,
    pub activity_type_id: Option<DbId>,
    pub resources: Option<Vec<ResourceInput>>,
}

// ---------------------------------------------------------------------------
// Listing filter and page
// ---------------------------------------------------------------------------

/// Filter parameters for the activity listing query.
///
/// The date range matches by inclusive overlap, not containment: an
/// activity spanning several days appears in every day it touches.
#[derive(Debug, Default)]
pub struct ActivityFilter {
    pub range_start: Option<Timestamp>,
    pub range_end: Option<Timestamp>,
    pub client_id: Option<DbId>,
    pub site_id: Option<DbId>,
    pub activity_type_id: Option<DbId>,
    pub status: Option<String>,
    /// Case-insensitive substring match over the activity description and
    /// the joined client/site address fields.
    pub search: Option<String>,
}

/// One page of activities plus the total count for the filter.
///
/// The rows serialize under `data` like every other collection response.
#[derive(Debug, Serialize)]
pub struct ActivityPage {
    #[serde(rename = "data")]
    pub items: Vec<ActivityWithResources>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}
