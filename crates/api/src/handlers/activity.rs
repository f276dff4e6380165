//! Handlers for the `/activities` resource.
//!
//! Covers the scheduling core: filtered listing, the save/sync path that
//! replaces resource assignments wholesale, and the per-date
//! available-resources computation.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use fleetops_core::error::CoreError;
use fleetops_core::interval::day_bounds;
use fleetops_core::pagination::{clamp_limit, clamp_offset};
use fleetops_core::types::{DbId, Timestamp};
use fleetops_db::models::activity::{
    ActivityFilter, ActivityPage, ActivityWithResources, CreateActivity, UpdateActivity,
};
use fleetops_db::repositories::availability_repo::AvailableResources;
use fleetops_db::repositories::{ActivityRepo, AvailabilityRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / query parameter types
// ---------------------------------------------------------------------------

/// Query parameters for the activity listing.
///
/// `start_date`/`end_date` are civil dates (YYYY-MM-DD); the range is
/// expanded to full-day bounds and matched by inclusive overlap.
#[derive(Debug, Deserialize)]
pub struct ActivityListParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub client_id: Option<DbId>,
    pub site_id: Option<DbId>,
    pub activity_type_id: Option<DbId>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for the available-resources endpoint.
#[derive(Debug, Deserialize)]
pub struct AvailableResourcesParams {
    pub date: Option<String>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a `YYYY-MM-DD` query parameter.
fn parse_date(value: &str, field: &str) -> AppResult<NaiveDate> {
    value.parse::<NaiveDate>().map_err(|_| {
        AppError::Core(CoreError::Validation(format!(
            "{field} must be a date in YYYY-MM-DD format"
        )))
    })
}

/// Reject an interval whose end precedes its start.
fn validate_interval(starts_at: Timestamp, ends_at: Option<Timestamp>) -> AppResult<()> {
    if let Some(ends_at) = ends_at {
        if ends_at < starts_at {
            return Err(AppError::Core(CoreError::Validation(
                "ends_at must not precede starts_at".to_string(),
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/activities
///
/// Filtered, paginated listing ordered by start instant descending.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ActivityListParams>,
) -> AppResult<Json<ActivityPage>> {
    let range_start = match &params.start_date {
        Some(raw) => Some(day_bounds(parse_date(raw, "start_date")?).0),
        None => None,
    };
    let range_end = match &params.end_date {
        Some(raw) => Some(day_bounds(parse_date(raw, "end_date")?).1),
        None => None,
    };

    let filter = ActivityFilter {
        range_start,
        range_end,
        client_id: params.client_id,
        site_id: params.site_id,
        activity_type_id: params.activity_type_id,
        status: params.status,
        search: params.search,
    };

    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);
    let (items, total) = ActivityRepo::list_by_filters(&state.pool, &filter, limit, offset).await?;

    Ok(Json(ActivityPage {
        items,
        total,
        limit,
        offset,
    }))
}

/// POST /api/v1/activities
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateActivity>,
) -> AppResult<(StatusCode, Json<ActivityWithResources>)> {
    validate_interval(input.starts_at, input.ends_at)?;
    let activity = ActivityRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(activity)))
}

/// GET /api/v1/activities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ActivityWithResources>> {
    let activity = ActivityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Activity",
            id,
        }))?;
    Ok(Json(activity))
}

/// PUT /api/v1/activities/{id}
///
/// Partial update. When `resources` is present the assignment set is
/// replaced wholesale inside the same transaction as the activity patch.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateActivity>,
) -> AppResult<Json<ActivityWithResources>> {
    if let (Some(starts_at), Some(ends_at)) = (input.starts_at, input.ends_at) {
        validate_interval(starts_at, Some(ends_at))?;
    }

    let activity = ActivityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Activity",
            id,
        }))?;
    Ok(Json(activity))
}

/// DELETE /api/v1/activities/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ActivityRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Activity",
            id,
        }))
    }
}

/// GET /api/v1/activities/available-resources?date=YYYY-MM-DD
///
/// Drivers and vehicles not committed to any non-cancelled activity
/// overlapping the target date. An empty list is a valid result.
pub async fn available_resources(
    State(state): State<AppState>,
    Query(params): Query<AvailableResourcesParams>,
) -> AppResult<Json<AvailableResources>> {
    let raw = params.date.as_deref().ok_or(AppError::Core(
        CoreError::Validation("date is required".to_string()),
    ))?;
    let date = parse_date(raw, "date")?;

    let available = AvailabilityRepo::available_resources(&state.pool, date).await?;
    Ok(Json(available))
}
