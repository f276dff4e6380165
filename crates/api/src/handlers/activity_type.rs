//! Handlers for the `/activity-types` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fleetops_core::error::CoreError;
use fleetops_core::types::DbId;
use fleetops_db::models::activity_type::{ActivityType, CreateActivityType, UpdateActivityType};
use fleetops_db::repositories::ActivityTypeRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/activity-types
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<ActivityType>>>> {
    let types = ActivityTypeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: types }))
}

/// POST /api/v1/activity-types
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateActivityType>,
) -> AppResult<(StatusCode, Json<ActivityType>)> {
    let activity_type = ActivityTypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(activity_type)))
}

/// GET /api/v1/activity-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ActivityType>> {
    let activity_type = ActivityTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ActivityType",
            id,
        }))?;
    Ok(Json(activity_type))
}

/// PUT /api/v1/activity-types/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateActivityType>,
) -> AppResult<Json<ActivityType>> {
    let activity_type = ActivityTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ActivityType",
            id,
        }))?;
    Ok(Json(activity_type))
}

/// DELETE /api/v1/activity-types/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ActivityTypeRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ActivityType",
            id,
        }))
    }
}
