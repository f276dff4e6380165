//! Handlers for the `/vehicles` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fleetops_core::error::CoreError;
use fleetops_core::types::DbId;
use fleetops_db::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};
use fleetops_db::repositories::VehicleRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/vehicles
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Vehicle>>>> {
    let vehicles = VehicleRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: vehicles }))
}

/// POST /api/v1/vehicles
///
/// Plates are unique; a duplicate returns 409.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateVehicle>,
) -> AppResult<(StatusCode, Json<Vehicle>)> {
    let vehicle = VehicleRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// GET /api/v1/vehicles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vehicle>> {
    let vehicle = VehicleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))?;
    Ok(Json(vehicle))
}

/// PUT /api/v1/vehicles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVehicle>,
) -> AppResult<Json<Vehicle>> {
    let vehicle = VehicleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))?;
    Ok(Json(vehicle))
}

/// DELETE /api/v1/vehicles/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = VehicleRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))
    }
}
