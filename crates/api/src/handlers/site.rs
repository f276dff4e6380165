//! Handlers for the `/sites` resource.
//!
//! Sites are nested under clients for create/list:
//! `/clients/{client_id}/sites[/{id}]`

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fleetops_core::error::CoreError;
use fleetops_core::types::DbId;
use fleetops_db::models::site::{CreateSite, Site, UpdateSite};
use fleetops_db::repositories::SiteRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/clients/{client_id}/sites
///
/// Overrides `input.client_id` with the value from the URL path.
pub async fn create(
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
    Json(mut input): Json<CreateSite>,
) -> AppResult<(StatusCode, Json<Site>)> {
    input.client_id = client_id;
    let site = SiteRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(site)))
}

/// GET /api/v1/clients/{client_id}/sites
pub async fn list_by_client(
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Site>>>> {
    let sites = SiteRepo::list_by_client(&state.pool, client_id).await?;
    Ok(Json(DataResponse { data: sites }))
}

/// GET /api/v1/clients/{client_id}/sites/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((_client_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Site>> {
    let site = SiteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Site", id }))?;
    Ok(Json(site))
}

/// PUT /api/v1/clients/{client_id}/sites/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((_client_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateSite>,
) -> AppResult<Json<Site>> {
    let site = SiteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Site", id }))?;
    Ok(Json(site))
}

/// DELETE /api/v1/clients/{client_id}/sites/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((_client_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = SiteRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Site", id }))
    }
}
