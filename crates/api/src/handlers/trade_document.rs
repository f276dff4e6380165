//! Handlers for the `/trade-documents` resource.
//!
//! The table is populated by the external ERP sync; the API exposes it
//! read-mostly (list/get) plus a create endpoint for sync tooling.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fleetops_core::error::CoreError;
use fleetops_core::pagination::{clamp_limit, clamp_offset};
use fleetops_core::types::DbId;
use fleetops_db::models::trade_document::{CreateTradeDocument, TradeDocument};
use fleetops_db::repositories::TradeDocumentRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/trade-documents
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<TradeDocument>>>> {
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);
    let documents = TradeDocumentRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse { data: documents }))
}

/// GET /api/v1/trade-documents/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TradeDocument>> {
    let document = TradeDocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TradeDocument",
            id,
        }))?;
    Ok(Json(document))
}

/// POST /api/v1/trade-documents
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTradeDocument>,
) -> AppResult<(StatusCode, Json<TradeDocument>)> {
    let document = TradeDocumentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(document)))
}
