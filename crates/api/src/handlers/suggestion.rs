//! Trade document suggestion handler.
//!
//! Pulls candidates for a client within a ±7-day window around the draft
//! activity's start date and ranks them by date proximity.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{Days, NaiveDate};
use fleetops_core::error::CoreError;
use fleetops_core::matching::{self, RankedMatch, SUGGESTION_WINDOW_DAYS};
use fleetops_core::types::DbId;
use fleetops_db::models::trade_document::TradeDocument;
use fleetops_db::repositories::TradeDocumentRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for the suggestion endpoint.
///
/// `data_inizio` is accepted as an alias for `start_date`: the legacy
/// back-office frontend still sends the Italian name. `site_id` is
/// accepted for forward compatibility but does not influence ranking.
#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    pub client_id: Option<DbId>,
    pub site_id: Option<DbId>,
    #[serde(alias = "data_inizio")]
    pub start_date: Option<String>,
}

/// Response envelope for the suggestion endpoint.
///
/// An empty candidate pool is a success, reported with a message the
/// caller can display as-is.
#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub suggestions: Vec<RankedMatch<TradeDocument>>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// GET /api/v1/trade-documents/suggestions
///
/// Ranked trade document suggestions for an activity being drafted.
/// Requires `client_id` and `start_date` (alias `data_inizio`).
pub async fn suggestions(
    State(state): State<AppState>,
    Query(params): Query<SuggestionParams>,
) -> AppResult<Json<SuggestionResponse>> {
    let client_id = params.client_id.ok_or(AppError::Core(CoreError::Validation(
        "client_id is required".to_string(),
    )))?;
    let raw_date = params.start_date.as_deref().ok_or(AppError::Core(
        CoreError::Validation("start_date is required".to_string()),
    ))?;
    let target: NaiveDate = raw_date.parse().map_err(|_| {
        AppError::Core(CoreError::Validation(
            "start_date must be a date in YYYY-MM-DD format".to_string(),
        ))
    })?;

    let window = Days::new(SUGGESTION_WINDOW_DAYS as u64);
    let from = target.checked_sub_days(window).unwrap_or(target);
    let to = target.checked_add_days(window).unwrap_or(target);

    let candidates =
        TradeDocumentRepo::find_by_client_and_date_window(&state.pool, client_id, from, to).await?;

    let suggestions = matching::rank(target, candidates);
    let message = if suggestions.is_empty() {
        Some("No trade documents found near the requested date".to_string())
    } else {
        None
    };

    Ok(Json(SuggestionResponse {
        count: suggestions.len(),
        suggestions,
        message,
    }))
}
