//! Route definitions for the `/trade-documents` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{suggestion, trade_document};
use crate::state::AppState;

/// Routes mounted at `/trade-documents`.
///
/// ```text
/// GET    /               -> list (pagination)
/// POST   /               -> create (sync tooling)
/// GET    /suggestions    -> suggestions (?client_id=&site_id=&start_date=)
/// GET    /{id}           -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(trade_document::list).post(trade_document::create),
        )
        // Static segment registered before the `{id}` matcher.
        .route("/suggestions", get(suggestion::suggestions))
        .route("/{id}", get(trade_document::get_by_id))
}
