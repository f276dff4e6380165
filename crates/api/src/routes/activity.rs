//! Route definitions for the `/activities` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::activity;
use crate::state::AppState;

/// Routes mounted at `/activities`.
///
/// ```text
/// GET    /                        -> list (filters + pagination)
/// POST   /                        -> create
/// GET    /available-resources     -> available_resources (?date=YYYY-MM-DD)
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update (full-replace resource sync)
/// DELETE /{id}                    -> delete (cascades assignments)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(activity::list).post(activity::create))
        // Static segment registered before the `{id}` matcher.
        .route("/available-resources", get(activity::available_resources))
        .route(
            "/{id}",
            get(activity::get_by_id)
                .put(activity::update)
                .delete(activity::delete),
        )
}
