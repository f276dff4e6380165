//! Route definitions for the `/activity-types` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::activity_type;
use crate::state::AppState;

/// Routes mounted at `/activity-types`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(activity_type::list).post(activity_type::create))
        .route(
            "/{id}",
            get(activity_type::get_by_id)
                .put(activity_type::update)
                .delete(activity_type::delete),
        )
}
