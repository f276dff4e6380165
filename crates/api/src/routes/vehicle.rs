//! Route definitions for the `/vehicles` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::vehicle;
use crate::state::AppState;

/// Routes mounted at `/vehicles`.
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
        .route("/", get(vehicle::list).post(vehicle::create))
        .route(
            "/{id}",
            get(vehicle::get_by_id)
                .put(vehicle::update)
                .delete(vehicle::delete),
        )
}
