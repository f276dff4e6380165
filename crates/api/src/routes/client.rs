//! Route definitions for clients and their nested sites.

use axum::routing::get;
use axum::Router;

use crate::handlers::{client, site};
use crate::state::AppState;

/// Routes mounted at `/clients`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> update
/// DELETE /{id}                          -> delete (cascades sites)
///
/// GET    /{client_id}/sites             -> list_by_client
/// POST   /{client_id}/sites             -> create
/// GET    /{client_id}/sites/{id}        -> get_by_id
/// PUT    /{client_id}/sites/{id}        -> update
/// DELETE /{client_id}/sites/{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    let site_routes = Router::new()
        .route("/", get(site::list_by_client).post(site::create))
        .route(
            "/{id}",
            get(site::get_by_id).put(site::update).delete(site::delete),
        );

    Router::new()
        .route("/", get(client::list).post(client::create))
        .route(
            "/{id}",
            get(client::get_by_id)
                .put(client::update)
                .delete(client::delete),
        )
        .nest("/{client_id}/sites", site_routes)
}
