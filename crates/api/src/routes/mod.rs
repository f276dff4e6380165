pub mod activity;
pub mod activity_type;
pub mod client;
pub mod driver;
pub mod health;
pub mod trade_document;
pub mod vehicle;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /activities                              list, create
/// /activities/available-resources          free drivers/vehicles for a date
/// /activities/{id}                         get, update, delete
///
/// /clients                                 list, create
/// /clients/{id}                            get, update, delete
/// /clients/{client_id}/sites               list, create
/// /clients/{client_id}/sites/{id}          get, update, delete
///
/// /drivers                                 list, create
/// /drivers/{id}                            get, update, delete
///
/// /vehicles                                list, create
/// /vehicles/{id}                           get, update, delete
///
/// /activity-types                          list, create
/// /activity-types/{id}                     get, update, delete
///
/// /trade-documents                         list, create
/// /trade-documents/suggestions             ranked suggestions for a draft
/// /trade-documents/{id}                    get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/activities", activity::router())
        .nest("/clients", client::router())
        .nest("/drivers", driver::router())
        .nest("/vehicles", vehicle::router())
        .nest("/activity-types", activity_type::router())
        .nest("/trade-documents", trade_document::router())
}
