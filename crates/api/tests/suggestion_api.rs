//! HTTP-level integration tests for trade document suggestions.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

async fn seed_client(pool: PgPool, name: &str) -> i64 {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/clients", serde_json::json!({"name": name})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn seed_document(
    pool: PgPool,
    client_id: i64,
    issued_on: &str,
    delivered_on: Option<&str>,
    total: f64,
) -> i64 {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/trade-documents",
        serde_json::json!({
            "client_id": client_id,
            "issued_on": issued_on,
            "delivered_on": delivered_on,
            "total_amount": total
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_client_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/trade-documents/suggestions?start_date=2024-05-10",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_start_date_returns_400(pool: PgPool) {
    let client_id = seed_client(pool.clone(), "Acme").await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/trade-documents/suggestions?client_id={client_id}"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn exact_date_match_ranks_first(pool: PgPool) {
    let client_id = seed_client(pool.clone(), "Acme").await;
    seed_document(pool.clone(), client_id, "2024-05-08", None, 100.0).await;
    let exact = seed_document(pool.clone(), client_id, "2024-05-10", None, 100.0).await;
    seed_document(pool.clone(), client_id, "2024-05-11", None, 5000.0).await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!(
            "/api/v1/trade-documents/suggestions?client_id={client_id}&start_date=2024-05-10"
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let suggestions = json["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 3);

    // Exact match first even though the day-after document scores higher
    // on value bonuses.
    assert_eq!(suggestions[0]["document"]["id"], exact);
    assert_eq!(suggestions[0]["is_exact_date"], true);
    assert_eq!(suggestions[0]["days_difference"], 0);
    assert_eq!(suggestions[0]["match_score"], 150);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delivery_date_takes_precedence_over_issue_date(pool: PgPool) {
    let client_id = seed_client(pool.clone(), "Acme").await;
    // Issued far outside the window, delivered on the target date.
    let id = seed_document(pool.clone(), client_id, "2024-04-01", Some("2024-05-10"), 100.0).await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!(
            "/api/v1/trade-documents/suggestions?client_id={client_id}&start_date=2024-05-10"
        ),
    )
    .await;

    let json = body_json(response).await;
    let suggestions = json["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0]["document"]["id"], id);
    assert_eq!(suggestions[0]["is_exact_date"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn documents_outside_the_seven_day_window_are_excluded(pool: PgPool) {
    let client_id = seed_client(pool.clone(), "Acme").await;
    seed_document(pool.clone(), client_id, "2024-05-02", None, 100.0).await;
    let inside = seed_document(pool.clone(), client_id, "2024-05-03", None, 100.0).await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!(
            "/api/v1/trade-documents/suggestions?client_id={client_id}&start_date=2024-05-10"
        ),
    )
    .await;

    let json = body_json(response).await;
    let suggestions = json["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0]["document"]["id"], inside);
    assert_eq!(suggestions[0]["days_difference"], 7);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn other_clients_documents_are_not_suggested(pool: PgPool) {
    let client_a = seed_client(pool.clone(), "Acme").await;
    let client_b = seed_client(pool.clone(), "Globex").await;
    seed_document(pool.clone(), client_b, "2024-05-10", None, 100.0).await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/trade-documents/suggestions?client_id={client_a}&start_date=2024-05-10"),
    )
    .await;

    let json = body_json(response).await;
    assert!(json["suggestions"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn results_are_capped_at_ten(pool: PgPool) {
    let client_id = seed_client(pool.clone(), "Acme").await;
    for day in 4..=15 {
        seed_document(pool.clone(), client_id, &format!("2024-05-{day:02}"), None, 50.0).await;
    }

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!(
            "/api/v1/trade-documents/suggestions?client_id={client_id}&start_date=2024-05-10"
        ),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["suggestions"].as_array().unwrap().len(), 10);
    assert_eq!(json["count"], 10);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_pool_returns_success_with_message(pool: PgPool) {
    let client_id = seed_client(pool.clone(), "Acme").await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!(
            "/api/v1/trade-documents/suggestions?client_id={client_id}&start_date=2024-05-10"
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["suggestions"].as_array().unwrap().is_empty());
    assert_eq!(json["count"], 0);
    assert!(json["message"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn legacy_data_inizio_alias_is_accepted(pool: PgPool) {
    let client_id = seed_client(pool.clone(), "Acme").await;
    seed_document(pool.clone(), client_id, "2024-05-10", None, 100.0).await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!(
            "/api/v1/trade-documents/suggestions?client_id={client_id}&data_inizio=2024-05-10"
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["count"], 1);
}
