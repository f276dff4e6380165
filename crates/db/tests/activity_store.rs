mod common;

use common::{seed_client, seed_driver, seed_vehicle, ts};
use fleetops_db::models::activity::{
    ActivityFilter, CreateActivity, ResourceInput, UpdateActivity,
};
use fleetops_db::repositories::ActivityRepo;
use sqlx::PgPool;

fn basic_create(description: &str) -> CreateActivity {
    CreateActivity {
        description: Some(description.to_string()),
        starts_at: ts("2024-03-01 08:00:00"),
        ends_at: Some(ts("2024-03-01 17:00:00")),
        status: Some("planned".to_string()),
        client_id: None,
        site_id: None,
        activity_type_id: None,
        resources: vec![],
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_attaches_resources(pool: PgPool) {
    let driver_id = seed_driver(&pool, "Mario", "Rossi").await;
    let vehicle_id = seed_vehicle(&pool, "AB123CD").await;

    let mut input = basic_create("delivery");
    input.resources = vec![ResourceInput {
        driver_id,
        vehicle_id: Some(vehicle_id),
        starts_at: None,
        ends_at: None,
    }];

    let saved = ActivityRepo::create(&pool, &input).await.unwrap();
    assert_eq!(saved.resources.len(), 1);
    assert_eq!(saved.resources[0].driver_id, driver_id);
    assert_eq!(saved.resources[0].vehicle_id, Some(vehicle_id));

    let fetched = ActivityRepo::find_by_id(&pool, saved.activity.id)
        .await
        .unwrap()
        .expect("activity exists");
    assert_eq!(fetched.resources.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn driver_only_assignment_is_valid(pool: PgPool) {
    let driver_id = seed_driver(&pool, "Luca", "Bianchi").await;

    let mut input = basic_create("driver only");
    input.resources = vec![ResourceInput {
        driver_id,
        vehicle_id: None,
        starts_at: None,
        ends_at: None,
    }];

    let saved = ActivityRepo::create(&pool, &input).await.unwrap();
    assert_eq!(saved.resources.len(), 1);
    assert_eq!(saved.resources[0].vehicle_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_assignments_wholesale(pool: PgPool) {
    let d1 = seed_driver(&pool, "Mario", "Rossi").await;
    let d2 = seed_driver(&pool, "Luca", "Bianchi").await;

    let mut input = basic_create("swap crew");
    input.resources = vec![ResourceInput {
        driver_id: d1,
        vehicle_id: None,
        starts_at: None,
        ends_at: None,
    }];
    let saved = ActivityRepo::create(&pool, &input).await.unwrap();

    // Replace, not merge: d1 must be gone after the update.
    let update = UpdateActivity {
        description: None,
        starts_at: None,
        ends_at: None,
        status: None,
        client_id: None,
        site_id: None,
        activity_type_id: None,
        resources: Some(vec![ResourceInput {
            driver_id: d2,
            vehicle_id: None,
            starts_at: None,
            ends_at: None,
        }]),
    };
    let updated = ActivityRepo::update(&pool, saved.activity.id, &update)
        .await
        .unwrap()
        .expect("activity exists");
    assert_eq!(updated.resources.len(), 1);
    assert_eq!(updated.resources[0].driver_id, d2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_without_resources_leaves_assignments_untouched(pool: PgPool) {
    let driver_id = seed_driver(&pool, "Mario", "Rossi").await;

    let mut input = basic_create("patch description");
    input.resources = vec![ResourceInput {
        driver_id,
        vehicle_id: None,
        starts_at: None,
        ends_at: None,
    }];
    let saved = ActivityRepo::create(&pool, &input).await.unwrap();

    let update = UpdateActivity {
        description: Some("patched".to_string()),
        starts_at: None,
        ends_at: None,
        status: None,
        client_id: None,
        site_id: None,
        activity_type_id: None,
        resources: None,
    };
    let updated = ActivityRepo::update(&pool, saved.activity.id, &update)
        .await
        .unwrap()
        .expect("activity exists");
    assert_eq!(updated.activity.description.as_deref(), Some("patched"));
    assert_eq!(updated.resources.len(), 1);
    assert_eq!(updated.resources[0].driver_id, driver_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn save_with_unknown_driver_aborts_whole_transaction(pool: PgPool) {
    let mut input = basic_create("bad save");
    input.resources = vec![ResourceInput {
        driver_id: 999_999,
        vehicle_id: None,
        starts_at: None,
        ends_at: None,
    }];

    let err = ActivityRepo::create(&pool, &input).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23503"));
        }
        other => panic!("expected FK violation, got {other:?}"),
    }

    // No partial activity row may survive the rollback.
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM activities")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_cascades_assignments(pool: PgPool) {
    let driver_id = seed_driver(&pool, "Mario", "Rossi").await;

    let mut input = basic_create("doomed");
    input.resources = vec![ResourceInput {
        driver_id,
        vehicle_id: None,
        starts_at: None,
        ends_at: None,
    }];
    let saved = ActivityRepo::create(&pool, &input).await.unwrap();

    assert!(ActivityRepo::delete(&pool, saved.activity.id).await.unwrap());

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM resource_assignments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn date_range_filter_uses_inclusive_overlap(pool: PgPool) {
    // Activity spanning 2024-01-10 .. 2024-01-12.
    let mut input = basic_create("span");
    input.starts_at = ts("2024-01-10 08:00:00");
    input.ends_at = Some(ts("2024-01-12 17:00:00"));
    ActivityRepo::create(&pool, &input).await.unwrap();

    // Query window fully inside the activity interval must still match.
    let filter = ActivityFilter {
        range_start: Some(ts("2024-01-11 00:00:00")),
        range_end: Some(ts("2024-01-11 23:59:59")),
        ..Default::default()
    };
    let (items, total) = ActivityRepo::list_by_filters(&pool, &filter, 25, 0)
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items.len(), 1);

    // A window entirely before the activity must not match.
    let filter = ActivityFilter {
        range_start: Some(ts("2024-01-01 00:00:00")),
        range_end: Some(ts("2024-01-09 23:59:59")),
        ..Default::default()
    };
    let (items, total) = ActivityRepo::list_by_filters(&pool, &filter, 25, 0)
        .await
        .unwrap();
    assert_eq!(total, 0);
    assert!(items.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn open_ended_activity_occupies_start_day_only(pool: PgPool) {
    let mut input = basic_create("open ended");
    input.starts_at = ts("2024-02-05 09:00:00");
    input.ends_at = None;
    ActivityRepo::create(&pool, &input).await.unwrap();

    let filter = ActivityFilter {
        range_start: Some(ts("2024-02-05 00:00:00")),
        range_end: Some(ts("2024-02-05 23:59:59")),
        ..Default::default()
    };
    let (_, total) = ActivityRepo::list_by_filters(&pool, &filter, 25, 0)
        .await
        .unwrap();
    assert_eq!(total, 1);

    let filter = ActivityFilter {
        range_start: Some(ts("2024-02-06 00:00:00")),
        range_end: Some(ts("2024-02-06 23:59:59")),
        ..Default::default()
    };
    let (_, total) = ActivityRepo::list_by_filters(&pool, &filter, 25, 0)
        .await
        .unwrap();
    assert_eq!(total, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn client_and_status_filters_narrow_results(pool: PgPool) {
    let client_a = seed_client(&pool, "Acme").await;
    let client_b = seed_client(&pool, "Globex").await;

    let mut a = basic_create("for acme");
    a.client_id = Some(client_a);
    ActivityRepo::create(&pool, &a).await.unwrap();

    let mut b = basic_create("for globex");
    b.client_id = Some(client_b);
    b.status = Some("completed".to_string());
    ActivityRepo::create(&pool, &b).await.unwrap();

    let filter = ActivityFilter {
        client_id: Some(client_a),
        ..Default::default()
    };
    let (items, total) = ActivityRepo::list_by_filters(&pool, &filter, 25, 0)
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].activity.client_id, Some(client_a));

    let filter = ActivityFilter {
        status: Some("completed".to_string()),
        ..Default::default()
    };
    let (items, total) = ActivityRepo::list_by_filters(&pool, &filter, 25, 0)
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].activity.status, "completed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn status_filter_matches_legacy_spellings(pool: PgPool) {
    let saved = ActivityRepo::create(&pool, &basic_create("migrated row"))
        .await
        .unwrap();
    // Rows migrated from the legacy back-office keep Italian spellings.
    sqlx::query("UPDATE activities SET status = 'Annullata' WHERE id = $1")
        .bind(saved.activity.id)
        .execute(&pool)
        .await
        .unwrap();

    // The canonical filter value must find the legacy row.
    let filter = ActivityFilter {
        status: Some("cancelled".to_string()),
        ..Default::default()
    };
    let (items, total) = ActivityRepo::list_by_filters(&pool, &filter, 25, 0)
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].activity.status, "Annullata");

    // And so must the legacy value itself.
    let filter = ActivityFilter {
        status: Some("Annullata".to_string()),
        ..Default::default()
    };
    let (_, total) = ActivityRepo::list_by_filters(&pool, &filter, 25, 0)
        .await
        .unwrap();
    assert_eq!(total, 1);

    let filter = ActivityFilter {
        status: Some("planned".to_string()),
        ..Default::default()
    };
    let (_, total) = ActivityRepo::list_by_filters(&pool, &filter, 25, 0)
        .await
        .unwrap();
    assert_eq!(total, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn free_text_search_matches_description_case_insensitively(pool: PgPool) {
    let mut a = basic_create("Consegna cemento cantiere nord");
    a.starts_at = ts("2024-03-02 08:00:00");
    ActivityRepo::create(&pool, &a).await.unwrap();
    ActivityRepo::create(&pool, &basic_create("other job")).await.unwrap();

    let filter = ActivityFilter {
        search: Some("CEMENTO".to_string()),
        ..Default::default()
    };
    let (items, total) = ActivityRepo::list_by_filters(&pool, &filter, 25, 0)
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert!(items[0]
        .activity
        .description
        .as_deref()
        .unwrap()
        .contains("cemento"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_orders_newest_start_first_and_paginates(pool: PgPool) {
    for day in 1..=5 {
        let mut input = basic_create(&format!("job {day}"));
        input.starts_at = ts(&format!("2024-04-0{day} 08:00:00"));
        input.ends_at = None;
        ActivityRepo::create(&pool, &input).await.unwrap();
    }

    let filter = ActivityFilter::default();
    let (page, total) = ActivityRepo::list_by_filters(&pool, &filter, 2, 0)
        .await
        .unwrap();
    assert_eq!(total, 5);
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].activity.description.as_deref(), Some("job 5"));
    assert_eq!(page[1].activity.description.as_deref(), Some("job 4"));

    let (page, _) = ActivityRepo::list_by_filters(&pool, &filter, 2, 4)
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].activity.description.as_deref(), Some("job 1"));
}
