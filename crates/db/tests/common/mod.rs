//! Shared fixtures for db integration tests.

use chrono::NaiveDateTime;
use fleetops_core::types::{DbId, Timestamp};
use fleetops_db::models::client::CreateClient;
use fleetops_db::models::driver::CreateDriver;
use fleetops_db::models::vehicle::CreateVehicle;
use fleetops_db::repositories::{ClientRepo, DriverRepo, VehicleRepo};
use sqlx::PgPool;

/// Parse a `YYYY-MM-DD HH:MM:SS` literal into a UTC timestamp.
pub fn ts(s: &str) -> Timestamp {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|_| panic!("bad timestamp literal: {s}"))
        .and_utc()
}

pub async fn seed_client(pool: &PgPool, name: &str) -> DbId {
    ClientRepo::create(
        pool,
        &CreateClient {
            name: name.to_string(),
            address: None,
            city: None,
            province: None,
            postal_code: None,
            vat_number: None,
            notes: None,
        },
    )
    .await
    .expect("seed client")
    .id
}

pub async fn seed_driver(pool: &PgPool, first: &str, last: &str) -> DbId {
    DriverRepo::create(
        pool,
        &CreateDriver {
            first_name: first.to_string(),
            last_name: last.to_string(),
            license_number: None,
            license_expiry: None,
            phone: None,
            notes: None,
        },
    )
    .await
    .expect("seed driver")
    .id
}

pub async fn seed_vehicle(pool: &PgPool, plate: &str) -> DbId {
    VehicleRepo::create(
        pool,
        &CreateVehicle {
            plate: plate.to_string(),
            brand: None,
            model: None,
            vehicle_kind: None,
            inspection_due: None,
            insurance_due: None,
            notes: None,
        },
    )
    .await
    .expect("seed vehicle")
    .id
}
