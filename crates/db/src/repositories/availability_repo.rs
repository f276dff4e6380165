//! Availability engine: free drivers and vehicles for a target date.
//!
//! The busy set is computed from *activity-level* intervals, never from
//! the assignment-scoped windows: those windows are advisory rental
//! tracking, and availability must be conservative — a resource stays
//! busy for the whole declared interval of any non-cancelled activity
//! that references it.

use std::collections::HashSet;

use chrono::NaiveDate;
use fleetops_core::interval::day_bounds;
use fleetops_core::status::CANCELLED_STATUSES;
use fleetops_core::types::DbId;
use serde::Serialize;
use sqlx::PgPool;

use crate::models::driver::Driver;
use crate::models::vehicle::Vehicle;
use crate::repositories::{DriverRepo, VehicleRepo};

/// Free resources for one date. Disjoint from the busy set by
/// construction; together with it, a partition of the full directory.
#[derive(Debug, Serialize)]
pub struct AvailableResources {
    pub date: NaiveDate,
    pub drivers: Vec<Driver>,
    pub vehicles: Vec<Vehicle>,
}

/// Computes resource availability by set subtraction.
pub struct AvailabilityRepo;

impl AvailabilityRepo {
    /// Drivers and vehicles not committed to any non-cancelled activity
    /// overlapping the full target date (`[00:00:00, 23:59:59]`).
    ///
    /// An empty result is a valid outcome, not an error.
    pub async fn available_resources(
        pool: &PgPool,
        date: NaiveDate,
    ) -> Result<AvailableResources, sqlx::Error> {
        let (day_start, day_end) = day_bounds(date);
        let cancelled: Vec<String> = CANCELLED_STATUSES.iter().map(|s| s.to_string()).collect();

        // DISTINCT gives set semantics: a driver on several overlapping
        // activities is counted once.
        let busy_drivers: HashSet<DbId> = sqlx::query_scalar::<_, DbId>(
            "SELECT DISTINCT ra.driver_id \
             FROM resource_assignments ra \
             JOIN activities a ON a.id = ra.activity_id \
             WHERE NOT (BTRIM(LOWER(a.status)) = ANY($1)) \
               AND a.starts_at <= $3 \
               AND COALESCE(a.ends_at, a.starts_at) >= $2",
        )
        .bind(&cancelled)
        .bind(day_start)
        .bind(day_end)
        .fetch_all(pool)
        .await?
        .into_iter()
        .collect();

        let busy_vehicles: HashSet<DbId> = sqlx::query_scalar::<_, DbId>(
            "SELECT DISTINCT ra.vehicle_id \
             FROM resource_assignments ra \
             JOIN activities a ON a.id = ra.activity_id \
             WHERE ra.vehicle_id IS NOT NULL \
               AND NOT (BTRIM(LOWER(a.status)) = ANY($1)) \
               AND a.starts_at <= $3 \
               AND COALESCE(a.ends_at, a.starts_at) >= $2",
        )
        .bind(&cancelled)
        .bind(day_start)
        .bind(day_end)
        .fetch_all(pool)
        .await?
        .into_iter()
        .collect();

        let drivers = DriverRepo::list(pool)
            .await?
            .into_iter()
            .filter(|d| !busy_drivers.contains(&d.id))
            .collect();

        let vehicles = VehicleRepo::list(pool)
            .await?
            .into_iter()
            .filter(|v| !busy_vehicles.contains(&v.id))
            .collect();

        Ok(AvailableResources {
            date,
            drivers,
            vehicles,
        })
    }
}
