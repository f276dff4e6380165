//! Repository for the `vehicles` table.

use fleetops_core::types::DbId;
use sqlx::PgPool;

use crate::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};

/// Column list for vehicle queries.
const COLUMNS: &str = "id, plate, brand, model, vehicle_kind, inspection_due, \
    insurance_due, notes, created_at, updated_at";

/// Provides CRUD operations and directory reads for vehicles.
pub struct VehicleRepo;

impl VehicleRepo {
    /// List all vehicles ordered by plate.
    pub async fn list(pool: &PgPool) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles ORDER BY plate");
        sqlx::query_as::<_, Vehicle>(&query).fetch_all(pool).await
    }

    /// Find a vehicle by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles WHERE id = $1");
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new vehicle, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVehicle) -> Result<Vehicle, sqlx::Error> {
        let query = format!(
            "INSERT INTO vehicles \
                (plate, brand, model, vehicle_kind, inspection_due, insurance_due, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(&input.plate)
            .bind(&input.brand)
            .bind(&input.model)
            .bind(&input.vehicle_kind)
            .bind(input.inspection_due)
            .bind(input.insurance_due)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Patch a vehicle.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVehicle,
    ) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!(
            "UPDATE vehicles SET \
                plate = COALESCE($2, plate), \
                brand = COALESCE($3, brand), \
                model = COALESCE($4, model), \
                vehicle_kind = COALESCE($5, vehicle_kind), \
                inspection_due = COALESCE($6, inspection_due), \
                insurance_due = COALESCE($7, insurance_due), \
                notes = COALESCE($8, notes), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .bind(&input.plate)
            .bind(&input.brand)
            .bind(&input.model)
            .bind(&input.vehicle_kind)
            .bind(input.inspection_due)
            .bind(input.insurance_due)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a vehicle.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
