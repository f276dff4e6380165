//! Repository for the `drivers` table.

use fleetops_core::types::DbId;
use sqlx::PgPool;

use crate::models::driver::{CreateDriver, Driver, UpdateDriver};

/// Column list for driver queries.
const COLUMNS: &str = "id, first_name, last_name, license_number, license_expiry, \
    phone, notes, created_at, updated_at";

/// Provides CRUD operations and directory reads for drivers.
pub struct DriverRepo;

impl DriverRepo {
    /// List all drivers ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Driver>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drivers ORDER BY last_name, first_name");
        sqlx::query_as::<_, Driver>(&query).fetch_all(pool).await
    }

    /// Find a driver by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Driver>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drivers WHERE id = $1");
        sqlx::query_as::<_, Driver>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new driver, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDriver) -> Result<Driver, sqlx::Error> {
        let query = format!(
            "INSERT INTO drivers \
                (first_name, last_name, license_number, license_expiry, phone, notes) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Driver>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.license_number)
            .bind(input.license_expiry)
            .bind(&input.phone)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Patch a driver.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDriver,
    ) -> Result<Option<Driver>, sqlx::Error> {
        let query = format!(
            "UPDATE drivers SET \
                first_name = COALESCE($2, first_name), \
                last_name = COALESCE($3, last_name), \
                license_number = COALESCE($4, license_number), \
                license_expiry = COALESCE($5, license_expiry), \
                phone = COALESCE($6, phone), \
                notes = COALESCE($7, notes), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Driver>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.license_number)
            .bind(input.license_expiry)
            .bind(&input.phone)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a driver.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM drivers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
