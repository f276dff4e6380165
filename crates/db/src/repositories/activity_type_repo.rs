//! Repository for the `activity_types` table.

use fleetops_core::types::DbId;
use sqlx::PgPool;

use crate::models::activity_type::{ActivityType, CreateActivityType, UpdateActivityType};

/// Column list for activity type queries.
const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Provides CRUD operations for activity types.
pub struct ActivityTypeRepo;

impl ActivityTypeRepo {
    /// List all activity types ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<ActivityType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activity_types ORDER BY name");
        sqlx::query_as::<_, ActivityType>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find an activity type by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ActivityType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activity_types WHERE id = $1");
        sqlx::query_as::<_, ActivityType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new activity type, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateActivityType,
    ) -> Result<ActivityType, sqlx::Error> {
        let query = format!(
            "INSERT INTO activity_types (name, description) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActivityType>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Patch an activity type.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateActivityType,
    ) -> Result<Option<ActivityType>, sqlx::Error> {
        let query = format!(
            "UPDATE activity_types SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActivityType>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete an activity type.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM activity_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
