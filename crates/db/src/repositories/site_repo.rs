//! Repository for the `sites` table.

use fleetops_core::types::DbId;
use sqlx::PgPool;

use crate::models::site::{CreateSite, Site, UpdateSite};

/// Column list for site queries.
const COLUMNS: &str = "id, client_id, name, address, city, province, postal_code, \
    notes, created_at, updated_at";

/// Provides CRUD operations for job sites.
pub struct SiteRepo;

impl SiteRepo {
    /// List all sites for a client, ordered by name.
    pub async fn list_by_client(pool: &PgPool, client_id: DbId) -> Result<Vec<Site>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sites WHERE client_id = $1 ORDER BY name");
        sqlx::query_as::<_, Site>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Find a site by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Site>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sites WHERE id = $1");
        sqlx::query_as::<_, Site>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new site, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSite) -> Result<Site, sqlx::Error> {
        let query = format!(
            "INSERT INTO sites \
                (client_id, name, address, city, province, postal_code, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Site>(&query)
            .bind(input.client_id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.province)
            .bind(&input.postal_code)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Patch a site.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSite,
    ) -> Result<Option<Site>, sqlx::Error> {
        let query = format!(
            "UPDATE sites SET \
                name = COALESCE($2, name), \
                address = COALESCE($3, address), \
                city = COALESCE($4, city), \
                province = COALESCE($5, province), \
                postal_code = COALESCE($6, postal_code), \
                notes = COALESCE($7, notes), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Site>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.province)
            .bind(&input.postal_code)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a site.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sites WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
