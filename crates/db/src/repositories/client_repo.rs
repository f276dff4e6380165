//! Repository for the `clients` table.

use fleetops_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::{Client, CreateClient, UpdateClient};

/// Column list for client queries.
const COLUMNS: &str = "id, name, address, city, province, postal_code, vat_number, \
    notes, created_at, updated_at";

/// Provides CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// List all clients ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY name");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }

    /// Find a client by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new client, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients \
                (name, address, city, province, postal_code, vat_number, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.province)
            .bind(&input.postal_code)
            .bind(&input.vat_number)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Patch a client.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClient,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "UPDATE clients SET \
                name = COALESCE($2, name), \
                address = COALESCE($3, address), \
                city = COALESCE($4, city), \
                province = COALESCE($5, province), \
                postal_code = COALESCE($6, postal_code), \
                vat_number = COALESCE($7, vat_number), \
                notes = COALESCE($8, notes), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.province)
            .bind(&input.postal_code)
            .bind(&input.vat_number)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a client.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
