//! Repository for the `activities` table and its resource assignments.
//!
//! The save path persists an activity and its assignment set as one
//! logical unit: every write that touches resources deletes the existing
//! assignments and inserts the new list inside a single transaction, so
//! a concurrent availability read never observes a half-replaced set.

use std::collections::HashMap;

use fleetops_core::status::{canonicalize, ActivityStatus};
use fleetops_core::types::{DbId, Timestamp};
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::activity::{
    Activity, ActivityFilter, ActivityWithResources, CreateActivity, ResourceAssignment,
    ResourceInput, UpdateActivity,
};

/// Column list for activity queries.
const COLUMNS: &str = "id, description, starts_at, ends_at, status, \
    client_id, site_id, activity_type_id, created_at, updated_at";

/// `a.`-qualified column list for the joined listing query.
const QUALIFIED_COLUMNS: &str = "a.id, a.description, a.starts_at, a.ends_at, a.status, \
    a.client_id, a.site_id, a.activity_type_id, a.created_at, a.updated_at";

/// Column list for resource assignment queries.
const RESOURCE_COLUMNS: &str =
    "id, activity_id, driver_id, vehicle_id, starts_at, ends_at, created_at";

/// Joins used by the listing query so free-text search can reach the
/// associated client and site fields.
const LIST_JOINS: &str = "FROM activities a \
    LEFT JOIN clients c ON c.id = a.client_id \
    LEFT JOIN sites s ON s.id = a.site_id";

/// Provides persistence for activities and their resource assignments.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Insert a new activity together with its resource list.
    ///
    /// Runs in a transaction: a resource referencing an unknown driver or
    /// vehicle fails the whole operation with no partial state left.
    pub async fn create(
        pool: &PgPool,
        input: &CreateActivity,
    ) -> Result<ActivityWithResources, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let status = canonicalize(input.status.as_deref().unwrap_or("planned"));
        let query = format!(
            "INSERT INTO activities \
                (description, starts_at, ends_at, status, client_id, site_id, activity_type_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        let activity = sqlx::query_as::<_, Activity>(&query)
            .bind(&input.description)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .bind(&status)
            .bind(input.client_id)
            .bind(input.site_id)
            .bind(input.activity_type_id)
            .fetch_one(&mut *tx)
            .await?;

        let resources = Self::insert_resources(&mut tx, activity.id, &input.resources).await?;

        tx.commit().await?;
        Ok(ActivityWithResources { activity, resources })
    }

    /// Patch an activity; when `resources` is present, replace the whole
    /// assignment set (delete all + insert), never merge.
    ///
    /// Returns `None` when the activity does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateActivity,
    ) -> Result<Option<ActivityWithResources>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let status = input.status.as_deref().map(canonicalize);
        let query = format!(
            "UPDATE activities SET \
                description = COALESCE($2, description), \
                starts_at = COALESCE($3, starts_at), \
                ends_at = COALESCE($4, ends_at), \
                status = COALESCE($5, status), \
                client_id = COALESCE($6, client_id), \
                site_id = COALESCE($7, site_id), \
                activity_type_id = COALESCE($8, activity_type_id), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let activity = sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .bind(&status)
            .bind(input.client_id)
            .bind(input.site_id)
            .bind(input.activity_type_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(activity) = activity else {
            return Ok(None);
        };

        let resources = match &input.resources {
            Some(list) => {
                sqlx::query("DELETE FROM resource_assignments WHERE activity_id = $1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;
                Self::insert_resources(&mut tx, id, list).await?
            }
            None => Self::assignments_in_tx(&mut tx, id).await?,
        };

        tx.commit().await?;
        Ok(Some(ActivityWithResources { activity, resources }))
    }

    /// Find an activity by ID with its assignments attached.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ActivityWithResources>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities WHERE id = $1");
        let activity = sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        let Some(activity) = activity else {
            return Ok(None);
        };

        let query = format!(
            "SELECT {RESOURCE_COLUMNS} FROM resource_assignments \
             WHERE activity_id = $1 ORDER BY id"
        );
        let resources = sqlx::query_as::<_, ResourceAssignment>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;

        Ok(Some(ActivityWithResources { activity, resources }))
    }

    /// List activities matching the filter, newest start first.
    ///
    /// The date range uses inclusive overlap (`starts_at <= range_end AND
    /// COALESCE(ends_at, starts_at) >= range_start`), so a multi-day
    /// activity appears in every day's listing it touches.
    ///
    /// Returns the page items (with assignments attached) and the total
    /// row count for the filter.
    pub async fn list_by_filters(
        pool: &PgPool,
        filter: &ActivityFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<ActivityWithResources>, i64), sqlx::Error> {
        let (where_clause, bind_values, bind_idx) = build_activity_filter(filter);

        let query = format!(
            "SELECT {QUALIFIED_COLUMNS} {LIST_JOINS} {where_clause} \
             ORDER BY a.starts_at DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );
        let q = bind_filter_values(sqlx::query_as::<_, Activity>(&query), &bind_values);
        let activities = q.bind(limit).bind(offset).fetch_all(pool).await?;

        let count_query = format!("SELECT COUNT(*)::BIGINT {LIST_JOINS} {where_clause}");
        let q = bind_filter_values_scalar(sqlx::query_scalar::<_, i64>(&count_query), &bind_values);
        let total = q.fetch_one(pool).await?;

        let items = Self::attach_resources(pool, activities).await?;
        Ok((items, total))
    }

    /// Delete an activity; assignments go with it via `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM activities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -- internals -----------------------------------------------------------

    /// Insert the resource list for an activity inside the caller's
    /// transaction, returning the created rows in input order.
    async fn insert_resources(
        tx: &mut Transaction<'_, Postgres>,
        activity_id: DbId,
        resources: &[ResourceInput],
    ) -> Result<Vec<ResourceAssignment>, sqlx::Error> {
        let query = format!(
            "INSERT INTO resource_assignments \
                (activity_id, driver_id, vehicle_id, starts_at, ends_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {RESOURCE_COLUMNS}"
        );

        let mut created = Vec::with_capacity(resources.len());
        for resource in resources {
            let row = sqlx::query_as::<_, ResourceAssignment>(&query)
                .bind(activity_id)
                .bind(resource.driver_id)
                .bind(resource.vehicle_id)
                .bind(resource.starts_at)
                .bind(resource.ends_at)
                .fetch_one(&mut **tx)
                .await?;
            created.push(row);
        }
        Ok(created)
    }

    /// Fetch the current assignments for an activity inside a transaction.
    async fn assignments_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        activity_id: DbId,
    ) -> Result<Vec<ResourceAssignment>, sqlx::Error> {
        let query = format!(
            "SELECT {RESOURCE_COLUMNS} FROM resource_assignments \
             WHERE activity_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, ResourceAssignment>(&query)
            .bind(activity_id)
            .fetch_all(&mut **tx)
            .await
    }

    /// Attach assignments to a page of activities with one query.
    async fn attach_resources(
        pool: &PgPool,
        activities: Vec<Activity>,
    ) -> Result<Vec<ActivityWithResources>, sqlx::Error> {
        if activities.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = activities.iter().map(|a| a.id).collect();
        let query = format!(
            "SELECT {RESOURCE_COLUMNS} FROM resource_assignments \
             WHERE activity_id = ANY($1) ORDER BY activity_id, id"
        );
        let rows = sqlx::query_as::<_, ResourceAssignment>(&query)
            .bind(&ids)
            .fetch_all(pool)
            .await?;

        let mut by_activity: HashMap<DbId, Vec<ResourceAssignment>> = HashMap::new();
        for row in rows {
            by_activity.entry(row.activity_id).or_default().push(row);
        }

        Ok(activities
            .into_iter()
            .map(|activity| {
                let resources = by_activity.remove(&activity.id).unwrap_or_default();
                ActivityWithResources { activity, resources }
            })
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Internal helpers for dynamic query building
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built activity queries.
enum BindValue {
    BigInt(DbId),
    Text(String),
    TextArray(Vec<String>),
    Timestamp(Timestamp),
}

/// Build a WHERE clause and bind values from the listing filter.
///
/// Returns `(where_clause, bind_values, next_bind_index)`. The
/// `where_clause` is empty if no filters are active, or starts with `WHERE `.
fn build_activity_filter(filter: &ActivityFilter) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    // Inclusive overlap: both halves of the rule are applied independently
    // so open ranges (only one bound given) still work.
    if let Some(range_end) = filter.range_end {
        conditions.push(format!("a.starts_at <= ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Timestamp(range_end));
    }

    if let Some(range_start) = filter.range_start {
        conditions.push(format!("COALESCE(a.ends_at, a.starts_at) >= ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Timestamp(range_start));
    }

    if let Some(client_id) = filter.client_id {
        conditions.push(format!("a.client_id = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::BigInt(client_id));
    }

    if let Some(site_id) = filter.site_id {
        conditions.push(format!("a.site_id = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::BigInt(site_id));
    }

    if let Some(activity_type_id) = filter.activity_type_id {
        conditions.push(format!("a.activity_type_id = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::BigInt(activity_type_id));
    }

    if let Some(ref status) = filter.status {
        // A recognized status matches every spelling of its variant, so
        // `?status=cancelled` also finds migrated `Annullata` rows.
        match ActivityStatus::parse(status) {
            Some(parsed) => {
                conditions.push(format!("BTRIM(LOWER(a.status)) = ANY(${bind_idx})"));
                bind_idx += 1;
                bind_values.push(BindValue::TextArray(
                    parsed.spellings().iter().map(|s| s.to_string()).collect(),
                ));
            }
            None => {
                conditions.push(format!("BTRIM(LOWER(a.status)) = ${bind_idx}"));
                bind_idx += 1;
                bind_values.push(BindValue::Text(status.trim().to_lowercase()));
            }
        }
    }

    if let Some(ref search) = filter.search {
        // One placeholder reused across every searched column.
        conditions.push(format!(
            "(a.description ILIKE ${bind_idx} \
              OR c.name ILIKE ${bind_idx} OR c.address ILIKE ${bind_idx} \
              OR c.city ILIKE ${bind_idx} OR c.province ILIKE ${bind_idx} \
              OR c.postal_code ILIKE ${bind_idx} OR c.notes ILIKE ${bind_idx} \
              OR s.name ILIKE ${bind_idx} OR s.address ILIKE ${bind_idx} \
              OR s.city ILIKE ${bind_idx} OR s.province ILIKE ${bind_idx} \
              OR s.postal_code ILIKE ${bind_idx} OR s.notes ILIKE ${bind_idx})"
        ));
        bind_idx += 1;
        bind_values.push(BindValue::Text(format!("%{search}%")));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
fn bind_filter_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, Postgres, O, sqlx::postgres::PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, Postgres, O, sqlx::postgres::PgArguments> {
    for val in bind_values {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::TextArray(v) => q = q.bind(v.as_slice()),
            BindValue::Timestamp(v) => q = q.bind(*v),
        }
    }
    q
}

/// Bind a slice of `BindValue` to a sqlx `QueryScalar`.
fn bind_filter_values_scalar<'q>(
    mut q: sqlx::query::QueryScalar<'q, Postgres, i64, sqlx::postgres::PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryScalar<'q, Postgres, i64, sqlx::postgres::PgArguments> {
    for val in bind_values {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::TextArray(v) => q = q.bind(v.as_slice()),
            BindValue::Timestamp(v) => q = q.bind(*v),
        }
    }
    q
}
