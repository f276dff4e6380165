//! Repository for the `trade_documents` table.
//!
//! Rows are populated by the external ERP sync; the matcher only reads
//! them. `find_by_client_and_date_window` is the candidate-pool query:
//! it filters by client only (site relevance is a ranking concern, not a
//! filter, to keep recall high) and compares against the delivery date
//! with an issuance-date fallback.

use chrono::NaiveDate;
use fleetops_core::types::DbId;
use sqlx::PgPool;

use crate::models::trade_document::{CreateTradeDocument, TradeDocument};

/// Column list for trade document queries.
const COLUMNS: &str = "id, external_ref, document_number, client_id, site_id, \
    issued_on, delivered_on, total_amount, created_at, updated_at";

/// Read/insert operations for ERP trade documents.
pub struct TradeDocumentRepo;

impl TradeDocumentRepo {
    /// List documents, newest issuance first.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TradeDocument>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trade_documents \
             ORDER BY issued_on DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, TradeDocument>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Find a document by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TradeDocument>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trade_documents WHERE id = $1");
        sqlx::query_as::<_, TradeDocument>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Candidate pool for the document matcher: all documents of a client
    /// whose comparison date (delivery date, falling back to issuance
    /// date) lies inside `[from, to]` inclusive.
    pub async fn find_by_client_and_date_window(
        pool: &PgPool,
        client_id: DbId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<TradeDocument>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trade_documents \
             WHERE client_id = $1 \
               AND COALESCE(delivered_on, issued_on) BETWEEN $2 AND $3 \
             ORDER BY COALESCE(delivered_on, issued_on), id"
        );
        sqlx::query_as::<_, TradeDocument>(&query)
            .bind(client_id)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }

    /// Insert a document (used by sync tooling and tests).
    pub async fn create(
        pool: &PgPool,
        input: &CreateTradeDocument,
    ) -> Result<TradeDocument, sqlx::Error> {
        let query = format!(
            "INSERT INTO trade_documents \
                (external_ref, document_number, client_id, site_id, issued_on, \
                 delivered_on, total_amount) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TradeDocument>(&query)
            .bind(&input.external_ref)
            .bind(&input.document_number)
            .bind(input.client_id)
            .bind(input.site_id)
            .bind(input.issued_on)
            .bind(input.delivered_on)
            .bind(input.total_amount)
            .fetch_one(pool)
            .await
    }
}
