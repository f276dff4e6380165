//! ERP-synchronized trade documents (delivery notes, invoices).
//!
//! Populated by the external synchronization job and read-only to the
//! scheduling core; the create DTO exists for sync tooling and tests.

use chrono::NaiveDate;
use fleetops_core::matching::MatchCandidate;
use fleetops_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `trade_documents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TradeDocument {
    pub id: DbId,
    /// Identifier of the document in the upstream ERP.
    pub external_ref: Option<String>,
    pub document_number: Option<String>,
    pub client_id: DbId,
    pub site_id: Option<DbId>,
    pub issued_on: NaiveDate,
    /// Absent for many legacy records; matching falls back to `issued_on`.
    pub delivered_on: Option<NaiveDate>,
    pub total_amount: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MatchCandidate for TradeDocument {
    fn comparison_date(&self) -> NaiveDate {
        self.delivered_on.unwrap_or(self.issued_on)
    }

    fn total_amount(&self) -> f64 {
        self.total_amount
    }
}

/// DTO for inserting a trade document.
#[derive(Debug, Deserialize)]
pub struct CreateTradeDocument {
    pub external_ref: Option<String>,
    pub document_number: Option<String>,
    pub client_id: DbId,
    pub site_id: Option<DbId>,
    pub issued_on: NaiveDate,
    pub delivered_on: Option<NaiveDate>,
    #[serde(default)]
    pub total_amount: f64,
}
