//! Trade document suggestion ranking.
//!
//! Given an activity being drafted (client + target date), candidate
//! documents pulled for that client within a ±7-day window are ranked by
//! date proximity. Two scoring paths exist on purpose and are not fully
//! consistent with each other:
//!
//! - the **priority tuple** `(priority, days_difference)` governs sort
//!   order: exact-date matches (priority 0) always come first, every
//!   non-exact match is pushed past them by a +100 offset;
//! - the **match score** is a display-only figure combining date
//!   proximity with document-value bonus tiers. It never influences
//!   ordering.
//!
//! Unifying the two would change which suggestions users see first, so
//! both are preserved exactly.

use chrono::NaiveDate;
use serde::Serialize;

/// Candidate pool window around the target date, in days, on each side.
pub const SUGGESTION_WINDOW_DAYS: i64 = 7;

/// Maximum number of suggestions returned to the caller.
pub const MAX_SUGGESTIONS: usize = 10;

/// Sort-priority offset applied to every non-exact date match.
///
/// Within a ±7-day window the largest possible `days_difference` is 7,
/// so `diff + 100` keeps every non-exact match behind every exact one.
pub const NON_EXACT_PRIORITY_OFFSET: i64 = 100;

/// A document that can be matched against an activity draft.
pub trait MatchCandidate {
    /// Date compared against the target: delivery date when present,
    /// issuance date otherwise. Many legacy records have no delivery
    /// date, so the fallback must be preserved.
    fn comparison_date(&self) -> NaiveDate;

    /// Monetary total, used only by the display score bonus tiers.
    fn total_amount(&self) -> f64;
}

/// A ranked suggestion wrapping the original document.
#[derive(Debug, Clone, Serialize)]
pub struct RankedMatch<T> {
    pub document: T,
    pub days_difference: i64,
    pub is_exact_date: bool,
    pub match_score: i64,
}

/// Absolute distance between the target date and a comparison date,
/// in whole days.
pub fn days_difference(target: NaiveDate, comparison: NaiveDate) -> i64 {
    (comparison - target).num_days().abs()
}

/// Sort priority: `0` for an exact-date match, `diff + 100` otherwise.
pub fn priority(days_difference: i64) -> i64 {
    if days_difference == 0 {
        0
    } else {
        days_difference + NON_EXACT_PRIORITY_OFFSET
    }
}

/// Display-only match score.
///
/// Base 100; +50 for an exact date, otherwise −5 per day of distance;
/// +20 when the document total exceeds 1000 and +10 when it exceeds 500.
/// The bonus tiers are additive, so a total over 1000 collects both.
pub fn match_score(days_difference: i64, total_amount: f64) -> i64 {
    let mut score: i64 = 100;

    if days_difference == 0 {
        score += 50;
    } else {
        score -= 5 * days_difference;
    }

    if total_amount > 1000.0 {
        score += 20;
    }
    if total_amount > 500.0 {
        score += 10;
    }

    score
}

/// Rank candidates against the target date.
///
/// Sorts ascending by `(priority, days_difference)` and truncates to
/// [`MAX_SUGGESTIONS`]. The sort is stable, so candidates at the same
/// distance keep the order the repository returned them in.
pub fn rank<T: MatchCandidate>(target: NaiveDate, candidates: Vec<T>) -> Vec<RankedMatch<T>> {
    let mut ranked: Vec<RankedMatch<T>> = candidates
        .into_iter()
        .map(|document| {
            let diff = days_difference(target, document.comparison_date());
            let score = match_score(diff, document.total_amount());
            RankedMatch {
                match_score: score,
                days_difference: diff,
                is_exact_date: diff == 0,
                document,
            }
        })
        .collect();

    ranked.sort_by_key(|m| (priority(m.days_difference), m.days_difference));
    ranked.truncate(MAX_SUGGESTIONS);
    ranked
}
