//! Activity status values.
//!
//! Statuses are persisted as free-form TEXT because rows migrated from
//! the legacy back-office carry Italian spellings. Parsing maps both the
//! canonical values and the known legacy ones onto [`ActivityStatus`];
//! unknown strings are kept as-is and treated as active (an activity we
//! cannot classify must still block its resources).

use serde::{Deserialize, Serialize};

/// Canonical lifecycle states of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    Planned,
    InProgress,
    Completed,
    Cancelled,
}

/// Every spelling that counts as "cancelled" when computing the busy set.
///
/// Compared trimmed and lowercase, matching [`ActivityStatus::parse`].
/// `annullata` is the legacy Italian value.
pub const CANCELLED_STATUSES: &[&str] = &["cancelled", "annullata"];

impl ActivityStatus {
    /// Parse a raw status string, accepting canonical and legacy values.
    ///
    /// Returns `None` for unknown strings so callers can preserve them.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "planned" | "pianificata" => Some(Self::Planned),
            "in_progress" | "in corso" | "in_corso" => Some(Self::InProgress),
            "completed" | "completata" => Some(Self::Completed),
            "cancelled" | "annullata" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Canonical lowercase string stored by new writes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Every known spelling of this status, lowercase: the canonical
    /// value plus the legacy ones [`parse`](Self::parse) accepts. SQL
    /// filters match against the full set so migrated rows are found
    /// by their canonical filter value.
    pub fn spellings(&self) -> &'static [&'static str] {
        match self {
            Self::Planned => &["planned", "pianificata"],
            Self::InProgress => &["in_progress", "in corso", "in_corso"],
            Self::Completed => &["completed", "completata"],
            Self::Cancelled => CANCELLED_STATUSES,
        }
    }
}

/// Whether a raw status string means the activity is cancelled.
pub fn is_cancelled(raw: &str) -> bool {
    ActivityStatus::parse(raw) == Some(ActivityStatus::Cancelled)
}

/// Normalize a raw status to its canonical spelling, preserving unknown
/// legacy values untouched.
pub fn canonicalize(raw: &str) -> String {
    match ActivityStatus::parse(raw) {
        Some(status) => status.as_str().to_string(),
        None => raw.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_values() {
        assert_eq!(ActivityStatus::parse("planned"), Some(ActivityStatus::Planned));
        assert_eq!(
            ActivityStatus::parse("in_progress"),
            Some(ActivityStatus::InProgress)
        );
        assert_eq!(
            ActivityStatus::parse("completed"),
            Some(ActivityStatus::Completed)
        );
        assert_eq!(
            ActivityStatus::parse("cancelled"),
            Some(ActivityStatus::Cancelled)
        );
    }

    #[test]
    fn parses_legacy_italian_values() {
        assert_eq!(
            ActivityStatus::parse("Annullata"),
            Some(ActivityStatus::Cancelled)
        );
        assert_eq!(
            ActivityStatus::parse("pianificata"),
            Some(ActivityStatus::Planned)
        );
        assert_eq!(
            ActivityStatus::parse("in corso"),
            Some(ActivityStatus::InProgress)
        );
        assert_eq!(
            ActivityStatus::parse("COMPLETATA"),
            Some(ActivityStatus::Completed)
        );
    }

    #[test]
    fn unknown_status_is_not_cancelled() {
        assert_eq!(ActivityStatus::parse("urgente"), None);
        assert!(!is_cancelled("urgente"));
    }

    #[test]
    fn cancelled_detection_covers_legacy_spelling() {
        assert!(is_cancelled("cancelled"));
        assert!(is_cancelled("annullata"));
        assert!(is_cancelled(" ANNULLATA "));
        assert!(!is_cancelled("planned"));
    }

    #[test]
    fn every_spelling_parses_back_to_its_variant() {
        for status in [
            ActivityStatus::Planned,
            ActivityStatus::InProgress,
            ActivityStatus::Completed,
            ActivityStatus::Cancelled,
        ] {
            for spelling in status.spellings() {
                assert_eq!(ActivityStatus::parse(spelling), Some(status));
            }
        }
        assert!(ActivityStatus::Cancelled.spellings().contains(&"annullata"));
    }

    #[test]
    fn canonicalize_maps_legacy_and_keeps_unknown() {
        assert_eq!(canonicalize("Annullata"), "cancelled");
        assert_eq!(canonicalize("in corso"), "in_progress");
        assert_eq!(canonicalize(" urgente "), "urgente");
    }
}
