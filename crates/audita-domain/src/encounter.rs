//! Encounter module - one clinical visit ("atención") within a record

use crate::date::format_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Display value for a companion, motive or diagnosis that was not found
pub const UNSPECIFIED: &str = "unspecified";

/// Display value for an age that cannot be computed
pub const NOT_AVAILABLE: &str = "not available";

/// A clinical encounter
///
/// The segmenter creates encounters with their date, page span and content;
/// the annotator fills the derived fields. Encounters are not modified after
/// annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    /// Encounter date, if one could be resolved
    pub date: Option<NaiveDate>,

    /// First page of the encounter (1-based)
    pub first_page: usize,

    /// Last page of the encounter (1-based, inclusive)
    pub last_page: usize,

    /// Raw text of the encounter pages, joined by newlines
    pub content: String,

    /// Patient age in whole years on the encounter date
    pub age: Option<u32>,

    /// Person accompanying the patient
    pub companion: Option<String>,

    /// Stated reason for the visit
    pub motive: Option<String>,

    /// Stated diagnosis
    pub diagnosis: Option<String>,
}

impl Encounter {
    /// Create an unannotated encounter
    pub fn new(date: Option<NaiveDate>, first_page: usize, last_page: usize, content: String) -> Self {
        Self {
            date,
            first_page,
            last_page,
            content,
            age: None,
            companion: None,
            motive: None,
            diagnosis: None,
        }
    }

    /// Number of pages spanned by the encounter
    pub fn page_count(&self) -> usize {
        self.last_page + 1 - self.first_page
    }

    /// Date for display, `unknown` when absent
    pub fn display_date(&self) -> String {
        format_date(self.date, crate::patient::UNKNOWN)
    }

    /// Age for display, `not available` when absent
    pub fn display_age(&self) -> String {
        self.age
            .map(|a| a.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// Companion for display
    pub fn display_companion(&self) -> &str {
        self.companion.as_deref().unwrap_or(UNSPECIFIED)
    }

    /// Motive for display
    pub fn display_motive(&self) -> &str {
        self.motive.as_deref().unwrap_or(UNSPECIFIED)
    }

    /// Diagnosis for display
    pub fn display_diagnosis(&self) -> &str {
        self.diagnosis.as_deref().unwrap_or(UNSPECIFIED)
    }

    /// Presentation order: most recent first, unknown dates last
    ///
    /// Used with a stable sort so encounters with equal or unknown dates keep
    /// their document order.
    pub fn cmp_reverse_chronological(&self, other: &Self) -> Ordering {
        match (self.date, other.date) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encounter_on(date: Option<NaiveDate>) -> Encounter {
        Encounter::new(date, 1, 1, String::new())
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let encounter = encounter_on(None);
        assert_eq!(encounter.display_date(), "unknown");
        assert_eq!(encounter.display_age(), "not available");
        assert_eq!(encounter.display_companion(), "unspecified");
        assert_eq!(encounter.display_motive(), "unspecified");
        assert_eq!(encounter.display_diagnosis(), "unspecified");
    }

    #[test]
    fn test_reverse_chronological_order() {
        let newer = encounter_on(NaiveDate::from_ymd_opt(2021, 1, 10));
        let older = encounter_on(NaiveDate::from_ymd_opt(2019, 6, 1));
        let unknown = encounter_on(None);

        assert_eq!(newer.cmp_reverse_chronological(&older), Ordering::Less);
        assert_eq!(older.cmp_reverse_chronological(&unknown), Ordering::Less);
        assert_eq!(unknown.cmp_reverse_chronological(&newer), Ordering::Greater);
        assert_eq!(unknown.cmp_reverse_chronological(&unknown), Ordering::Equal);
    }

    #[test]
    fn test_page_count() {
        let encounter = Encounter::new(None, 2, 4, String::new());
        assert_eq!(encounter.page_count(), 3);
    }
}
