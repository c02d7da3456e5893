//! Patient profile - identity data found in the document front matter

use crate::date::format_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display value for a profile field that could not be located
pub const UNKNOWN: &str = "unknown";

/// Patient identity extracted once per document
///
/// Built only from the first pages of the record. Every field may be absent;
/// absence is expected data, not a fault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    /// Patient full name
    pub name: Option<String>,

    /// Date of birth
    pub birth_date: Option<NaiveDate>,

    /// Identification number (cédula, tarjeta de identidad, ...)
    pub identification: Option<String>,
}

impl PatientProfile {
    /// Create a new profile
    pub fn new(
        name: Option<String>,
        birth_date: Option<NaiveDate>,
        identification: Option<String>,
    ) -> Self {
        Self {
            name,
            birth_date,
            identification,
        }
    }

    /// Name for display, `unknown` when absent
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN)
    }

    /// Birth date for display, `unknown` when absent
    pub fn display_birth_date(&self) -> String {
        format_date(self.birth_date, UNKNOWN)
    }

    /// Identification for display, `unknown` when absent
    pub fn display_identification(&self) -> &str {
        self.identification.as_deref().unwrap_or(UNKNOWN)
    }

    /// True when none of the fields could be located
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.birth_date.is_none() && self.identification.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_display() {
        let profile = PatientProfile::default();
        assert!(profile.is_empty());
        assert_eq!(profile.display_name(), "unknown");
        assert_eq!(profile.display_birth_date(), "unknown");
        assert_eq!(profile.display_identification(), "unknown");
    }

    #[test]
    fn test_known_display() {
        let profile = PatientProfile::new(
            Some("Juan Pérez".to_string()),
            NaiveDate::from_ymd_opt(1985, 4, 10),
            Some("1.234.567".to_string()),
        );
        assert!(!profile.is_empty());
        assert_eq!(profile.display_name(), "Juan Pérez");
        assert_eq!(profile.display_birth_date(), "10/04/1985");
        assert_eq!(profile.display_identification(), "1.234.567");
    }
}
