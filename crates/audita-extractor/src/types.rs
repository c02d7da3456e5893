//! Request and result types for audits

use audita_domain::{ComplianceReport, Encounter, PatientProfile};
use serde::{Deserialize, Serialize};

/// A substring suspected to encode a date, with its byte offset in the
/// scanned text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFragment {
    /// Matched text
    pub text: String,

    /// Byte offset of the match
    pub offset: usize,
}

impl DateFragment {
    /// Byte offset just past the match
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Pages of a document split into front matter and encounters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    /// Pages (1-based) not attached to any encounter
    pub header_pages: Vec<usize>,

    /// Encounters in document order
    pub encounters: Vec<Encounter>,
}

/// One occurrence of a search term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Page number (1-based)
    pub page: usize,

    /// Byte offset of the match within the page text
    pub start: usize,

    /// Byte offset just past the match
    pub end: usize,

    /// Surrounding text on a single line
    pub snippet: String,
}

/// Complete result of auditing one document
///
/// Produced once per distinct input and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Hex SHA-256 digest of the input bytes
    pub digest: String,

    /// Extracted page texts in document order
    pub pages: Vec<String>,

    /// Patient identity from the front matter
    pub profile: PatientProfile,

    /// Annotated encounters, most recent first
    pub encounters: Vec<Encounter>,

    /// Regulatory checklist result
    pub compliance: ComplianceReport,
}

impl AuditReport {
    /// Number of pages in the document
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
