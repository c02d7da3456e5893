//! Audita Extractor
//!
//! Turns the text of a Colombian clinical-record PDF into an audit report:
//! who the patient is, which visits the record holds, and whether the record
//! carries the sections Resolución 1995 de 1999 requires.
//!
//! # Overview
//!
//! The engine never parses PDF structure itself. A [`PageSource`] supplies
//! per-page text ([`LopdfSource`] in production), and everything after that
//! is plain text scanning with compile-time patterns. Absent fields are
//! `None`, never errors; only input rejections and extraction failures
//! surface as [`AuditError`].
//!
//! # Architecture
//!
//! ```text
//! PDF bytes → PageSource → pages ─┬→ Field Locator → PatientProfile
//!                                 ├→ Segmenter → Annotator → Encounters
//!                                 └→ Compliance Checker → ComplianceReport
//! ```
//!
//! # Key Features
//!
//! - **Date Parser**: numeric and Spanish month-name dates
//! - **Field Locator**: label-anchored, window-bounded value lookup
//! - **Encounter Segmenter**: page-level state machine with
//!   nearest-preceding date resolution
//! - **Encounter Annotator**: companion, motive, diagnosis and age
//! - **Compliance Checker**: keyword table scan over the whole document
//! - **Memoization**: repeat audits of identical bytes are served from cache
//!
//! # Example Usage
//!
//! ```no_run
//! use audita_extractor::{AuditConfig, Auditor, LopdfSource};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("historia.pdf")?;
//! let auditor = Auditor::new(LopdfSource::new(), AuditConfig::default())?;
//!
//! let report = auditor.audit(&bytes)?;
//!
//! println!("Paciente: {}", report.profile.display_name());
//! for encounter in &report.encounters {
//!     println!("{} - {}", encounter.display_date(), encounter.display_diagnosis());
//! }
//! println!("Campos faltantes: {:?}", report.compliance.missing());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod annotator;
mod auditor;
mod compliance;
mod config;
mod date_parser;
mod error;
mod locator;
mod search;
mod segmenter;
mod source;
mod types;


pub use annotator::{age_on, annotate, find_companion};
pub use auditor::{analyze_pages, Auditor};
pub use compliance::{check_fields, FieldKeywords, DEFAULT_CHECKLIST};
pub use config::{
    AuditConfig, DEFAULT_CACHE_CAPACITY, DEFAULT_FIELD_WINDOW, DEFAULT_MAX_INPUT_BYTES,
    DEFAULT_PROFILE_PAGES, DEFAULT_SNIPPET_CHARS,
};
pub use date_parser::{find_date_fragments, parse_date};
pub use error::{AuditError, Rejection};
pub use locator::{
    find_birth_date, find_identification, find_labeled_field, find_labeled_field_with,
    find_patient_name, locate_profile,
};
pub use search::{find_occurrences, highlight, search_pages};
pub use segmenter::{segment, segment_document, sort_encounters};
pub use source::{InMemorySource, LopdfSource};
pub use types::{AuditReport, DateFragment, SearchHit, Segmentation};

pub use audita_domain::PageSource;
