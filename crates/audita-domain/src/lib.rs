//! Audita Domain Layer
//!
//! This crate contains the plain data model shared by the audit engine and its
//! callers. It defines the values an audit produces and the trait interface the
//! engine uses to obtain page text from a PDF.
//!
//! ## Key Concepts
//!
//! - **Patient Profile**: name, birth date and identification found in the
//!   document front matter
//! - **Encounter**: one clinical visit ("atención"), a contiguous run of pages
//!   anchored by a date and a clinical section header
//! - **Compliance Report**: presence of each field of the regulatory checklist
//!   (Resolución 1995 de 1999)
//! - **Page Source**: the external collaborator that turns PDF bytes into
//!   per-page text
//!
//! ## Architecture
//!
//! - Only `chrono` and `serde` as external dependencies
//! - No parsing logic: every value here is produced by `audita-extractor`
//! - Absent fields are `None`, never errors; display defaults live next to
//!   the types that use them

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compliance;
pub mod date;
pub mod document;
pub mod encounter;
pub mod patient;
pub mod traits;

// Re-exports for convenience
pub use compliance::{ComplianceField, ComplianceReport, FieldStatus};
pub use date::format_date;
pub use document::ExtractedPages;
pub use encounter::Encounter;
pub use patient::PatientProfile;
pub use traits::{PageSource, PageSourceError};

/// Re-exported so callers name the same date type the domain uses
pub use chrono::NaiveDate;
