//! Trait definitions for external interactions
//!
//! These traits define the boundary between the audit engine and the PDF
//! library that supplies page text. Implementations live in other crates.

use crate::ExtractedPages;
use std::fmt;

/// Failure reported by a page source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSourceError {
    /// The document is password-protected and cannot be read
    Encrypted,

    /// The bytes could not be read as a document (malformed structure,
    /// unsupported features, ...)
    Unreadable(String),
}

impl fmt::Display for PageSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSourceError::Encrypted => write!(f, "document is encrypted"),
            PageSourceError::Unreadable(reason) => write!(f, "unreadable document: {}", reason),
        }
    }
}

impl std::error::Error for PageSourceError {}

/// Trait for turning PDF bytes into per-page text
///
/// Implemented by the infrastructure layer (`LopdfSource` in audita-extractor)
pub trait PageSource {
    /// Extract the text of every page, in document order
    ///
    /// Implementations report encryption either through
    /// [`PageSourceError::Encrypted`] or through [`ExtractedPages::encrypted`].
    fn load(&self, bytes: &[u8]) -> Result<ExtractedPages, PageSourceError>;
}

impl<T: PageSource + ?Sized> PageSource for &T {
    fn load(&self, bytes: &[u8]) -> Result<ExtractedPages, PageSourceError> {
        (**self).load(bytes)
    }
}
