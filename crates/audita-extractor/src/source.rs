//! Page sources: PDF text extraction and an in-memory double

use audita_domain::{ExtractedPages, PageSource, PageSourceError};
use lopdf::Document;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Page source backed by `lopdf`
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfSource;

impl LopdfSource {
    /// Create a new lopdf page source
    pub fn new() -> Self {
        Self
    }
}

impl PageSource for LopdfSource {
    fn load(&self, bytes: &[u8]) -> Result<ExtractedPages, PageSourceError> {
        let doc = Document::load_mem(bytes).map_err(|e| {
            let reason = e.to_string();
            let lowered = reason.to_lowercase();
            // lopdf may refuse encrypted files at load time
            if lowered.contains("encrypt") || lowered.contains("password") {
                PageSourceError::Encrypted
            } else {
                PageSourceError::Unreadable(reason)
            }
        })?;

        if doc.is_encrypted() {
            return Err(PageSourceError::Encrypted);
        }

        let page_numbers: Vec<u32> = doc.get_pages().into_keys().collect();
        debug!("PDF loaded: {} pages", page_numbers.len());

        let pages = page_numbers
            .into_iter()
            .map(|number| {
                doc.extract_text(&[number])
                    .map_err(|e| PageSourceError::Unreadable(format!("page {}: {}", number, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ExtractedPages::new(pages))
    }
}

/// Page source returning pre-configured pages without reading the bytes
///
/// Counts its calls, which makes memoization observable in tests.
///
/// # Examples
///
/// ```
/// use audita_extractor::InMemorySource;
/// use audita_domain::PageSource;
///
/// let source = InMemorySource::new(vec!["página uno".to_string()]);
/// let pages = source.load(b"%PDF-1.7").unwrap();
/// assert_eq!(pages.page_count(), 1);
/// assert_eq!(source.call_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct InMemorySource {
    result: Result<ExtractedPages, PageSourceError>,
    call_count: Arc<AtomicUsize>,
}

impl InMemorySource {
    /// Return `pages` for every input
    pub fn new(pages: Vec<String>) -> Self {
        Self::with_result(Ok(ExtractedPages::new(pages)))
    }

    /// Return a fixed result, pages or error, for every input
    pub fn with_result(result: Result<ExtractedPages, PageSourceError>) -> Self {
        Self {
            result,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times `load` was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl PageSource for InMemorySource {
    fn load(&self, _bytes: &[u8]) -> Result<ExtractedPages, PageSourceError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}
