//! Extracted page text handed over by a page source

use serde::{Deserialize, Serialize};

/// Text of a PDF document, one entry per physical page in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedPages {
    /// Page texts
    pub pages: Vec<String>,

    /// Whether the document declares encryption
    pub encrypted: bool,
}

impl ExtractedPages {
    /// Create an unencrypted page set
    pub fn new(pages: Vec<String>) -> Self {
        Self {
            pages,
            encrypted: false,
        }
    }

    /// Number of pages
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// True when no page carries any non-whitespace text (image-only scans)
    pub fn is_blank(&self) -> bool {
        self.pages.iter().all(|p| p.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(ExtractedPages::default().is_blank());
        assert!(ExtractedPages::new(vec![" \n".to_string(), String::new()]).is_blank());
        assert!(!ExtractedPages::new(vec![String::new(), "texto".to_string()]).is_blank());
    }

    #[test]
    fn test_page_count() {
        let pages = ExtractedPages::new(vec!["uno".to_string(), "dos".to_string()]);
        assert_eq!(pages.page_count(), 2);
        assert!(!pages.encrypted);
    }
}
