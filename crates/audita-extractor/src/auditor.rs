//! Core Auditor implementation

use crate::annotator::annotate;
use crate::compliance::{check_fields, DEFAULT_CHECKLIST};
use crate::config::AuditConfig;
use crate::error::{AuditError, Rejection};
use crate::locator::locate_profile;
use crate::segmenter::{segment_document, sort_encounters};
use crate::types::AuditReport;
use audita_domain::{PageSource, PageSourceError};
use sha2::{Digest, Sha256};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// Leading bytes every PDF file starts with
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Audit results memoized by content digest, oldest evicted first
#[derive(Debug, Default)]
struct AuditCache {
    entries: HashMap<String, Arc<AuditReport>>,
    order: VecDeque<String>,
}

impl AuditCache {
    fn get(&self, digest: &str) -> Option<Arc<AuditReport>> {
        self.entries.get(digest).cloned()
    }

    fn insert(&mut self, report: Arc<AuditReport>, capacity: usize) {
        if capacity == 0 || self.entries.contains_key(&report.digest) {
            return;
        }
        while self.order.len() >= capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        self.order.push_back(report.digest.clone());
        self.entries.insert(report.digest.clone(), report);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// The Auditor turns clinical-record PDFs into audit reports
///
/// Every audit is a pure function of the input bytes; repeat audits of the
/// same bytes are served from a bounded cache.
pub struct Auditor<P: PageSource> {
    source: P,
    config: AuditConfig,
    cache: Mutex<AuditCache>,
}

impl<P: PageSource> Auditor<P> {
    /// Create a new Auditor, validating the configuration
    pub fn new(source: P, config: AuditConfig) -> Result<Self, AuditError> {
        config.validate().map_err(AuditError::Config)?;
        Ok(Self {
            source,
            config,
            cache: Mutex::new(AuditCache::default()),
        })
    }

    /// Number of memoized reports
    pub fn cached_reports(&self) -> usize {
        self.lock_cache().len()
    }

    /// Audit one PDF document
    ///
    /// Input checks run in order: size ceiling, PDF header, encryption and
    /// extractable text. Any failure rejects the whole document; nothing is
    /// cached for it.
    pub fn audit(&self, bytes: &[u8]) -> Result<Arc<AuditReport>, AuditError> {
        if bytes.len() > self.config.max_input_bytes {
            warn!("Rejecting input of {} bytes (max {})", bytes.len(), self.config.max_input_bytes);
            return Err(Rejection::TooLarge(bytes.len(), self.config.max_input_bytes).into());
        }
        if !bytes.starts_with(PDF_MAGIC) {
            warn!("Rejecting input without a PDF header");
            return Err(Rejection::NotPdf.into());
        }

        let digest = format!("{:x}", Sha256::digest(bytes));
        if let Some(report) = self.lock_cache().get(&digest) {
            debug!("Cache hit for {}", digest);
            return Ok(report);
        }

        info!("Starting audit of {} bytes ({})", bytes.len(), digest);

        let extracted = self.source.load(bytes).map_err(|e| match e {
            PageSourceError::Encrypted => AuditError::from(Rejection::Encrypted),
            PageSourceError::Unreadable(reason) => AuditError::Extraction(reason),
        });
        let extracted = match extracted {
            Ok(extracted) => extracted,
            Err(e) => {
                warn!("Audit failed: {}", e);
                return Err(e);
            }
        };

        if extracted.encrypted {
            warn!("Rejecting encrypted document");
            return Err(Rejection::Encrypted.into());
        }
        if extracted.is_blank() {
            warn!("Rejecting document without extractable text ({} pages)", extracted.page_count());
            return Err(Rejection::NoExtractableText.into());
        }

        let report = Arc::new(analyze_pages(digest, extracted.pages, &self.config));

        info!(
            "Audit complete: {} pages, {} encounters, {}/{} checklist fields present",
            report.page_count(),
            report.encounters.len(),
            report.compliance.present_count(),
            report.compliance.checked_count()
        );

        self.lock_cache()
            .insert(Arc::clone(&report), self.config.cache_capacity);
        Ok(report)
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, AuditCache> {
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Run the text pipeline over already-extracted pages
///
/// Profile from the front matter, encounters segmented, annotated and sorted
/// most recent first, then the checklist over the whole text.
pub fn analyze_pages(digest: String, pages: Vec<String>, config: &AuditConfig) -> AuditReport {
    let profile = locate_profile(&pages, config);
    if profile.is_empty() {
        warn!("No patient identity found in the first {} pages", config.profile_pages);
    }

    let segmentation = segment_document(&pages);
    let mut encounters: Vec<_> = segmentation
        .encounters
        .into_iter()
        .map(|encounter| annotate(encounter, &profile))
        .collect();
    sort_encounters(&mut encounters);

    let compliance = check_fields(&pages.join("\n"), &DEFAULT_CHECKLIST);
    debug!("Compliance: missing {:?}", compliance.missing());

    AuditReport {
        digest,
        pages,
        profile,
        encounters,
        compliance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InMemorySource;

    fn pdf_bytes(marker: &str) -> Vec<u8> {
        format!("%PDF-1.7\n{}", marker).into_bytes()
    }

    fn pages() -> Vec<String> {
        vec!["Nombre Paciente: Ana Ruiz\n01/02/2020 Motivo de consulta: tos".to_string()]
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AuditConfig {
            field_window: 0,
            ..AuditConfig::default()
        };
        let result = Auditor::new(InMemorySource::new(pages()), config);
        assert!(matches!(result, Err(AuditError::Config(_))));
    }

    #[test]
    fn test_cache_evicts_oldest() {
        let source = InMemorySource::new(pages());
        let config = AuditConfig {
            cache_capacity: 2,
            ..AuditConfig::default()
        };
        let auditor = Auditor::new(&source, config).unwrap();

        auditor.audit(&pdf_bytes("a")).unwrap();
        auditor.audit(&pdf_bytes("b")).unwrap();
        auditor.audit(&pdf_bytes("c")).unwrap();
        assert_eq!(auditor.cached_reports(), 2);
        assert_eq!(source.call_count(), 3);

        auditor.audit(&pdf_bytes("c")).unwrap();
        assert_eq!(source.call_count(), 3);
        auditor.audit(&pdf_bytes("a")).unwrap();
        assert_eq!(source.call_count(), 4);
    }

    #[test]
    fn test_zero_capacity_disables_cache() {
        let source = InMemorySource::new(pages());
        let config = AuditConfig {
            cache_capacity: 0,
            ..AuditConfig::default()
        };
        let auditor = Auditor::new(&source, config).unwrap();

        auditor.audit(&pdf_bytes("a")).unwrap();
        auditor.audit(&pdf_bytes("a")).unwrap();
        assert_eq!(source.call_count(), 2);
        assert_eq!(auditor.cached_reports(), 0);
    }

    #[test]
    fn test_digest_is_sha256_hex() {
        let auditor = Auditor::new(InMemorySource::new(pages()), AuditConfig::default()).unwrap();
        let report = auditor.audit(b"%PDF-").unwrap();
        assert_eq!(report.digest.len(), 64);
        assert!(report.digest.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
