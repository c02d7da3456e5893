//! Command implementations.

pub mod audit;
pub mod checklist;
pub mod config;
pub mod search;

pub use self::audit::execute_audit;
pub use self::checklist::execute_checklist;
pub use self::config::execute_config;
pub use self::search::execute_search;

use crate::error::{CliError, Result};
use audita_extractor::{AuditConfig, AuditError, AuditReport, Auditor, LopdfSource, Rejection};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Read and audit a PDF file.
pub(crate) fn audit_file(path: &Path, config: &AuditConfig) -> Result<Arc<AuditReport>> {
    let metadata = fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(CliError::InvalidInput(format!("{} is not a file", path.display())));
    }

    let len = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    if len > config.max_input_bytes {
        return Err(AuditError::from(Rejection::TooLarge(len, config.max_input_bytes)).into());
    }

    let bytes = fs::read(path)?;
    let auditor = Auditor::new(LopdfSource::new(), config.clone())?;
    Ok(auditor.audit(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_audit_file_rejects_non_pdf() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notas.txt");
        fs::write(&path, "Motivo de consulta: cefalea").unwrap();

        let result = audit_file(&path, &AuditConfig::default());
        assert!(matches!(
            result,
            Err(CliError::Audit(AuditError::InputRejected(Rejection::NotPdf)))
        ));
    }

    #[test]
    fn test_audit_file_rejects_oversized_before_reading() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("historia.pdf");
        fs::write(&path, "%PDF-1.7 contenido de prueba").unwrap();

        let config = AuditConfig {
            max_input_bytes: 8,
            ..AuditConfig::default()
        };
        let result = audit_file(&path, &config);
        assert!(matches!(
            result,
            Err(CliError::Audit(AuditError::InputRejected(Rejection::TooLarge(28, 8))))
        ));
    }

    #[test]
    fn test_audit_file_rejects_directory() {
        let dir = TempDir::new().unwrap();
        let result = audit_file(dir.path(), &AuditConfig::default());
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_audit_file_missing() {
        let dir = TempDir::new().unwrap();
        let result = audit_file(&dir.path().join("absent.pdf"), &AuditConfig::default());
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
