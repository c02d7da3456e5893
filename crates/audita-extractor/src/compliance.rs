//! Regulatory checklist scan

use audita_domain::{ComplianceField, ComplianceReport, FieldStatus};

/// A checklist field and the keywords that evidence it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldKeywords {
    /// Field being checked
    pub field: ComplianceField,

    /// Lower-case synonyms; any one present marks the field present
    pub keywords: &'static [&'static str],
}

/// The clinical-record checklist (Resolución 1995 de 1999)
pub const DEFAULT_CHECKLIST: [FieldKeywords; 8] = [
    FieldKeywords {
        field: ComplianceField::MotivoConsulta,
        keywords: &["motivo de consulta"],
    },
    FieldKeywords {
        field: ComplianceField::Antecedentes,
        keywords: &["antecedentes"],
    },
    FieldKeywords {
        field: ComplianceField::ExamenFisico,
        keywords: &["examen físico", "examen fisico"],
    },
    FieldKeywords {
        field: ComplianceField::Diagnostico,
        keywords: &["diagnóstico", "diagnostico", "impresión diagnóstica"],
    },
    FieldKeywords {
        field: ComplianceField::PlanManejo,
        keywords: &["plan de manejo", "plan terapéutico", "plan terapeutico"],
    },
    FieldKeywords {
        field: ComplianceField::Evolucion,
        keywords: &["evolución", "evolucion"],
    },
    FieldKeywords {
        field: ComplianceField::FirmaProfesional,
        keywords: &["firma"],
    },
    FieldKeywords {
        field: ComplianceField::IdentificacionPaciente,
        keywords: &["identificación", "identificacion", "documento", "cédula", "cedula"],
    },
];

/// Check which fields of `table` appear in the document text
///
/// Plain substring containment on the lower-cased text, not token matching:
/// "firmado" counts for "firma".
pub fn check_fields(document_text: &str, table: &[FieldKeywords]) -> ComplianceReport {
    let text = document_text.to_lowercase();
    ComplianceReport::new(table.iter().map(|entry| FieldStatus {
        field: entry.field,
        present: entry.keywords.iter().any(|keyword| text.contains(keyword)),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checklist_covers_every_field_once() {
        let fields: Vec<_> = DEFAULT_CHECKLIST.iter().map(|entry| entry.field).collect();
        assert_eq!(fields, ComplianceField::ALL.to_vec());
        for entry in DEFAULT_CHECKLIST {
            assert!(entry.keywords.iter().all(|k| *k == k.to_lowercase()));
        }
    }

    #[test]
    fn test_plan_present_signature_missing() {
        let report = check_fields("PLAN DE MANEJO: reposo relativo", &DEFAULT_CHECKLIST);
        assert_eq!(report.is_present(ComplianceField::PlanManejo), Some(true));
        assert_eq!(report.is_present(ComplianceField::FirmaProfesional), Some(false));
        assert!(!report.is_compliant());
    }

    #[test]
    fn test_substring_not_token_match() {
        let report = check_fields("Documento firmado por el médico", &DEFAULT_CHECKLIST);
        assert_eq!(report.is_present(ComplianceField::FirmaProfesional), Some(true));
        assert_eq!(report.is_present(ComplianceField::IdentificacionPaciente), Some(true));
    }

    #[test]
    fn test_accented_and_plain_synonyms() {
        let report = check_fields("EXAMEN FÍSICO normal. Evolucion favorable", &DEFAULT_CHECKLIST);
        assert_eq!(report.is_present(ComplianceField::ExamenFisico), Some(true));
        assert_eq!(report.is_present(ComplianceField::Evolucion), Some(true));
    }

    #[test]
    fn test_custom_table() {
        let table = [FieldKeywords {
            field: ComplianceField::Antecedentes,
            keywords: &["antecedentes", "ant. personales"],
        }];
        let report = check_fields("Ant. personales: HTA", &table);
        assert_eq!(report.checked_count(), 1);
        assert_eq!(report.present_count(), 1);
        assert_eq!(report.is_present(ComplianceField::Diagnostico), None);
    }
}
