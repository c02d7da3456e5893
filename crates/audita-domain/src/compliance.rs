//! Compliance module - regulatory checklist fields and audit results
//!
//! The checklist follows the minimum content of a clinical record required by
//! Resolución 1995 de 1999. Which keywords prove a field is present is decided
//! by the engine; this module only names the fields and holds results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A field of the regulatory checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceField {
    /// Reason for consultation
    MotivoConsulta,

    /// Personal and family history
    Antecedentes,

    /// Physical examination
    ExamenFisico,

    /// Diagnosis or diagnostic impression
    Diagnostico,

    /// Management plan
    PlanManejo,

    /// Progress notes
    Evolucion,

    /// Signature of the attending professional
    FirmaProfesional,

    /// Patient identification data
    IdentificacionPaciente,
}

impl ComplianceField {
    /// Every checklist field, in report order
    pub const ALL: [ComplianceField; 8] = [
        ComplianceField::MotivoConsulta,
        ComplianceField::Antecedentes,
        ComplianceField::ExamenFisico,
        ComplianceField::Diagnostico,
        ComplianceField::PlanManejo,
        ComplianceField::Evolucion,
        ComplianceField::FirmaProfesional,
        ComplianceField::IdentificacionPaciente,
    ];

    /// Human-readable field name as used in Colombian records
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceField::MotivoConsulta => "Motivo de Consulta",
            ComplianceField::Antecedentes => "Antecedentes",
            ComplianceField::ExamenFisico => "Examen Físico",
            ComplianceField::Diagnostico => "Diagnóstico",
            ComplianceField::PlanManejo => "Plan de Manejo",
            ComplianceField::Evolucion => "Evolución",
            ComplianceField::FirmaProfesional => "Firma del Profesional",
            ComplianceField::IdentificacionPaciente => "Identificación del Paciente",
        }
    }
}

impl fmt::Display for ComplianceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Presence flag for one checklist field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStatus {
    /// The checklist field
    pub field: ComplianceField,

    /// Whether any of its keywords occurs in the document
    pub present: bool,
}

/// Result of a compliance check, one entry per checked field in table order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    entries: Vec<FieldStatus>,
}

impl ComplianceReport {
    /// Build a report from field statuses
    ///
    /// A field listed twice keeps its first status.
    pub fn new(statuses: impl IntoIterator<Item = FieldStatus>) -> Self {
        let mut entries: Vec<FieldStatus> = Vec::new();
        for status in statuses {
            if !entries.iter().any(|e| e.field == status.field) {
                entries.push(status);
            }
        }
        Self { entries }
    }

    /// All entries in table order
    pub fn entries(&self) -> &[FieldStatus] {
        &self.entries
    }

    /// Presence of a field; `None` if the field was not checked
    pub fn is_present(&self, field: ComplianceField) -> Option<bool> {
        self.entries
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.present)
    }

    /// Fields that were checked and not found
    pub fn missing(&self) -> Vec<ComplianceField> {
        self.entries
            .iter()
            .filter(|e| !e.present)
            .map(|e| e.field)
            .collect()
    }

    /// Number of checked fields
    pub fn checked_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of fields found
    pub fn present_count(&self) -> usize {
        self.entries.iter().filter(|e| e.present).count()
    }

    /// True when every checked field is present
    pub fn is_compliant(&self) -> bool {
        self.entries.iter().all(|e| e.present)
    }
}
