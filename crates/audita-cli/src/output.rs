//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use audita_domain::{ComplianceReport, Encounter, PatientProfile};
use audita_extractor::{find_occurrences, highlight, AuditReport, FieldKeywords, SearchHit};
use colored::*;
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Longest motive or diagnosis shown in a table cell
const CELL_WIDTH: usize = 48;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Output format in effect.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format an audit report.
    pub fn format_report(&self, report: &AuditReport, show_text: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(report, show_text),
            OutputFormat::Table => Ok(self.format_report_table(report, show_text)),
            OutputFormat::Quiet => Ok(report.digest.clone()),
        }
    }

    fn format_report_json(&self, report: &AuditReport, show_text: bool) -> Result<String> {
        let encounters: Vec<serde_json::Value> = report
            .encounters
            .iter()
            .map(|e| {
                let mut value = json!({
                    "date": e.date,
                    "first_page": e.first_page,
                    "last_page": e.last_page,
                    "age": e.age,
                    "companion": e.companion,
                    "motive": e.motive,
                    "diagnosis": e.diagnosis,
                });
                if show_text {
                    value["content"] = json!(e.content);
                }
                value
            })
            .collect();

        let mut value = json!({
            "digest": report.digest,
            "page_count": report.page_count(),
            "profile": report.profile,
            "encounters": encounters,
            "compliance": report.compliance,
        });
        if show_text {
            value["pages"] = json!(report.pages);
        }

        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_report_table(&self, report: &AuditReport, show_text: bool) -> String {
        let mut sections = vec![
            self.colorize("Patient", "cyan"),
            profile_table(&report.profile, report.page_count()),
            String::new(),
            self.colorize("Encounters", "cyan"),
            self.encounters_table(&report.encounters),
            String::new(),
            self.colorize("Compliance", "cyan"),
            self.compliance_table(&report.compliance),
            self.compliance_summary(&report.compliance),
        ];

        if show_text {
            for (index, page) in report.pages.iter().enumerate() {
                sections.push(String::new());
                sections.push(self.colorize(&format!("--- Page {} ---", index + 1), "magenta"));
                sections.push(page.clone());
            }
        }

        sections.join("\n")
    }

    fn encounters_table(&self, encounters: &[Encounter]) -> String {
        if encounters.is_empty() {
            return self.colorize("No encounters identified.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Date", "Pages", "Age", "Companion", "Motive", "Diagnosis"]);

        for encounter in encounters {
            let pages = if encounter.page_count() > 1 {
                format!("{}-{}", encounter.first_page, encounter.last_page)
            } else {
                encounter.first_page.to_string()
            };
            builder.push_record([
                encounter.display_date(),
                pages,
                encounter.display_age(),
                truncate(encounter.display_companion(), CELL_WIDTH),
                truncate(encounter.display_motive(), CELL_WIDTH),
                truncate(encounter.display_diagnosis(), CELL_WIDTH),
            ]);
        }

        styled(builder)
    }

    fn compliance_table(&self, compliance: &ComplianceReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Status"]);

        for status in compliance.entries() {
            let mark = if status.present {
                self.colorize("✓ present", "green")
            } else {
                self.colorize("✗ missing", "red")
            };
            builder.push_record([status.field.label().to_string(), mark]);
        }

        styled(builder)
    }

    fn compliance_summary(&self, compliance: &ComplianceReport) -> String {
        let summary = format!(
            "{}/{} checklist fields present",
            compliance.present_count(),
            compliance.checked_count()
        );
        if compliance.is_compliant() {
            self.success(&summary)
        } else {
            self.warning(&summary)
        }
    }

    /// Format search hits for `term`.
    pub fn format_hits(&self, hits: &[SearchHit], term: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(hits)?),
            OutputFormat::Quiet => Ok(hits
                .iter()
                .map(|h| format!("{}:{}-{}", h.page, h.start, h.end))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if hits.is_empty() {
                    return Ok(self.colorize(&format!("No matches for '{}'.", term), "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Page", "Offset", "Context"]);
                for hit in hits {
                    builder.push_record([
                        hit.page.to_string(),
                        hit.start.to_string(),
                        self.mark_term(&hit.snippet, term),
                    ]);
                }

                let summary = self.info(&format!("{} match(es) for '{}'", hits.len(), term));
                Ok(format!("{}\n{}", styled(builder), summary))
            }
        }
    }

    /// Format the checklist keyword table.
    pub fn format_checklist(&self, table: &[FieldKeywords]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = table
                    .iter()
                    .map(|entry| {
                        json!({
                            "field": entry.field,
                            "label": entry.field.label(),
                            "keywords": entry.keywords,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
            OutputFormat::Quiet => Ok(table
                .iter()
                .map(|entry| entry.field.label())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Keywords"]);
                for entry in table {
                    builder.push_record([entry.field.label().to_string(), entry.keywords.join(", ")]);
                }
                Ok(styled(builder))
            }
        }
    }

    /// Highlight each occurrence of `term` in `text`.
    fn mark_term(&self, text: &str, term: &str) -> String {
        if !self.color_enabled {
            return highlight(text, term, "[", "]");
        }

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for range in find_occurrences(text, term) {
            out.push_str(&text[last..range.start]);
            out.push_str(&text[range.clone()].yellow().bold().to_string());
            last = range.end;
        }
        out.push_str(&text[last..]);
        out
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().bold().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn profile_table(profile: &PatientProfile, page_count: usize) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Name".to_string(), profile.display_name().to_string()]);
    builder.push_record(["Birth date".to_string(), profile.display_birth_date()]);
    builder.push_record(["Identification".to_string(), profile.display_identification().to_string()]);
    builder.push_record(["Pages".to_string(), page_count.to_string()]);

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

/// Cut `text` to at most `max` characters, marking the cut with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use audita_extractor::{analyze_pages, AuditConfig, DEFAULT_CHECKLIST};

    fn create_test_report() -> AuditReport {
        let pages = vec![
            "Nombre Paciente: Juan Pérez\nFecha Nacimiento: 10/04/1985".to_string(),
            "01/02/2020 Motivo de consulta: dolor torácico\nDiagnóstico: angina".to_string(),
        ];
        analyze_pages("ab".repeat(32), pages, &AuditConfig::default())
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&create_test_report(), false).unwrap();
        assert!(output.contains("Juan Pérez"));
        assert!(output.contains("01/02/2020"));
        assert!(output.contains("angina"));
        assert!(output.contains("✗ missing"));
        assert!(!output.contains("--- Page 1 ---"));
    }

    #[test]
    fn test_table_format_with_text() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&create_test_report(), true).unwrap();
        assert!(output.contains("--- Page 2 ---"));
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_report(&create_test_report(), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["profile"]["name"], "Juan Pérez");
        assert_eq!(value["encounters"][0]["age"], 34);
        assert!(value.get("pages").is_none());
        assert!(value["encounters"][0].get("content").is_none());
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_report(&create_test_report(), false).unwrap();
        assert_eq!(output, "ab".repeat(32));
    }

    #[test]
    fn test_no_encounters() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let report = analyze_pages(String::new(), vec!["sin datos".to_string()], &AuditConfig::default());
        let output = formatter.format_report(&report, false).unwrap();
        assert!(output.contains("No encounters identified."));
        assert!(output.contains("unknown"));
    }

    #[test]
    fn test_hits_marked_without_color() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let hits = vec![SearchHit {
            page: 2,
            start: 5,
            end: 11,
            snippet: "Dx: Angina estable".to_string(),
        }];
        let output = formatter.format_hits(&hits, "angina").unwrap();
        assert!(output.contains("[Angina] estable"));
        assert!(output.contains("1 match(es)"));

        let quiet = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(quiet.format_hits(&hits, "angina").unwrap(), "2:5-11");
    }

    #[test]
    fn test_no_hits() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_hits(&[], "angina").unwrap();
        assert!(output.contains("No matches for 'angina'"));
    }

    #[test]
    fn test_checklist_formats() {
        let table = Formatter::new(OutputFormat::Table, false)
            .format_checklist(&DEFAULT_CHECKLIST)
            .unwrap();
        assert!(table.contains("Plan de Manejo"));
        assert!(table.contains("plan terapéutico"));

        let json = Formatter::new(OutputFormat::Json, false)
            .format_checklist(&DEFAULT_CHECKLIST)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[4]["field"], "plan_manejo");
        assert_eq!(value.as_array().map(Vec::len), Some(8));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("corto", 10), "corto");
        assert_eq!(truncate("ñandú grande", 6), "ñandú…");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("test"), "⚠ test");
    }
}
