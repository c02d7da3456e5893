//! Locate labeled demographic fields in the document front matter
//!
//! Labels and values are rarely adjacent in extracted PDF text: colons,
//! line breaks and column padding sit between them. Each locator anchors on
//! the first label match and scans a bounded window after it, so a value
//! belonging to a later section is never picked up.

use crate::config::AuditConfig;
use crate::date_parser::{parse_date, DATE_PATTERN};
use audita_domain::PatientProfile;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static NAME_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bnombres?\s+(?:y\s+apellidos\s+)?(?:del?\s+|de\s+la\s+)?paciente\b|\bpaciente\s*:|\bnombres?(?:\s+y\s+apellidos)?\s*:",
    )
    .expect("name label pattern is valid")
});

/// Words of letters separated by single spaces; tabs and line breaks end it
static NAME_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{L}+(?: \p{L}+)*").expect("name value pattern is valid")
});

static BIRTH_DATE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bfecha\s+(?:de\s+)?nac(?:imiento\b|\.)").expect("birth date label pattern is valid")
});

static BIRTH_DATE_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i){}", DATE_PATTERN)).expect("birth date value pattern is valid")
});

static ID_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bidentificaci[oó]n\b|\bdocumento\b|\bc[eé]dula\b").expect("id label pattern is valid")
});

/// Digit run with optional dot or dash separators, at least six characters
static ID_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d[\d.\-]{4,}\d\b").expect("id value pattern is valid")
});

static DATE_SHAPED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,2}[.\-]\d{1,2}[.\-](?:\d{4}|\d{2})$").expect("date shape pattern is valid")
});

/// Find a labeled field value
///
/// Locates the first match of `label`, then returns the first match of
/// `value` within the `window` characters following it (capture group 1 if
/// the pattern has one), trimmed. `None` when the label is absent or no value
/// appears in the window.
///
/// # Examples
///
/// ```
/// use audita_extractor::find_labeled_field;
/// use regex::Regex;
///
/// let label = Regex::new("(?i)historia").unwrap();
/// let value = Regex::new(r"\d+").unwrap();
/// let text = "HISTORIA No.\n 4521";
/// assert_eq!(find_labeled_field(text, &label, &value, 100), Some("4521".to_string()));
/// assert_eq!(find_labeled_field(text, &label, &value, 5), None);
/// ```
pub fn find_labeled_field(text: &str, label: &Regex, value: &Regex, window: usize) -> Option<String> {
    find_labeled_field_with(text, label, window, |scope| {
        let caps = value.captures(scope)?;
        let m = caps.get(1).or_else(|| caps.get(0))?;
        Some(m.as_str().to_string())
    })
}

/// Find a labeled field value with a custom value matcher
///
/// Like [`find_labeled_field`], but `extract` receives the window text and
/// picks the value itself.
pub fn find_labeled_field_with<F>(text: &str, label: &Regex, window: usize, extract: F) -> Option<String>
where
    F: FnOnce(&str) -> Option<String>,
{
    let label_match = label.find(text)?;
    let scope = char_window(&text[label_match.end()..], window);
    let value = extract(scope)?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Leading `chars` characters of `text`, cut on a char boundary
fn char_window(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Locate the patient name
pub fn find_patient_name(text: &str, window: usize) -> Option<String> {
    find_labeled_field(text, &NAME_LABEL, &NAME_VALUE, window)
}

/// Locate and parse the patient birth date
pub fn find_birth_date(text: &str, window: usize) -> Option<chrono::NaiveDate> {
    find_labeled_field(text, &BIRTH_DATE_LABEL, &BIRTH_DATE_VALUE, window)
        .and_then(|fragment| parse_date(&fragment))
}

/// Locate the identification number, skipping date-shaped digit runs
pub fn find_identification(text: &str, window: usize) -> Option<String> {
    find_labeled_field_with(text, &ID_LABEL, window, |scope| {
        ID_VALUE
            .find_iter(scope)
            .map(|m| m.as_str())
            .find(|candidate| !DATE_SHAPED.is_match(candidate))
            .map(str::to_string)
    })
}

/// Build the patient profile from the leading pages of a document
///
/// Only the first `config.profile_pages` pages are read; encounter pages
/// further into the record are never consulted.
pub fn locate_profile<S: AsRef<str>>(pages: &[S], config: &AuditConfig) -> PatientProfile {
    let front_matter = pages
        .iter()
        .take(config.profile_pages)
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join("\n");

    let profile = PatientProfile::new(
        find_patient_name(&front_matter, config.field_window),
        find_birth_date(&front_matter, config.field_window),
        find_identification(&front_matter, config.field_window),
    );

    debug!(
        "Profile located: name={}, birth_date={}, identification={}",
        profile.name.is_some(),
        profile.birth_date.is_some(),
        profile.identification.is_some()
    );

    profile
}
