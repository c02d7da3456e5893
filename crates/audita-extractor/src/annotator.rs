//! Derive companion, motive, diagnosis and age for an encounter

use audita_domain::{Encounter, NaiveDate, PatientProfile};
use chrono::Datelike;
use regex::Regex;
use std::sync::LazyLock;

static COMPANION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:acompa[ñn]ad[oa]\s+(?:por|de)|en\s+compa[ñn][ií]a\s+de)[ \t]*:?[ \t]*([^\n]*)")
        .expect("companion pattern is valid")
});

static MOTIVE_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:motivo\s+de\s+(?:la\s+)?consulta|enfermedad\s+actual|evoluci[oó]n)\b")
        .expect("motive anchor pattern is valid")
});

static DIAGNOSIS_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:impresi[oó]n\s+diagn[oó]stica|diagn[oó]stic[oa]s?(?:\s+principal)?)\b")
        .expect("diagnosis anchor pattern is valid")
});

/// Known section labels that end a capture when written inline
static SECTION_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:motivo\s+de\s+consulta|enfermedad\s+actual|evoluci[oó]n|antecedentes",
        r"|examen\s+f[ií]sico|an[aá]lisis|impresi[oó]n\s+diagn[oó]stica|diagn[oó]stic[oa]s?",
        r"|plan\s+de\s+manejo|plan|conducta|firma)\s*:",
    ))
    .expect("section label pattern is valid")
});

/// A line opening with an upper-case header (4+ capitals) and a colon
static CAPS_HEADER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:\p{Lu}+[ \t]+)*\p{Lu}{4,}[ \t]*:").expect("caps header pattern is valid")
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Fill the derived fields of an encounter
///
/// Never fails: anything not found stays `None`.
pub fn annotate(mut encounter: Encounter, profile: &PatientProfile) -> Encounter {
    encounter.companion = find_companion(&encounter.content);
    encounter.motive = capture_section(&encounter.content, &MOTIVE_ANCHOR);
    encounter.diagnosis = capture_section(&encounter.content, &DIAGNOSIS_ANCHOR);
    encounter.age = match (profile.birth_date, encounter.date) {
        (Some(birth), Some(at)) => age_on(birth, at),
        _ => None,
    };
    encounter
}

/// Whole years elapsed from `birth` to `at`
///
/// `None` when `at` precedes `birth`.
///
/// # Examples
///
/// ```
/// use audita_extractor::age_on;
/// use chrono::NaiveDate;
///
/// let birth = NaiveDate::from_ymd_opt(2000, 3, 1).unwrap();
/// assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2020, 2, 28).unwrap()), Some(19));
/// assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2020, 3, 1).unwrap()), Some(20));
/// ```
pub fn age_on(birth: NaiveDate, at: NaiveDate) -> Option<u32> {
    if at < birth {
        return None;
    }
    let mut years = at.year() - birth.year();
    if (at.month(), at.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

/// Companion named on the first "acompañado por" style phrase
pub fn find_companion(content: &str) -> Option<String> {
    let caps = COMPANION.captures(content)?;
    let name = caps
        .get(1)?
        .as_str()
        .trim()
        .trim_end_matches(['.', ',', ';'])
        .trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Text of the section opened by the first `anchor` match
///
/// The capture runs until an inline section label, a following line that
/// opens with an upper-case header, or the end of `content`.
fn capture_section(content: &str, anchor: &Regex) -> Option<String> {
    let anchor_match = anchor.find(content)?;
    let rest = content[anchor_match.end()..].trim_start_matches(|c: char| c.is_whitespace() || matches!(c, ':' | '-' | '.'));

    let label_end = SECTION_LABEL.find(rest).map(|m| m.start());
    let header_end = rest.find('\n').and_then(|newline| {
        CAPS_HEADER_LINE
            .find(&rest[newline..])
            .map(|m| newline + m.start())
    });
    let end = [label_end, header_end]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(rest.len());

    let section = WHITESPACE_RUN.replace_all(rest[..end].trim(), " ");
    if section.is_empty() {
        None
    } else {
        Some(section.into_owned())
    }
}
