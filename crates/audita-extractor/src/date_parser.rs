//! Parse free-text date fragments into calendar dates

use crate::types::DateFragment;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Spanish month names and their two-digit numbers
const SPANISH_MONTHS: [(&str, &str); 13] = [
    ("enero", "01"),
    ("febrero", "02"),
    ("marzo", "03"),
    ("abril", "04"),
    ("mayo", "05"),
    ("junio", "06"),
    ("julio", "07"),
    ("agosto", "08"),
    ("septiembre", "09"),
    ("setiembre", "09"),
    ("octubre", "10"),
    ("noviembre", "11"),
    ("diciembre", "12"),
];

/// Candidate formats in priority order, with the year width each accepts
const CANDIDATE_FORMATS: [(&str, usize); 2] = [("%d/%m/%Y", 4), ("%d/%m/%y", 2)];

/// Pattern source for a date fragment: numeric (`15/05/2020`, `1-2-21`) or
/// Spanish month name (`15 de mayo de 2020`, `3 marzo 2021`)
pub(crate) const DATE_PATTERN: &str = concat!(
    r"\b\d{1,2}[/.\-]\d{1,2}[/.\-](?:\d{4}|\d{2})\b",
    r"|\b\d{1,2}(?:\s*[/\-]\s*|\s+(?:de\s+)?)",
    r"(?:enero|febrero|marzo|abril|mayo|junio|julio|agosto|septiembre|setiembre|octubre|noviembre|diciembre)",
    r"(?:\s*[/\-]\s*|\s+(?:del?\s+)?)(?:\d{4}|\d{2})\b",
);

static DATE_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i){}", DATE_PATTERN)).expect("date fragment pattern is valid")
});

/// Parse a date fragment into a calendar date
///
/// Accepts day, month and year separated by `/`, `-`, whitespace or the word
/// "de", with the month written as a number or a Spanish month name. Two-digit
/// years use chrono's `%y` window (00-69 → 2000s, 70-99 → 1900s).
///
/// Returns `None` for anything that is not exactly one valid date; an
/// unparseable fragment means "date unknown", not an error.
///
/// # Examples
///
/// ```
/// use audita_extractor::parse_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2020, 5, 15);
/// assert_eq!(parse_date("15 de mayo de 2020"), expected);
/// assert_eq!(parse_date("15/05/2020"), expected);
/// assert_eq!(parse_date("no es una fecha"), None);
/// ```
pub fn parse_date(fragment: &str) -> Option<NaiveDate> {
    let normalized = normalize(fragment);
    let parts: Vec<&str> = normalized.split('/').collect();
    if parts.len() != 3 {
        return None;
    }

    CANDIDATE_FORMATS
        .iter()
        .filter(|(_, year_width)| parts[2].len() == *year_width)
        .find_map(|(format, _)| NaiveDate::parse_from_str(&normalized, format).ok())
}

/// Lower-case, replace month names and collapse separators to `/`
fn normalize(fragment: &str) -> String {
    let mut text = fragment.to_lowercase();
    for (name, number) in SPANISH_MONTHS {
        text = text.replace(name, number);
    }

    let mut normalized = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_digit() {
            normalized.push(c);
        } else if !normalized.is_empty() && !normalized.ends_with('/') {
            normalized.push('/');
        }
    }
    normalized.trim_end_matches('/').to_string()
}

/// Find every date-like fragment in `text`, in document order
///
/// Fragments are returned whether or not they parse; callers run
/// [`parse_date`] on the ones they need.
pub fn find_date_fragments(text: &str) -> Vec<DateFragment> {
    DATE_FRAGMENT
        .find_iter(text)
        .map(|m| DateFragment {
            text: m.as_str().to_string(),
            offset: m.start(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_parse_numeric_date() {
        assert_eq!(parse_date("15/05/2020"), ymd(2020, 5, 15));
        assert_eq!(parse_date("1-2-2020"), ymd(2020, 2, 1));
        assert_eq!(parse_date("01.02.2020"), ymd(2020, 2, 1));
    }

    #[test]
    fn test_parse_spanish_month_name() {
        assert_eq!(parse_date("15 de mayo de 2020"), ymd(2020, 5, 15));
        assert_eq!(parse_date("3 Marzo 2021"), ymd(2021, 3, 3));
        assert_eq!(parse_date("7 de SEPTIEMBRE del 2019"), ymd(2019, 9, 7));
        assert_eq!(parse_date("7 setiembre 2019"), ymd(2019, 9, 7));
    }

    #[test]
    fn test_parse_two_digit_year() {
        assert_eq!(parse_date("15/05/20"), ymd(2020, 5, 15));
        assert_eq!(parse_date("10/04/85"), ymd(1985, 4, 10));
        assert_eq!(parse_date("10/04/69"), ymd(2069, 4, 10));
        assert_eq!(parse_date("10/04/70"), ymd(1970, 4, 10));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_date("no es una fecha"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("///"), None);
        assert_eq!(parse_date("15/05"), None);
        assert_eq!(parse_date("15/05/2020/10"), None);
    }

    #[test]
    fn test_parse_nonexistent_date() {
        assert_eq!(parse_date("31/04/2020"), None);
        assert_eq!(parse_date("29/02/2021"), None);
        assert_eq!(parse_date("29/02/2020"), ymd(2020, 2, 29));
        assert_eq!(parse_date("15/13/2020"), None);
    }

    #[test]
    fn test_parse_rejects_odd_year_width() {
        assert_eq!(parse_date("15/05/202"), None);
        assert_eq!(parse_date("15/05/20201"), None);
    }

    #[test]
    fn test_find_fragments_in_order() {
        let text = "Ingreso 01/02/2020. Control el 15 de marzo de 2021 y 3-4-22.";
        let fragments = find_date_fragments(text);
        let texts: Vec<&str> = fragments.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, vec!["01/02/2020", "15 de marzo de 2021", "3-4-22"]);
        assert_eq!(fragments[0].offset, 8);
        assert_eq!(&text[fragments[1].offset..fragments[1].end()], "15 de marzo de 2021");
    }

    #[test]
    fn test_find_fragments_ignores_identifiers() {
        let fragments = find_date_fragments("Documento: 1.234.567 Teléfono 300-123-4567");
        assert!(fragments.is_empty());
    }

    #[test]
    fn test_find_fragments_case_insensitive() {
        let fragments = find_date_fragments("FECHA: 15 DE MAYO DE 2020");
        assert_eq!(fragments.len(), 1);
        assert_eq!(parse_date(&fragments[0].text), ymd(2020, 5, 15));
    }
}
