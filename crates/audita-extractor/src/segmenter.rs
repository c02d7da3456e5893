//! Split page text into clinical encounters

use crate::date_parser::{find_date_fragments, parse_date};
use crate::types::{DateFragment, Segmentation};
use audita_domain::{Encounter, NaiveDate};
use regex::{Match, Regex};
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Section headers that open a new encounter
static START_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:motivo\s+de\s+consulta|enfermedad\s+actual|control|evoluci[oó]n)\b")
        .expect("start header pattern is valid")
});

/// Characters before a date inspected for a birth-date label
const BIRTH_CONTEXT_CHARS: usize = 40;

/// Segmenter state between pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentState {
    NoOpenEncounter,
    OpenEncounter { first_page: usize, date: NaiveDate },
}

/// Split pages into encounters, in document order
///
/// Encounters carry only their date, page range and content; see
/// [`crate::annotate`] for the derived fields.
pub fn segment<S: AsRef<str>>(pages: &[S]) -> Vec<Encounter> {
    segment_document(pages).encounters
}

/// Split pages into front-matter pages and encounters
///
/// A page opens an encounter when it holds a start header and an encounter
/// date can be resolved for it. Pages without a start signal extend the open
/// encounter, or are front matter when none is open yet.
///
/// The page is the unit: a page holding two dated start headers opens a
/// single encounter, dated by its first header.
pub fn segment_document<S: AsRef<str>>(pages: &[S]) -> Segmentation {
    let mut segmentation = Segmentation::default();
    let mut state = SegmentState::NoOpenEncounter;

    for (index, page) in pages.iter().enumerate() {
        let number = index + 1;
        let previous = index.checked_sub(1).map(|i| pages[i].as_ref());

        match (encounter_start(page.as_ref(), previous), state) {
            (Some(date), SegmentState::OpenEncounter { first_page, date: open_date }) => {
                debug!("Page {}: new encounter dated {}, closing pages {}-{}", number, date, first_page, number - 1);
                segmentation
                    .encounters
                    .push(build_encounter(pages, first_page, number - 1, open_date));
                state = SegmentState::OpenEncounter { first_page: number, date };
            }
            (Some(date), SegmentState::NoOpenEncounter) => {
                debug!("Page {}: first encounter dated {}", number, date);
                state = SegmentState::OpenEncounter { first_page: number, date };
            }
            (None, SegmentState::OpenEncounter { .. }) => {
                debug!("Page {}: continuation", number);
            }
            (None, SegmentState::NoOpenEncounter) => {
                debug!("Page {}: front matter", number);
                segmentation.header_pages.push(number);
            }
        }
    }

    if let SegmentState::OpenEncounter { first_page, date } = state {
        segmentation
            .encounters
            .push(build_encounter(pages, first_page, pages.len(), date));
    }

    debug!(
        "Segmented {} pages into {} encounters ({} front-matter pages)",
        pages.len(),
        segmentation.encounters.len(),
        segmentation.header_pages.len()
    );

    segmentation
}

/// Order encounters most recent first, unknown dates last
///
/// The sort is stable: encounters sharing a date keep document order.
pub fn sort_encounters(encounters: &mut [Encounter]) {
    encounters.sort_by(Encounter::cmp_reverse_chronological);
}

/// Resolve the encounter date for a page, if the page opens one
///
/// The nearest date before the first start header wins; failing that, the
/// first date after it on the page, then a date on the last non-empty line of
/// the previous page.
fn encounter_start(page: &str, previous: Option<&str>) -> Option<NaiveDate> {
    let header = START_HEADER.find(page)?;
    let dates = encounter_dates(page);

    let date = nearest_before(&dates, &header)
        .or_else(|| first_after(&dates, &header))
        .or_else(|| previous.and_then(trailing_date));

    if date.is_none() {
        warn!("Start header '{}' has no resolvable date, treating page as continuation", header.as_str());
    }
    date
}

fn nearest_before(dates: &[(DateFragment, NaiveDate)], header: &Match<'_>) -> Option<NaiveDate> {
    dates
        .iter()
        .rev()
        .find(|(fragment, _)| fragment.end() <= header.start())
        .map(|(_, date)| *date)
}

fn first_after(dates: &[(DateFragment, NaiveDate)], header: &Match<'_>) -> Option<NaiveDate> {
    dates
        .iter()
        .find(|(fragment, _)| fragment.offset >= header.start())
        .map(|(_, date)| *date)
}

/// Last date on the last non-empty line of `page`
fn trailing_date(page: &str) -> Option<NaiveDate> {
    let line = page.lines().rev().find(|line| !line.trim().is_empty())?;
    encounter_dates(line).last().map(|(_, date)| *date)
}

/// Parseable date fragments of `text`, excluding birth dates
fn encounter_dates(text: &str) -> Vec<(DateFragment, NaiveDate)> {
    find_date_fragments(text)
        .into_iter()
        .filter(|fragment| !is_birth_context(text, fragment.offset))
        .filter_map(|fragment| parse_date(&fragment.text).map(|date| (fragment, date)))
        .collect()
}

/// True when a birth-date label closely precedes `offset`
fn is_birth_context(text: &str, offset: usize) -> bool {
    let prefix = &text[..offset];
    let start = prefix
        .char_indices()
        .rev()
        .nth(BIRTH_CONTEXT_CHARS - 1)
        .map_or(0, |(i, _)| i);
    prefix[start..].to_lowercase().contains("nacimiento")
}

fn build_encounter<S: AsRef<str>>(pages: &[S], first_page: usize, last_page: usize, date: NaiveDate) -> Encounter {
    let content = pages[first_page - 1..last_page]
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join("\n");
    Encounter::new(Some(date), first_page, last_page, content)
}
