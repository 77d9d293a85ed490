//! Normalization of raw endpoint records into the canonical [`Paper`] shape.
//!
//! The endpoint's records are wildly inconsistent: the same conceptual field
//! shows up under different names, different nesting, and different types
//! from one record to the next. `normalize` resolves each canonical field
//! through an ordered list of candidates and is total — any missing or
//! malformed input degrades to the field's documented default, never an
//! error.

use chrono::Datelike;

use crate::models::{Paper, RawPaperRecord};

/// Normalize one raw record into the canonical paper shape.
///
/// Total over all inputs, including records that are not JSON objects at
/// all. The only non-determinism is the fallback id (randomly generated when
/// the source has none) and the current-year fallback.
#[must_use]
pub fn normalize(raw: &RawPaperRecord) -> Paper {
    let id = raw
        .id_string()
        .unwrap_or_else(|| uuid::Uuid::new_v4().simple().to_string());

    let title = raw
        .string_field(&["papertitle", "title"])
        .unwrap_or_else(|| "Untitled".to_string());

    let journal = raw
        .nested_string("journal", &["title", "journalabbreviation"])
        .unwrap_or_else(|| "Unknown Journal".to_string());

    let impact_factor = raw
        .nested_number("journal", &["impactfactor"])
        .or_else(|| raw.number_field(&["journalaltimpactfactor"]))
        .unwrap_or(0.0)
        .max(0.0);

    let publisher = raw
        .nested_string("publisher", &["publishername"])
        .or_else(|| raw.string_field(&["publishername"]))
        .unwrap_or_else(|| "Unknown Publisher".to_string());

    let published_date = raw.string_field(&["published_at", "created_at"]);

    let citation_count = raw
        .number_field(&["citationCount"])
        .map_or(0, |n| if n > 0.0 { n as u32 } else { 0 });

    Paper {
        id,
        title,
        authors: authors_of(raw),
        year: year_of(raw),
        journal,
        journal_details: raw.nested_string("journal", &["statementofscope"]).unwrap_or_default(),
        doi: raw.string_field(&["doi"]).unwrap_or_default(),
        impact_factor,
        pdf_url: raw.string_field(&["articlelink", "pdfUrl"]).unwrap_or_default(),
        abstract_text: raw.string_field(&["abstract"]).unwrap_or_default(),
        keywords: raw.string_array("keywords").unwrap_or_default(),
        citation_count,
        published_date,
        publisher,
        journal_abbreviation: raw
            .nested_string("journal", &["journalabbreviation"])
            .unwrap_or_default(),
        issn: raw.nested_string("journal", &["issn"]).unwrap_or_default(),
        service_type: raw.nested_string("servicetype", &["servicename"]).unwrap_or_default(),
        subject_area: raw.nested_string("salevelone", &["name"]).unwrap_or_default(),
        raw_data: raw.clone(),
    }
}

/// Normalize a whole fetch result.
#[must_use]
pub fn normalize_all(raw: &[RawPaperRecord]) -> Vec<Paper> {
    raw.iter().map(normalize).collect()
}

/// Author resolution: a comma-joined `coauthors` string wins; otherwise a
/// single name synthesized from the `client` sub-record; otherwise the
/// unknown-author placeholder. An empty split result does not fall through
/// to the client branch — only a fully absent `coauthors` does.
fn authors_of(raw: &RawPaperRecord) -> Vec<String> {
    let authors = if let Some(coauthors) = raw.string_field(&["coauthors"]) {
        coauthors
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    } else if raw.object("client").is_some() {
        let first = raw.nested_string("client", &["firstname"]).unwrap_or_default();
        let last = raw.nested_string("client", &["lastname"]).unwrap_or_default();
        let name = format!("{first} {last}").trim().to_string();
        if name.is_empty() { vec![] } else { vec![name] }
    } else {
        vec![]
    };

    if authors.is_empty() { vec!["Unknown Author".to_string()] } else { authors }
}

/// Year resolution: year of `published_at`, else year of `created_at`, else
/// the current year. A date candidate that is present but yields no year
/// falls through to the next candidate rather than poisoning the field.
fn year_of(raw: &RawPaperRecord) -> i32 {
    ["published_at", "created_at"]
        .into_iter()
        .find_map(|key| raw.string_field(&[key]).as_deref().and_then(parse_year))
        .unwrap_or_else(|| chrono::Local::now().year())
}

/// Extract a year from a date-like string: RFC 3339, `YYYY-MM-DD`,
/// `YYYY-MM-DD HH:MM:SS`, or a bare leading 4-digit year.
fn parse_year(s: &str) -> Option<i32> {
    let s = s.trim();

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.year());
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.year());
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.year());
    }

    let digits: String = s.chars().take_while(char::is_ascii_digit).collect();
    if digits.len() == 4 { digits.parse().ok() } else { None }
}
