//! Canonical paper shape produced by normalization.

use serde::{Deserialize, Serialize};

use super::RawPaperRecord;

/// A normalized research paper.
///
/// Every field is always present and of its declared type; the normalizer
/// never lets a missing or malformed source field through as anything other
/// than the documented default. Search, sort, and rendering all rely on that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Source identifier, or a generated fallback when the record has none.
    pub id: String,

    /// Paper title, `"Untitled"` when absent.
    pub title: String,

    /// Author names in source order, `["Unknown Author"]` when absent.
    pub authors: Vec<String>,

    /// Publication year; falls back to creation year, then the current year.
    pub year: i32,

    /// Journal title, `"Unknown Journal"` when absent.
    pub journal: String,

    /// Journal statement of scope, empty when absent.
    pub journal_details: String,

    /// Digital Object Identifier, empty when absent.
    pub doi: String,

    /// Journal impact factor, 0 when absent or unparseable.
    pub impact_factor: f64,

    /// Link to the article PDF, empty when absent.
    pub pdf_url: String,

    /// Abstract text, empty when absent.
    #[serde(rename = "abstract")]
    pub abstract_text: String,

    /// Keywords, passed through only when the source already has an array.
    pub keywords: Vec<String>,

    /// Citation count, 0 when absent.
    pub citation_count: u32,

    /// Publication date as the source supplied it (`published_at`, else
    /// `created_at`); the one field allowed to be absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,

    /// Publisher name, `"Unknown Publisher"` when absent.
    pub publisher: String,

    /// Journal abbreviation, empty when absent.
    pub journal_abbreviation: String,

    /// Journal ISSN, empty when absent.
    pub issn: String,

    /// Service type name, empty when absent.
    pub service_type: String,

    /// Subject area name, empty when absent.
    pub subject_area: String,

    /// The source record, retained verbatim for provenance.
    pub raw_data: RawPaperRecord,
}

impl Paper {
    /// Author names as a comma-separated string.
    #[must_use]
    pub fn authors_joined(&self) -> String {
        self.authors.join(", ")
    }

    /// The first author's name, empty when the list is empty.
    #[must_use]
    pub fn first_author(&self) -> &str {
        self.authors.first().map_or("", String::as_str)
    }

    /// Impact factor label for display: `IF 2.50`, or `N/A` when unknown.
    #[must_use]
    pub fn impact_factor_label(&self) -> String {
        if self.impact_factor > 0.0 {
            format!("IF {:.2}", self.impact_factor)
        } else {
            "N/A".to_string()
        }
    }

    /// Whether the record links to a PDF.
    #[must_use]
    pub fn has_pdf(&self) -> bool {
        !self.pdf_url.is_empty()
    }
}
