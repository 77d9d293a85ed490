//! The client-side query pipeline: `filter → sort → paginate`.
//!
//! Three pure stages over the in-memory canonical list. The order is fixed:
//! pagination metadata must reflect the filtered total, not the full
//! collection, so reordering the stages changes semantics.

mod filter;
mod paginate;
mod sort;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use filter::filter_papers;
pub use paginate::{PageMeta, QueryResult, paginate};
pub use sort::sort_papers;

use crate::config::ui;
use crate::models::Paper;

/// Field a search query is matched against.
///
/// Parsing is total: an unrecognized name becomes [`SearchField::Unknown`],
/// whose search value is always empty — so any non-empty query against it
/// matches nothing. That degenerate behavior is deliberate and covered by a
/// regression test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    #[default]
    Title,
    Authors,
    Journal,
    Doi,
    Unknown,
}

impl SearchField {
    /// Parse a field selector name; unrecognized names yield `Unknown`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "title" => Self::Title,
            "authors" => Self::Authors,
            "journal" => Self::Journal,
            "doi" => Self::Doi,
            _ => Self::Unknown,
        }
    }
}

impl FromStr for SearchField {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Title => "title",
            Self::Authors => "authors",
            Self::Journal => "journal",
            Self::Doi => "doi",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Field the list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Year,
    Title,
    ImpactFactor,
    Authors,
    Journal,
}

impl FromStr for SortField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" => Ok(Self::Year),
            "title" => Ok(Self::Title),
            "impact-factor" | "impactFactor" => Ok(Self::ImpactFactor),
            "authors" => Ok(Self::Authors),
            "journal" => Ok(Self::Journal),
            _ => Err(ParseFieldError {
                value: s.to_string(),
                expected: "year, title, impact-factor, authors, journal",
            }),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Year => "year",
            Self::Title => "title",
            Self::ImpactFactor => "impact-factor",
            Self::Authors => "authors",
            Self::Journal => "journal",
        };
        f.write_str(name)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ParseFieldError { value: s.to_string(), expected: "asc, desc" }),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// Error for selector names with a fixed set of valid values.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown value '{value}', expected one of: {expected}")]
pub struct ParseFieldError {
    value: String,
    expected: &'static str,
}

/// The immutable tuple of parameters driving one pipeline recomputation.
///
/// Owned by the presentation controller; every interaction produces a new
/// value rather than mutating state the pipeline can see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParams {
    /// Search text; empty means no filtering.
    pub query: String,
    /// Field the search text is matched against.
    pub field: SearchField,
    /// Sort field.
    pub sort_by: SortField,
    /// Sort direction.
    pub order: SortOrder,
    /// 1-indexed page.
    pub page: usize,
    /// Papers per page.
    pub page_size: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            field: SearchField::Title,
            sort_by: SortField::Year,
            order: SortOrder::Desc,
            page: 1,
            page_size: ui::DEFAULT_PAGE_SIZE,
        }
    }
}

/// Run the full pipeline over the canonical list.
#[must_use]
pub fn run_query(papers: &[Paper], params: &QueryParams) -> QueryResult {
    let filtered = filter_papers(papers, &params.query, params.field);
    let sorted = sort_papers(&filtered, params.sort_by, params.order);
    paginate(&sorted, params.page, params.page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_field_parse_is_total() {
        assert_eq!(SearchField::parse("title"), SearchField::Title);
        assert_eq!(SearchField::parse("doi"), SearchField::Doi);
        assert_eq!(SearchField::parse("venue"), SearchField::Unknown);
        assert_eq!(SearchField::parse(""), SearchField::Unknown);
    }

    #[test]
    fn test_sort_field_rejects_unknown() {
        assert_eq!("impact-factor".parse::<SortField>(), Ok(SortField::ImpactFactor));
        assert_eq!("impactFactor".parse::<SortField>(), Ok(SortField::ImpactFactor));
        assert!("citations".parse::<SortField>().is_err());
    }

    #[test]
    fn test_default_params() {
        let params = QueryParams::default();
        assert_eq!(params.field, SearchField::Title);
        assert_eq!(params.sort_by, SortField::Year);
        assert_eq!(params.order, SortOrder::Desc);
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 12);
    }
}
