//! Query parameters for the server-side filtered fetch.
//!
//! The endpoint understands Strapi-style query syntax: `$containsi` filters,
//! bracketed pagination parameters, and `attr:direction` sort values.

use serde::Deserialize;

use crate::config::ui;
use crate::query::{SearchField, SortField, SortOrder};

/// Parameters for one remotely-filtered page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteQuery {
    /// Search text; `None` requests the page unfiltered.
    pub query: Option<String>,
    /// Field the search text is matched against.
    pub field: SearchField,
    /// Sort field.
    pub sort_by: SortField,
    /// Sort direction.
    pub order: SortOrder,
    /// 1-indexed page.
    pub page: usize,
    /// Records per page.
    pub page_size: usize,
}

impl Default for RemoteQuery {
    fn default() -> Self {
        Self {
            query: None,
            field: SearchField::Title,
            sort_by: SortField::Year,
            order: SortOrder::Desc,
            page: 1,
            page_size: ui::DEFAULT_PAGE_SIZE,
        }
    }
}

impl RemoteQuery {
    /// Build the query-parameter list for this request.
    ///
    /// Related records (journal, publisher, and the rest) are always
    /// requested expanded; without `populate` the endpoint strips them and
    /// normalization would lose every nested field.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("pagination[page]".to_string(), self.page.to_string()),
            ("pagination[pageSize]".to_string(), self.page_size.to_string()),
            ("sort".to_string(), format!("{}:{}", remote_sort_attr(self.sort_by), self.order)),
            ("populate".to_string(), "*".to_string()),
        ];

        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            if let Some(key) = remote_filter_key(self.field) {
                params.push((key.to_string(), query.to_string()));
            }
        }

        params
    }
}

/// Remote pagination metadata from an envelope response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePagination {
    /// 1-indexed page the server returned.
    pub page: usize,
    /// Server page size.
    #[serde(default)]
    pub page_size: usize,
    /// Number of pages on the server.
    #[serde(default)]
    pub page_count: usize,
    /// Total matching records on the server.
    #[serde(default)]
    pub total: usize,
}

/// Filter parameter key per search field; `Unknown` sends no filter.
fn remote_filter_key(field: SearchField) -> Option<&'static str> {
    match field {
        SearchField::Title => Some("filters[papertitle][$containsi]"),
        SearchField::Authors => Some("filters[coauthors][$containsi]"),
        SearchField::Journal => Some("filters[journal][title][$containsi]"),
        SearchField::Doi => Some("filters[doi][$containsi]"),
        SearchField::Unknown => None,
    }
}

/// Sort attribute per sort field, in the names the remote records use.
fn remote_sort_attr(field: SortField) -> &'static str {
    match field {
        SortField::Year => "published_at",
        SortField::Title => "papertitle",
        SortField::ImpactFactor => "journalaltimpactfactor",
        SortField::Authors => "coauthors",
        SortField::Journal => "journal.title",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_have_no_filter() {
        let params = RemoteQuery::default().to_params();
        assert!(params.iter().any(|(k, v)| k == "pagination[page]" && v == "1"));
        assert!(params.iter().any(|(k, v)| k == "sort" && v == "published_at:desc"));
        assert!(params.iter().any(|(k, v)| k == "populate" && v == "*"));
        assert!(!params.iter().any(|(k, _)| k.starts_with("filters")));
    }

    #[test]
    fn test_filter_key_follows_search_field() {
        let query = RemoteQuery {
            query: Some("nature".to_string()),
            field: SearchField::Journal,
            ..RemoteQuery::default()
        };
        let params = query.to_params();
        assert!(
            params
                .iter()
                .any(|(k, v)| k == "filters[journal][title][$containsi]" && v == "nature")
        );
    }

    #[test]
    fn test_unknown_field_sends_no_filter() {
        let query = RemoteQuery {
            query: Some("anything".to_string()),
            field: SearchField::Unknown,
            ..RemoteQuery::default()
        };
        assert!(!query.to_params().iter().any(|(k, _)| k.starts_with("filters")));
    }
}
