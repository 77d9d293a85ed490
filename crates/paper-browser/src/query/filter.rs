//! Filter stage: case-insensitive substring match on one search field.

use std::borrow::Cow;

use super::SearchField;
use crate::models::Paper;

/// Filter the list by a search query against one field.
///
/// An empty query is the identity. Matching lowercases both sides, so the
/// match is case-insensitive; the comparison is plain substring containment,
/// no tokenization or ranking.
#[must_use]
pub fn filter_papers(papers: &[Paper], query: &str, field: SearchField) -> Vec<Paper> {
    if query.is_empty() {
        return papers.to_vec();
    }

    let needle = query.to_lowercase();
    papers
        .iter()
        .filter(|paper| search_value(paper, field).to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// The haystack a query is matched against for each search field.
///
/// `Unknown` yields the empty string, which can never contain a non-empty
/// needle — an unrecognized field filters everything out by design.
fn search_value(paper: &Paper, field: SearchField) -> Cow<'_, str> {
    match field {
        SearchField::Title => Cow::Borrowed(paper.title.as_str()),
        SearchField::Authors => Cow::Owned(paper.authors_joined()),
        SearchField::Journal => Cow::Borrowed(paper.journal.as_str()),
        SearchField::Doi => Cow::Borrowed(paper.doi.as_str()),
        SearchField::Unknown => Cow::Borrowed(""),
    }
}
