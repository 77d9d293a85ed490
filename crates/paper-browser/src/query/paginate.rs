//! Pagination stage: slice one page out of the (already filtered and
//! sorted) list and describe where it sits.

use serde::{Deserialize, Serialize};

use crate::models::Paper;

/// Pagination metadata for a derived page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// 1-indexed page the slice was taken at.
    pub page: usize,
    /// Requested page size.
    pub page_size: usize,
    /// Total records after filtering.
    pub total: usize,
    /// `ceil(total / page_size)`; 0 for an empty list.
    pub total_pages: usize,
    /// Whether a later page exists.
    pub has_next_page: bool,
    /// Whether an earlier page exists.
    pub has_prev_page: bool,
}

/// One derived page plus its metadata. Recomputed on every parameter change,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// The page slice, at most `page_size` papers.
    pub data: Vec<Paper>,
    /// Where this slice sits in the filtered list.
    pub meta: PageMeta,
}

/// Slice the given 1-indexed page out of the list.
///
/// Out-of-range pages (too high, or below 1) yield an empty slice with
/// correct metadata rather than an error; the slice bounds are clamped to
/// the list.
#[must_use]
pub fn paginate(papers: &[Paper], page: usize, page_size: usize) -> QueryResult {
    let page = page.max(1);
    let total = papers.len();
    let total_pages = if page_size == 0 { 0 } else { total.div_ceil(page_size) };

    let start = (page - 1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);

    QueryResult {
        data: papers[start..end].to_vec(),
        meta: PageMeta {
            page,
            page_size,
            total,
            total_pages,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        },
    }
}
