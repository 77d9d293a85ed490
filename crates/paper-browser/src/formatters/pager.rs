//! Pager rendering: the results-range line and the page-number window.

use crate::config::ui;
use crate::query::PageMeta;

/// One slot in the pager: a page number or an ellipsis gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number.
    Page(usize),
    /// A gap between the window and the first/last page.
    Ellipsis,
}

/// The window of visible page numbers around the current page.
///
/// At most [`ui::MAX_VISIBLE_PAGES`] numbers are shown. Small page counts
/// list every page; beyond that the window is the current page ±2, with the
/// first and last pages pinned and ellipses marking the gaps once the window
/// detaches from either end.
#[must_use]
pub fn page_numbers(current_page: usize, total_pages: usize) -> Vec<PageItem> {
    let mut pages = Vec::new();

    if total_pages <= ui::MAX_VISIBLE_PAGES {
        pages.extend((1..=total_pages).map(PageItem::Page));
        return pages;
    }

    let start = current_page.saturating_sub(2).max(1);
    let end = (current_page + 2).min(total_pages);

    if start > 1 {
        pages.push(PageItem::Page(1));
        if start > 2 {
            pages.push(PageItem::Ellipsis);
        }
    }

    pages.extend((start..=end).map(PageItem::Page));

    if end < total_pages {
        if end < total_pages - 1 {
            pages.push(PageItem::Ellipsis);
        }
        pages.push(PageItem::Page(total_pages));
    }

    pages
}

/// 1-indexed bounds of the current page within the filtered results, for the
/// `Showing X-Y of Z results` line.
#[must_use]
pub fn results_range(meta: &PageMeta) -> (usize, usize) {
    let start = (meta.page - 1) * meta.page_size + 1;
    let end = (meta.page * meta.page_size).min(meta.total);
    (start, end)
}

/// Render the pager block, or `None` when there is nothing to page through
/// (a single page, or no results at all).
#[must_use]
pub fn format_pager(meta: &PageMeta) -> Option<String> {
    if meta.total_pages <= 1 || meta.total == 0 {
        return None;
    }

    let (start, end) = results_range(meta);
    let mut output = format!("Showing {start}-{end} of {} results\n", meta.total);

    output.push_str("Pages:");
    for item in page_numbers(meta.page, meta.total_pages) {
        match item {
            PageItem::Page(page) if page == meta.page => {
                output.push_str(&format!(" [{page}]"));
            }
            PageItem::Page(page) => output.push_str(&format!(" {page}")),
            PageItem::Ellipsis => output.push_str(" ..."),
        }
    }
    output.push('\n');

    Some(output)
}
