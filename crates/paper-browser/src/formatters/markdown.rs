//! Markdown output formatting for cards and the detail view.

use std::borrow::Cow;

use crate::config::ui;
use crate::models::Paper;
use crate::query::{QueryParams, QueryResult};

use super::pager;

/// Format one derived page of results: header, cards, and the pager block.
#[must_use]
pub fn format_results(result: &QueryResult, params: &QueryParams) -> String {
    let mut output = format!("# Research Papers ({} results)\n\n", result.meta.total);

    if !params.query.is_empty() {
        output.push_str(&format!(
            "Searching for \"{}\" in {} | sorted by {} ({})\n\n",
            params.query, params.field, params.sort_by, params.order
        ));
    }

    if result.data.is_empty() {
        output.push_str("No papers found.\n");
        return output;
    }

    let offset = (result.meta.page - 1) * result.meta.page_size;
    for (i, paper) in result.data.iter().enumerate() {
        output.push_str(&format_paper_card(paper, offset + i + 1));
        output.push_str("\n---\n\n");
    }

    if let Some(pager_block) = pager::format_pager(&result.meta) {
        output.push_str(&pager_block);
    }

    output
}

/// Format a single paper as a card.
#[must_use]
pub fn format_paper_card(paper: &Paper, index: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("## {}. {}\n\n", index, paper.title));
    output.push_str(&format!("**Authors**: {}\n\n", paper.authors_joined()));

    let meta = vec![
        format!("**Journal**: {}", paper.journal),
        format!("**Year**: {}", paper.year),
        format!("**Impact**: {}", paper.impact_factor_label()),
    ];
    output.push_str(&format!("{}\n\n", meta.join(" | ")));

    output.push_str(&format!("**Publisher**: {}\n\n", paper.publisher));

    if !paper.doi.is_empty() {
        output.push_str(&format!("**DOI**: {}\n\n", paper.doi));
    }

    if paper.has_pdf() {
        output.push_str(&format!("**PDF**: [Download]({})\n\n", paper.pdf_url));
    }

    if !paper.abstract_text.is_empty() {
        output.push_str(&format!(
            "**Abstract**: {}\n",
            truncate_chars(&paper.abstract_text, ui::CARD_ABSTRACT_CHARS)
        ));
    }

    output
}

/// Format a paper's full detail view (the modal analog).
#[must_use]
pub fn format_paper_details(paper: &Paper) -> String {
    let mut output = format!("# {}\n\n", paper.title);

    output.push_str(&format!("**Authors**: {}\n\n", paper.authors_joined()));

    let mut meta = vec![
        format!("**Journal**: {}", paper.journal),
        format!("**Year**: {}", paper.year),
        format!("**Impact**: {}", paper.impact_factor_label()),
        format!("**Citations**: {}", paper.citation_count),
    ];
    if !paper.journal_abbreviation.is_empty() {
        meta.push(format!("**Abbrev**: {}", paper.journal_abbreviation));
    }
    output.push_str(&format!("{}\n\n", meta.join(" | ")));

    output.push_str(&format!("**Published**: {}\n\n", format_date(paper.published_date.as_deref())));
    output.push_str(&format!("**Publisher**: {}\n\n", paper.publisher));

    if !paper.issn.is_empty() {
        output.push_str(&format!("**ISSN**: {}\n\n", paper.issn));
    }
    if !paper.doi.is_empty() {
        output.push_str(&format!("**DOI**: {}\n\n", paper.doi));
    }
    if !paper.service_type.is_empty() {
        output.push_str(&format!("**Service Type**: {}\n\n", paper.service_type));
    }
    if !paper.subject_area.is_empty() {
        output.push_str(&format!("**Subject Area**: {}\n\n", paper.subject_area));
    }
    if !paper.keywords.is_empty() {
        output.push_str(&format!("**Keywords**: {}\n\n", paper.keywords.join(", ")));
    }
    if paper.has_pdf() {
        output.push_str(&format!("**PDF**: [Download]({})\n\n", paper.pdf_url));
    }
    if !paper.journal_details.is_empty() {
        output.push_str(&format!("**Journal Scope**: {}\n\n", paper.journal_details));
    }
    if !paper.abstract_text.is_empty() {
        output.push_str(&format!("**Abstract**: {}\n", paper.abstract_text));
    }

    output
}

/// Human-readable publication date: `June 12, 2017`, the raw value when it
/// does not parse, `N/A` when absent.
fn format_date(date: Option<&str>) -> String {
    let Some(date) = date else {
        return "N/A".to_string();
    };

    let parsed = chrono::DateTime::parse_from_rfc3339(date)
        .map(|dt| dt.date_naive())
        .or_else(|_| chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d"));

    match parsed {
        Ok(d) => d.format("%B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Truncate on a character boundary, appending `...` when shortened.
fn truncate_chars(s: &str, max_chars: usize) -> Cow<'_, str> {
    match s.char_indices().nth(max_chars) {
        Some((byte_index, _)) => Cow::Owned(format!("{}...", &s[..byte_index])),
        None => Cow::Borrowed(s),
    }
}
