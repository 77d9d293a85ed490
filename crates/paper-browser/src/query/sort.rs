//! Sort stage: numeric or case-insensitive string ordering, always stable.

use std::cmp::Ordering;

use super::{SortField, SortOrder};
use crate::models::Paper;

/// Sort the list by one field; returns a new sequence, the input is left
/// untouched.
///
/// `year` and `impact-factor` compare numerically with non-finite values
/// coerced to 0; every other field compares its Unicode-lowercased string
/// key. The underlying sort is stable and the descending direction reverses
/// the comparator rather than the output, so equal keys keep their original
/// relative order in both directions.
#[must_use]
pub fn sort_papers(papers: &[Paper], field: SortField, order: SortOrder) -> Vec<Paper> {
    let mut sorted = papers.to_vec();

    match field {
        SortField::Year | SortField::ImpactFactor => {
            sorted.sort_by(|a, b| {
                directed(numeric_key(a, field).total_cmp(&numeric_key(b, field)), order)
            });
        }
        SortField::Title | SortField::Authors | SortField::Journal => {
            sorted.sort_by(|a, b| {
                let a_key = string_key(a, field).to_lowercase();
                let b_key = string_key(b, field).to_lowercase();
                directed(a_key.cmp(&b_key), order)
            });
        }
    }

    sorted
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

fn numeric_key(paper: &Paper, field: SortField) -> f64 {
    let value = match field {
        SortField::Year => f64::from(paper.year),
        SortField::ImpactFactor => paper.impact_factor,
        _ => 0.0,
    };
    if value.is_finite() { value } else { 0.0 }
}

fn string_key(paper: &Paper, field: SortField) -> &str {
    match field {
        SortField::Title => &paper.title,
        SortField::Authors => paper.first_author(),
        SortField::Journal => &paper.journal,
        _ => "",
    }
}
