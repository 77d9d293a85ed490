//! Query pipeline tests: filter, sort, paginate, and their fixed composition.

use serde_json::json;

use paper_browser::query::{filter_papers, paginate, sort_papers};
use paper_browser::{
    QueryParams, RawPaperRecord, SearchField, SortField, SortOrder, normalize, run_query,
};

fn paper(id: u32, title: &str, coauthors: &str, journal: &str, doi: &str, year: i32) -> paper_browser::Paper {
    normalize(&RawPaperRecord::new(json!({
        "id": id,
        "papertitle": title,
        "coauthors": coauthors,
        "journal": {"title": journal},
        "doi": doi,
        "published_at": format!("{year}-06-01"),
    })))
}

fn sample_papers() -> Vec<paper_browser::Paper> {
    vec![
        paper(1, "Deep Learning Methods", "LeCun Y, Bengio Y", "Nature", "10.1/dl", 2015),
        paper(2, "Shallow Water Equations", "Stokes G", "J. Fluid Mech.", "10.1/sw", 1987),
        paper(3, "Deep Sea Biology", "Cousteau J", "Marine Biology", "10.1/ds", 2015),
        paper(4, "Graph Theory Basics", "Erdos P", "Combinatorica", "10.1/gt", 1959),
    ]
}

#[test]
fn test_empty_query_is_identity() {
    let papers = sample_papers();
    for field in [
        SearchField::Title,
        SearchField::Authors,
        SearchField::Journal,
        SearchField::Doi,
        SearchField::Unknown,
    ] {
        assert_eq!(filter_papers(&papers, "", field), papers);
    }
}

#[test]
fn test_unknown_field_excludes_everything() {
    let papers = sample_papers();
    assert!(filter_papers(&papers, "deep", SearchField::Unknown).is_empty());
    assert_eq!(filter_papers(&papers, "", SearchField::Unknown).len(), papers.len());
}

#[test]
fn test_filter_by_each_field() {
    let papers = sample_papers();

    let by_title = filter_papers(&papers, "deep", SearchField::Title);
    assert_eq!(by_title.len(), 2);

    let by_authors = filter_papers(&papers, "bengio", SearchField::Authors);
    assert_eq!(by_authors.len(), 1);
    assert_eq!(by_authors[0].title, "Deep Learning Methods");

    let by_journal = filter_papers(&papers, "fluid", SearchField::Journal);
    assert_eq!(by_journal.len(), 1);

    let by_doi = filter_papers(&papers, "10.1/gt", SearchField::Doi);
    assert_eq!(by_doi.len(), 1);
}

#[test]
fn test_sort_by_year_ascending_bounds() {
    let sorted = sort_papers(&sample_papers(), SortField::Year, SortOrder::Asc);
    assert_eq!(sorted.first().unwrap().year, 1959);
    assert_eq!(sorted.last().unwrap().year, 2015);
}

#[test]
fn test_sort_is_stable_for_equal_keys_in_both_orders() {
    let papers = sample_papers();
    // Papers 1 and 3 share year 2015; they must keep their input order.
    for order in [SortOrder::Asc, SortOrder::Desc] {
        let sorted = sort_papers(&papers, SortField::Year, order);
        let ids_2015: Vec<&str> = sorted
            .iter()
            .filter(|p| p.year == 2015)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids_2015, ["1", "3"], "order {order} broke stability");
    }
}

#[test]
fn test_sort_by_impact_factor_coerces_missing_to_zero() {
    let mut papers = sample_papers();
    papers[2] = normalize(&RawPaperRecord::new(json!({
        "id": 3,
        "papertitle": "Deep Sea Biology",
        "journal": {"title": "Marine Biology", "impactfactor": "4.5"}
    })));

    let sorted = sort_papers(&papers, SortField::ImpactFactor, SortOrder::Desc);
    assert_eq!(sorted[0].id, "3");
    // The zero-impact papers keep input order behind it.
    let rest: Vec<&str> = sorted[1..].iter().map(|p| p.id.as_str()).collect();
    assert_eq!(rest, ["1", "2", "4"]);
}

#[test]
fn test_paginate_last_partial_page() {
    let papers: Vec<_> = (0..25)
        .map(|i| paper(i, &format!("Paper {i}"), "A", "J", "d", 2000 + i as i32))
        .collect();

    let result = paginate(&papers, 3, 12);
    assert_eq!(result.data.len(), 1);
    assert_eq!(result.meta.total, 25);
    assert_eq!(result.meta.total_pages, 3);
    assert!(!result.meta.has_next_page);
    assert!(result.meta.has_prev_page);
}

#[test]
fn test_paginate_out_of_range_page_is_empty_not_an_error() {
    let papers: Vec<_> = (0..10)
        .map(|i| paper(i, &format!("Paper {i}"), "A", "J", "d", 2000))
        .collect();

    let result = paginate(&papers, 99, 12);
    assert!(result.data.is_empty());
    assert_eq!(result.meta.page, 99);
    assert_eq!(result.meta.total, 10);
    assert_eq!(result.meta.total_pages, 1);
    assert!(!result.meta.has_next_page);
    assert!(result.meta.has_prev_page);
}

#[test]
fn test_pipeline_meta_reflects_filtered_total() {
    let papers: Vec<_> = (0..30)
        .map(|i| {
            let title = if i % 3 == 0 { format!("Deep {i}") } else { format!("Other {i}") };
            paper(i, &title, "A", "J", "d", 2000 + i as i32)
        })
        .collect();

    let params = QueryParams {
        query: "deep".to_string(),
        field: SearchField::Title,
        sort_by: SortField::Year,
        order: SortOrder::Asc,
        page: 1,
        page_size: 6,
    };
    let result = run_query(&papers, &params);

    // 10 of 30 match; pagination describes the filtered set, not the full one.
    assert_eq!(result.meta.total, 10);
    assert_eq!(result.meta.total_pages, 2);
    assert_eq!(result.data.len(), 6);
    assert!(result.meta.has_next_page);
    // Sorted ascending within the filtered set.
    assert_eq!(result.data[0].title, "Deep 0");
}

#[test]
fn test_pipeline_empty_filtered_set() {
    let result = run_query(
        &sample_papers(),
        &QueryParams { query: "zzz-no-match".to_string(), ..QueryParams::default() },
    );
    assert!(result.data.is_empty());
    assert_eq!(result.meta.total, 0);
    assert_eq!(result.meta.total_pages, 0);
}
