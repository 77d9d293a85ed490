//! Normalization tests: every canonical field resolves through its alias
//! chain or degrades to its documented default.

use chrono::Datelike;
use serde_json::json;

use paper_browser::{RawPaperRecord, normalize};

#[test]
fn test_empty_object_gets_every_default() {
    let paper = normalize(&RawPaperRecord::new(json!({})));

    assert!(!paper.id.is_empty());
    assert_eq!(paper.title, "Untitled");
    assert_eq!(paper.authors, vec!["Unknown Author".to_string()]);
    assert_eq!(paper.year, chrono::Local::now().year());
    assert_eq!(paper.journal, "Unknown Journal");
    assert_eq!(paper.journal_details, "");
    assert_eq!(paper.doi, "");
    assert_eq!(paper.impact_factor, 0.0);
    assert_eq!(paper.pdf_url, "");
    assert_eq!(paper.abstract_text, "");
    assert!(paper.keywords.is_empty());
    assert_eq!(paper.citation_count, 0);
    assert_eq!(paper.published_date, None);
    assert_eq!(paper.publisher, "Unknown Publisher");
    assert_eq!(paper.journal_abbreviation, "");
    assert_eq!(paper.issn, "");
    assert_eq!(paper.service_type, "");
    assert_eq!(paper.subject_area, "");
}

#[test]
fn test_non_object_record_is_still_normalized() {
    let paper = normalize(&RawPaperRecord::new(json!(42)));
    assert_eq!(paper.title, "Untitled");

    let paper = normalize(&RawPaperRecord::new(json!(null)));
    assert_eq!(paper.authors, vec!["Unknown Author".to_string()]);
}

#[test]
fn test_end_to_end_record() {
    let raw = RawPaperRecord::new(json!({
        "papertitle": "A",
        "coauthors": "X, Y",
        "published_at": "2020-01-01",
        "journal": {"impactfactor": "2.5"}
    }));
    let paper = normalize(&raw);

    assert_eq!(paper.title, "A");
    assert_eq!(paper.authors, vec!["X".to_string(), "Y".to_string()]);
    assert_eq!(paper.year, 2020);
    assert_eq!(paper.impact_factor, 2.5);
    assert_eq!(paper.published_date, Some("2020-01-01".to_string()));
    // Journal has no title or abbreviation, so the default still applies.
    assert_eq!(paper.journal, "Unknown Journal");
}

#[test]
fn test_full_record_resolves_every_alias() {
    let raw = RawPaperRecord::new(json!({
        "id": 317,
        "papertitle": "Gene Editing Advances",
        "coauthors": "Doudna J, Charpentier E,",
        "published_at": "2021-03-04T10:30:00.000Z",
        "doi": "10.1000/xyz",
        "articlelink": "https://example.org/a.pdf",
        "abstract": "CRISPR systems...",
        "keywords": ["crispr", "cas9"],
        "citationCount": 812,
        "journal": {
            "title": "Nature Biotech",
            "journalabbreviation": "Nat. Biotech.",
            "impactfactor": "41.2",
            "issn": "1087-0156",
            "statementofscope": "Applied biological sciences."
        },
        "publisher": {"publishername": "Springer Nature"},
        "servicetype": {"servicename": "Open Access"},
        "salevelone": {"name": "Life Sciences"}
    }));
    let paper = normalize(&raw);

    assert_eq!(paper.id, "317");
    assert_eq!(paper.title, "Gene Editing Advances");
    assert_eq!(paper.authors, vec!["Doudna J".to_string(), "Charpentier E".to_string()]);
    assert_eq!(paper.year, 2021);
    assert_eq!(paper.journal, "Nature Biotech");
    assert_eq!(paper.journal_abbreviation, "Nat. Biotech.");
    assert_eq!(paper.journal_details, "Applied biological sciences.");
    assert_eq!(paper.impact_factor, 41.2);
    assert_eq!(paper.issn, "1087-0156");
    assert_eq!(paper.doi, "10.1000/xyz");
    assert_eq!(paper.pdf_url, "https://example.org/a.pdf");
    assert_eq!(paper.keywords, vec!["crispr".to_string(), "cas9".to_string()]);
    assert_eq!(paper.citation_count, 812);
    assert_eq!(paper.publisher, "Springer Nature");
    assert_eq!(paper.service_type, "Open Access");
    assert_eq!(paper.subject_area, "Life Sciences");
    assert_eq!(paper.raw_data, raw);
}

#[test]
fn test_title_alias_fallback() {
    let paper = normalize(&RawPaperRecord::new(json!({"title": "Only Title"})));
    assert_eq!(paper.title, "Only Title");

    let both = normalize(&RawPaperRecord::new(json!({
        "papertitle": "Preferred",
        "title": "Ignored"
    })));
    assert_eq!(both.title, "Preferred");
}

#[test]
fn test_journal_falls_back_to_abbreviation() {
    let paper = normalize(&RawPaperRecord::new(json!({
        "journal": {"journalabbreviation": "Nat. Biotech."}
    })));
    assert_eq!(paper.journal, "Nat. Biotech.");
}

#[test]
fn test_impact_factor_alternate_field() {
    let paper = normalize(&RawPaperRecord::new(json!({"journalaltimpactfactor": 3.8})));
    assert_eq!(paper.impact_factor, 3.8);

    // The nested value wins over the alternate.
    let nested = normalize(&RawPaperRecord::new(json!({
        "journal": {"impactfactor": 1.5},
        "journalaltimpactfactor": 3.8
    })));
    assert_eq!(nested.impact_factor, 1.5);
}

#[test]
fn test_unparseable_impact_factor_is_zero() {
    let paper = normalize(&RawPaperRecord::new(json!({
        "journal": {"impactfactor": "pending review"}
    })));
    assert_eq!(paper.impact_factor, 0.0);
}

#[test]
fn test_pdf_url_prefers_articlelink() {
    let paper = normalize(&RawPaperRecord::new(json!({
        "articlelink": "https://a.example/x.pdf",
        "pdfUrl": "https://b.example/y.pdf"
    })));
    assert_eq!(paper.pdf_url, "https://a.example/x.pdf");
}

#[test]
fn test_publisher_alias_chain() {
    let top_level = normalize(&RawPaperRecord::new(json!({"publishername": "Elsevier"})));
    assert_eq!(top_level.publisher, "Elsevier");
}

#[test]
fn test_scalar_keywords_become_empty() {
    let paper = normalize(&RawPaperRecord::new(json!({"keywords": "crispr, cas9"})));
    assert!(paper.keywords.is_empty());
}

#[test]
fn test_citation_count_coercions() {
    let string_count = normalize(&RawPaperRecord::new(json!({"citationCount": "12"})));
    assert_eq!(string_count.citation_count, 12);

    let negative = normalize(&RawPaperRecord::new(json!({"citationCount": -5})));
    assert_eq!(negative.citation_count, 0);
}

#[test]
fn test_published_date_falls_back_to_created_at() {
    let paper = normalize(&RawPaperRecord::new(json!({"created_at": "2019-07-01"})));
    assert_eq!(paper.published_date, Some("2019-07-01".to_string()));
    assert_eq!(paper.year, 2019);
}

#[test]
fn test_string_id_is_kept_verbatim() {
    let paper = normalize(&RawPaperRecord::new(json!({"id": "uuid-1234"})));
    assert_eq!(paper.id, "uuid-1234");
}
