//! Output formatting for the presentation layer.

pub mod json;
pub mod markdown;
pub mod pager;

pub use json::format_results_json;
pub use markdown::{format_paper_card, format_paper_details, format_results};
pub use pager::{PageItem, format_pager, page_numbers, results_range};
