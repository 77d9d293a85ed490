//! Paper Browser
//!
//! Client-side browsing for a fixed collection of academic paper metadata
//! served by one remote read-only endpoint. The collection is fetched once,
//! each raw record is normalized into a canonical shape, and all searching,
//! sorting, and pagination happen in memory on every interaction.
//!
//! # Pipeline
//!
//! `fetch → normalize → (filter → sort → paginate)` — the query stages are
//! pure and always run in that order, so pagination metadata reflects the
//! filtered total.
//!
//! # Example
//!
//! ```no_run
//! use paper_browser::{Browser, Config, PaperApiClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PaperApiClient::new(Config::from_env()?)?;
//!     let mut browser = Browser::load(&client).await?;
//!
//!     browser.set_query("crispr");
//!     let page = browser.results();
//!     println!("{} matches", page.meta.total);
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod client;
pub mod config;
pub mod debounce;
pub mod error;
pub mod formatters;
pub mod models;
pub mod normalize;
pub mod query;

pub use app::Browser;
pub use client::PaperApiClient;
pub use config::Config;
pub use debounce::Debouncer;
pub use error::{ClientError, ClientResult};
pub use models::{Paper, RawPaperRecord};
pub use normalize::{normalize, normalize_all};
pub use query::{
    PageMeta, QueryParams, QueryResult, SearchField, SortField, SortOrder, run_query,
};
