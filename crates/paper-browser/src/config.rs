//! Configuration for the paper browser.

use url::Url;

/// API configuration constants.
pub mod api {
    /// Fixed remote endpoint serving the accepted-papers collection.
    pub const PAPERS_URL: &str = "https://easydash.enago.com/acceptedpapers";
}

/// UI configuration constants.
pub mod ui {
    use std::time::Duration;

    /// Default number of papers per page.
    pub const DEFAULT_PAGE_SIZE: usize = 12;

    /// Page sizes offered by the pager.
    pub const PAGE_SIZE_CHOICES: &[usize] = &[6, 12, 24, 48];

    /// Maximum page numbers shown in the pager before ellipsis truncation.
    pub const MAX_VISIBLE_PAGES: usize = 5;

    /// Delay used to coalesce rapid search input into one query update.
    pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

    /// Abstract length shown on a card before truncation.
    pub const CARD_ABSTRACT_CHARS: usize = 150;
}

/// Browser configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint serving the paper collection.
    pub endpoint: Url,
}

impl Config {
    /// Create a configuration for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint is not a valid URL.
    pub fn new(endpoint: &str) -> anyhow::Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| anyhow::anyhow!("invalid papers endpoint '{endpoint}': {e}"))?;
        Ok(Self { endpoint })
    }

    /// Create configuration from the environment, falling back to the fixed
    /// production endpoint.
    ///
    /// # Errors
    ///
    /// Returns error if `PAPER_API_URL` is set to an invalid URL.
    pub fn from_env() -> anyhow::Result<Self> {
        let endpoint =
            std::env::var("PAPER_API_URL").unwrap_or_else(|_| api::PAPERS_URL.to_string());
        Self::new(&endpoint)
    }

    /// Create a test configuration pointed at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            endpoint: Url::parse(&format!("{base_url}/acceptedpapers"))
                .expect("valid mock server url"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { endpoint: Url::parse(api::PAPERS_URL).expect("valid papers endpoint") }
    }
}
