//! Paper Browser - Entry Point
//!
//! One-shot mode prints a single derived page; `--interactive` starts the
//! line-oriented browser.

use std::convert::Infallible;
use std::str::FromStr;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use paper_browser::{
    Browser, Config, PaperApiClient, SearchField, SortField, SortOrder, app, config, formatters,
};

#[derive(Parser, Debug)]
#[command(name = "paper-browser")]
#[command(about = "Browse a remote collection of accepted research papers")]
#[command(version)]
struct Cli {
    /// Papers endpoint
    #[arg(long, env = "PAPER_API_URL", default_value = config::api::PAPERS_URL)]
    endpoint: String,

    /// Search text applied before sorting and pagination
    #[arg(long, default_value = "")]
    query: String,

    /// Field to search: title, authors, journal, or doi
    #[arg(long, default_value = "title", value_parser = parse_search_field)]
    field: SearchField,

    /// Sort field: year, title, impact-factor, authors, or journal
    #[arg(long, default_value = "year", value_parser = SortField::from_str)]
    sort_by: SortField,

    /// Sort direction: asc or desc
    #[arg(long, default_value = "desc", value_parser = SortOrder::from_str)]
    order: SortOrder,

    /// 1-indexed page to print
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Papers per page
    #[arg(long, default_value_t = config::ui::DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Output format for one-shot mode
    #[arg(long, default_value = "markdown")]
    format: OutputFormat,

    /// Start the interactive browser instead of printing one page
    #[arg(long)]
    interactive: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// Rendered cards
    #[default]
    Markdown,
    /// The raw `{data, meta}` page
    Json,
}

fn parse_search_field(s: &str) -> Result<SearchField, Infallible> {
    Ok(SearchField::parse(s))
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let config = Config::new(&cli.endpoint)?;
    let client = PaperApiClient::new(config)?;

    tracing::info!(endpoint = %client.endpoint(), "loading paper collection");

    let mut browser = match Browser::load(&client).await {
        Ok(browser) => browser,
        Err(e) => {
            // A failed load is terminal; rerunning the browser is the retry.
            eprintln!("Error loading papers: {}", e.user_message());
            std::process::exit(1);
        }
    };

    if cli.interactive {
        return app::run_interactive(browser).await;
    }

    browser.set_query(cli.query);
    browser.set_field(cli.field);
    browser.set_sort(cli.sort_by);
    browser.set_order(cli.order);
    browser.set_page_size(cli.page_size);
    browser.set_page(cli.page);

    let result = browser.results();
    match cli.format {
        OutputFormat::Markdown => {
            println!("{}", formatters::format_results(&result, browser.params()));
        }
        OutputFormat::Json => println!("{}", formatters::format_results_json(&result)?),
    }

    Ok(())
}
