//! Presentation controller: owns the canonical list and the current query
//! parameters, and drives the pipeline on every interaction.

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::client::PaperApiClient;
use crate::config::ui;
use crate::debounce::Debouncer;
use crate::error::ClientResult;
use crate::formatters;
use crate::models::Paper;
use crate::normalize;
use crate::query::{
    QueryParams, QueryResult, SearchField, SortField, SortOrder, run_query,
};

/// The browsing session over one loaded collection.
///
/// Holds the canonical list (created once per successful fetch, never
/// mutated) and the current [`QueryParams`] value. Every setter produces a
/// fresh parameters value; [`results`](Self::results) recomputes the derived
/// page from scratch each time.
#[derive(Debug, Clone)]
pub struct Browser {
    papers: Vec<Paper>,
    params: QueryParams,
}

impl Browser {
    /// Start a session over an already-normalized collection.
    #[must_use]
    pub fn new(papers: Vec<Paper>) -> Self {
        Self { papers, params: QueryParams::default() }
    }

    /// Fetch and normalize the collection, then start a session over it.
    ///
    /// # Errors
    ///
    /// Returns error when the fetch fails; that error is terminal for the
    /// session — rerunning the browser is the retry.
    pub async fn load(client: &PaperApiClient) -> ClientResult<Self> {
        let raw = client.fetch_papers().await?;
        let papers = normalize::normalize_all(&raw);
        tracing::info!(count = papers.len(), "loaded paper collection");
        Ok(Self::new(papers))
    }

    /// Number of papers in the loaded collection, before filtering.
    #[must_use]
    pub fn paper_count(&self) -> usize {
        self.papers.len()
    }

    /// The current query parameters.
    #[must_use]
    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Recompute the derived page for the current parameters.
    #[must_use]
    pub fn results(&self) -> QueryResult {
        run_query(&self.papers, &self.params)
    }

    /// Set the search text. Resets to page 1: the old page may not exist in
    /// the newly filtered set.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.params.query = query.into();
        self.params.page = 1;
    }

    /// Set the field searched. Resets to page 1.
    pub fn set_field(&mut self, field: SearchField) {
        self.params.field = field;
        self.params.page = 1;
    }

    /// Set the sort field. The current page is kept; sorting reorders the
    /// same filtered set.
    pub fn set_sort(&mut self, sort_by: SortField) {
        self.params.sort_by = sort_by;
    }

    /// Set the sort direction. The current page is kept.
    pub fn set_order(&mut self, order: SortOrder) {
        self.params.order = order;
    }

    /// Jump to a page (1-indexed; values below 1 are clamped to 1).
    pub fn set_page(&mut self, page: usize) {
        self.params.page = page.max(1);
    }

    /// Advance one page, if a next page exists.
    pub fn next_page(&mut self) {
        if self.results().meta.has_next_page {
            self.params.page += 1;
        }
    }

    /// Go back one page, if a previous page exists.
    pub fn prev_page(&mut self) {
        if self.params.page > 1 {
            self.params.page -= 1;
        }
    }

    /// Set the page size. Resets to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.params.page_size = page_size.max(1);
        self.params.page = 1;
    }
}

/// Outcome of one interactive command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Run the interactive line-oriented browser over stdin.
///
/// Search input is debounced: rapid `search` commands coalesce into one
/// query update, delivered back into the loop over a channel so all state
/// changes stay on this task.
///
/// # Errors
///
/// Returns error on I/O failure reading stdin.
pub async fn run_interactive(mut browser: Browser) -> anyhow::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<String>();
    let mut debouncer = Debouncer::new(ui::SEARCH_DEBOUNCE, move |query: String| {
        let _ = tx.send(query);
    });

    tracing::info!(papers = browser.paper_count(), "interactive session started");
    render(&browser);
    print_help();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    None => break, // EOF
                    Some(line) => {
                        if handle_command(&mut browser, &mut debouncer, line.trim()) == Flow::Quit {
                            break;
                        }
                    }
                }
            }
            Some(query) = rx.recv() => {
                browser.set_query(query);
                render(&browser);
            }
        }
    }

    tracing::info!("interactive session ended");
    Ok(())
}

fn handle_command(browser: &mut Browser, debouncer: &mut Debouncer<String>, line: &str) -> Flow {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "quit" | "exit" => return Flow::Quit,
        "help" => print_help(),
        "search" => {
            // Coalesced: only the last search in a burst runs.
            debouncer.call(rest.to_string());
        }
        "field" => {
            browser.set_field(SearchField::parse(rest));
            render(browser);
        }
        "sort" => match rest.parse::<SortField>() {
            Ok(sort_by) => {
                browser.set_sort(sort_by);
                render(browser);
            }
            Err(e) => println!("{e}"),
        },
        "order" => match rest.parse::<SortOrder>() {
            Ok(order) => {
                browser.set_order(order);
                render(browser);
            }
            Err(e) => println!("{e}"),
        },
        "page" => match rest.parse::<usize>() {
            Ok(page) => {
                browser.set_page(page);
                render(browser);
            }
            Err(_) => println!("usage: page <number>"),
        },
        "next" => {
            browser.next_page();
            render(browser);
        }
        "prev" => {
            browser.prev_page();
            render(browser);
        }
        "size" => match rest.parse::<usize>() {
            Ok(size) if ui::PAGE_SIZE_CHOICES.contains(&size) => {
                browser.set_page_size(size);
                render(browser);
            }
            _ => println!("page size must be one of: {:?}", ui::PAGE_SIZE_CHOICES),
        },
        "show" => match rest.parse::<usize>() {
            Ok(index) if index >= 1 => {
                let result = browser.results();
                match result.data.get(index - 1) {
                    Some(paper) => println!("{}", formatters::format_paper_details(paper)),
                    None => println!("no paper #{index} on this page"),
                }
            }
            _ => println!("usage: show <number on current page>"),
        },
        _ => println!("unknown command '{command}' (try 'help')"),
    }

    Flow::Continue
}

fn render(browser: &Browser) {
    println!("{}", formatters::format_results(&browser.results(), browser.params()));
}

fn print_help() {
    println!(
        "commands:\n  \
         search <text>   filter by the current field (empty text clears)\n  \
         field <name>    search field: title, authors, journal, doi\n  \
         sort <name>     sort field: year, title, impact-factor, authors, journal\n  \
         order <dir>     asc or desc\n  \
         page <n> | next | prev\n  \
         size <n>        papers per page: 6, 12, 24, 48\n  \
         show <n>        full details for paper #n on this page\n  \
         quit"
    );
}
