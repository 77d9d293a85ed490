//! Data source gateway: the one remote fetch.
//!
//! A single GET against the papers endpoint, returning the whole collection
//! as raw records. The fetch either fully succeeds or fully fails — there is
//! no partial result, no retry, and no caching. A second entry point carries
//! the server-side filtered-fetch parameters the shipped browser does not
//! use.

mod params;

use reqwest::Client;
use serde_json::Value;

pub use params::{RemotePagination, RemoteQuery};

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::RawPaperRecord;

/// HTTP client for the papers endpoint.
#[derive(Clone)]
pub struct PaperApiClient {
    http: Client,
    endpoint: url::Url,
}

impl PaperApiClient {
    /// Create a new client with the given configuration.
    ///
    /// No request timeout is configured: a hung request blocks the load
    /// until the process is restarted, matching the reference behavior.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            "application/json".parse().expect("valid content-type header"),
        );

        let http = Client::builder().default_headers(headers).gzip(true).build()?;

        Ok(Self { http, endpoint: config.endpoint })
    }

    /// The endpoint this client fetches from.
    #[must_use]
    pub fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }

    /// Fetch the whole paper collection.
    ///
    /// The body may be a bare JSON array of records or an envelope with a
    /// `data` array; both yield the same list.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, a non-2xx status, or a body that
    /// is not a record list.
    pub async fn fetch_papers(&self) -> ClientResult<Vec<RawPaperRecord>> {
        tracing::debug!(url = %self.endpoint, "fetching paper collection");

        let response = self.http.get(self.endpoint.clone()).send().await?;
        let response = Self::handle_response(response).await?;
        let body: Value = response.json().await?;

        let records = Self::records_from_body(body)?;
        tracing::debug!(count = records.len(), "fetched raw records");
        Ok(records)
    }

    /// Fetch one remotely-filtered page of the collection.
    ///
    /// Appends `$containsi`-style filter, `pagination[...]`, `sort`, and
    /// `populate` parameters so the endpoint does the work the shipped
    /// browser otherwise does client-side. Kept as the alternative path;
    /// nothing in the interactive browser calls it.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, a non-2xx status, or a body that
    /// is not a record list.
    pub async fn fetch_papers_filtered(
        &self,
        query: &RemoteQuery,
    ) -> ClientResult<(Vec<RawPaperRecord>, Option<RemotePagination>)> {
        let params = query.to_params();
        tracing::debug!(url = %self.endpoint, params = ?params, "fetching filtered page");

        let response = self.http.get(self.endpoint.clone()).query(&params).send().await?;
        let response = Self::handle_response(response).await?;
        let body: Value = response.json().await?;

        let pagination = body
            .get("meta")
            .and_then(|meta| meta.get("pagination"))
            .and_then(|p| serde_json::from_value(p.clone()).ok());
        let records = Self::records_from_body(body)?;

        Ok((records, pagination))
    }

    /// Map non-2xx statuses to errors.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "papers endpoint returned an error status");
        Err(ClientError::status(status.as_u16(), message))
    }

    /// Extract the record list from either supported body shape.
    fn records_from_body(body: Value) -> ClientResult<Vec<RawPaperRecord>> {
        let items = match body {
            Value::Array(items) => items,
            Value::Object(mut object) => match object.remove("data") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(ClientError::unexpected_body(
                        "expected an array of records or an envelope with a 'data' array",
                    ));
                }
            },
            _ => {
                return Err(ClientError::unexpected_body("expected an array of records"));
            }
        };

        Ok(items.into_iter().map(RawPaperRecord::new).collect())
    }
}

impl std::fmt::Debug for PaperApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaperApiClient").field("endpoint", &self.endpoint.as_str()).finish()
    }
}
