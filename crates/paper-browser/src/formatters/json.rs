//! JSON output formatting for scripting consumers.

use crate::query::QueryResult;

/// Serialize a derived page as pretty JSON (`{data, meta}` with camelCase
/// keys, the shape downstream scripts expect).
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn format_results_json(result: &QueryResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
