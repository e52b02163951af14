use std::collections::HashSet;

use radar_logging::radar_warn;
use serde::Deserialize;
use serde_json::Value;

use crate::RepoSummary;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("response body is not valid JSON: {0}")]
    Json(String),
    #[error("response body has no `items` array")]
    MissingItems,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Option<Vec<Value>>,
}

/// Fields read from one search item. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct RawItem {
    id: u64,
    name: String,
    description: Option<String>,
    stargazers_count: u64,
    html_url: String,
    language: Option<String>,
}

/// Decode a search response into validated summaries.
///
/// Items are validated one by one: malformed entries are logged and skipped,
/// and a repeated id keeps its first occurrence.
pub fn decode_search_response(bytes: &[u8]) -> Result<Vec<RepoSummary>, DecodeError> {
    let response: SearchResponse =
        serde_json::from_slice(bytes).map_err(|err| DecodeError::Json(err.to_string()))?;
    let items = response.items.ok_or(DecodeError::MissingItems)?;

    let mut seen = HashSet::with_capacity(items.len());
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let summary = match validate_item(item) {
            Ok(summary) => summary,
            Err(reason) => {
                radar_warn!("Skipping search item #{}: {}", index, reason);
                continue;
            }
        };
        if !seen.insert(summary.id) {
            radar_warn!("Skipping search item #{}: duplicate id {}", index, summary.id);
            continue;
        }
        out.push(summary);
    }
    Ok(out)
}

fn validate_item(item: Value) -> Result<RepoSummary, String> {
    let raw: RawItem = serde_json::from_value(item).map_err(|err| err.to_string())?;
    if raw.name.trim().is_empty() {
        return Err(format!("id {} has an empty name", raw.id));
    }
    if raw.html_url.trim().is_empty() {
        return Err(format!("id {} has an empty url", raw.id));
    }
    Ok(RepoSummary {
        id: raw.id,
        name: raw.name,
        description: non_empty(raw.description),
        stars: raw.stargazers_count,
        url: raw.html_url,
        language: non_empty(raw.language),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
