use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::http::post_json;

#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a [f32],
    limit: usize,
    with_payload: bool,
}

#[derive(Deserialize)]
struct QueryResponse {
    result: Option<QueryResult>,
}

#[derive(Deserialize)]
struct QueryResult {
    points: Vec<ScoredPoint>,
}

#[derive(Deserialize)]
struct ScoredPoint {
    payload: Option<Payload>,
}

#[derive(Deserialize)]
struct Payload {
    text: Option<String>,
}

/// Returns the stored chunk texts nearest to the query vector, most similar
/// first. Asking for more results than the collection holds just returns
/// everything the store has.
pub fn retrieve_texts(
    cfg: &Config,
    client: &Client,
    vector: &[f32],
    k: usize,
) -> Result<Vec<String>, String> {
    if vector.is_empty() {
        return Ok(vec![]);
    }
    let url = format!(
        "{}/collections/{}/points/query",
        cfg.qdrant_url, cfg.collection
    );
    let req = QueryRequest {
        query: vector,
        limit: k.max(1),
        with_payload: true,
    };
    let res = post_json::<QueryResponse, _>(client, &url, &req)?;
    let points = res.result.map(|r| r.points).unwrap_or_default();
    Ok(points
        .into_iter()
        .filter_map(|p| p.payload.and_then(|p| p.text))
        .collect())
}
