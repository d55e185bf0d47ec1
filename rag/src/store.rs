use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::extract::Chunk;
use crate::http::{delete_quiet, get_json, put_json};

const UPSERT_BATCH: usize = 128;

#[derive(Serialize)]
struct CreateCollection {
    vectors: VectorParams,
}

#[derive(Serialize)]
struct VectorParams {
    size: usize,
    distance: String,
}

#[derive(Serialize)]
struct PointPayload<'a> {
    chunk_id: &'a str,
    text: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    chapter: Option<&'a str>,
}

#[derive(Serialize)]
struct Point<'a> {
    id: u64,
    vector: &'a [f32],
    payload: PointPayload<'a>,
}

#[derive(Serialize)]
struct UpsertPoints<'a> {
    points: Vec<Point<'a>>,
}

#[derive(Deserialize)]
struct InfoResponse {
    result: Option<CollectionInfo>,
}

#[derive(Deserialize)]
struct CollectionInfo {
    #[serde(default)]
    points_count: Option<u64>,
}

/// Full rebuilds replace the collection wholesale: drop whatever is there,
/// then create it empty with the embedding dimensionality just observed.
pub fn reset_collection(cfg: &Config, client: &Client, vector_size: usize) -> Result<(), String> {
    let url = collection_url(cfg);
    delete_quiet(client, &url)?;
    let body = CreateCollection {
        vectors: VectorParams {
            size: vector_size,
            distance: cfg.distance.clone(),
        },
    };
    let _ = put_json::<serde_json::Value, _>(client, &url, &body)?;
    Ok(())
}

pub fn drop_collection(cfg: &Config, client: &Client) -> Result<(), String> {
    delete_quiet(client, &collection_url(cfg))
}

/// Bulk-upserts chunks with their vectors. The string chunk id travels in the
/// payload; Qdrant's wire point id is just the upsert ordinal.
pub fn store_chunks(
    cfg: &Config,
    client: &Client,
    chunks: &[Chunk],
    vectors: &[Vec<f32>],
) -> Result<(), String> {
    if chunks.is_empty() {
        return Ok(());
    }
    if chunks.len() != vectors.len() {
        return Err(format!(
            "chunk/vector count mismatch: {} chunks, {} vectors",
            chunks.len(),
            vectors.len()
        ));
    }

    // wait=true so the count read back right after the upsert is accurate.
    let url = format!("{}?wait=true", points_url(cfg));
    let mut next_id: u64 = 1;
    for (chunk_batch, vector_batch) in chunks.chunks(UPSERT_BATCH).zip(vectors.chunks(UPSERT_BATCH)) {
        let points: Vec<Point> = chunk_batch
            .iter()
            .zip(vector_batch)
            .map(|(chunk, vector)| {
                let point = Point {
                    id: next_id,
                    vector,
                    payload: PointPayload {
                        chunk_id: &chunk.id,
                        text: &chunk.text,
                        kind: chunk.meta.kind.as_str(),
                        title: &chunk.meta.title,
                        chapter: chunk.meta.chapter.as_deref(),
                    },
                };
                next_id += 1;
                point
            })
            .collect();
        let _ = put_json::<serde_json::Value, _>(client, &url, &UpsertPoints { points })?;
    }
    Ok(())
}

pub fn count_documents(cfg: &Config, client: &Client) -> Result<u64, String> {
    let res: InfoResponse = get_json(client, &collection_url(cfg))?;
    Ok(res.result.and_then(|r| r.points_count).unwrap_or(0))
}

fn collection_url(cfg: &Config) -> String {
    format!("{}/collections/{}", cfg.qdrant_url, cfg.collection)
}

fn points_url(cfg: &Config) -> String {
    format!("{}/points", collection_url(cfg))
}
