mod config;
mod conversation;
mod embed;
mod embed_query;
mod extract;
mod generate;
mod http;
mod prompt;
mod retrieve;
mod source;
mod store;

pub use reqwest::blocking::Client;

pub use config::Config;
pub use conversation::{Conversation, Message};
pub use extract::{
    extract_chunks, first_string, usable_summary, Chunk, ChunkKind, ChunkMeta, ExtractReport,
    MIN_SUMMARY_CHARS,
};
pub use prompt::{build_prompt, format_context};
pub use source::{find_data_files, load_source_files, parse_books, SourceFile};

use embed::embed_texts;
use embed_query::embed_query;
use generate::generate_answer;
use retrieve::retrieve_texts;
use store::{count_documents, drop_collection, reset_collection, store_chunks};

/// Builds the shared HTTP client both binaries hand around for the whole
/// process lifetime.
pub fn connect() -> Result<Client, String> {
    http::client()
}

/// Startup probe for the chat surface: verifies Ollama and the collection are
/// reachable before a session starts.
pub fn check_services(cfg: &Config, client: &Client) -> Result<(), String> {
    let url = format!("{}/api/tags", cfg.ollama_url);
    http::get_json::<serde_json::Value>(client, &url).map_err(|err| {
        format!(
            "Ollama connection failed: {}\nPlease make sure the Ollama application is running.",
            err
        )
    })?;
    count_documents(cfg, client).map_err(|err| {
        format!(
            "Collection '{}' is not available: {}\nRun build_index first.",
            cfg.collection, err
        )
    })?;
    Ok(())
}

#[derive(Debug)]
pub struct IndexReport {
    pub files: usize,
    pub chunks: usize,
    pub stored: u64,
    pub warnings: Vec<String>,
}

/// Embeds the chunks, rebuilds the collection from scratch, and returns the
/// stored document count the collection reports afterwards.
pub fn index_chunks(cfg: &Config, client: &Client, chunks: &[Chunk]) -> Result<u64, String> {
    let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
    let vectors = embed_texts(cfg, client, &texts)?;
    reset_collection(cfg, client, vectors[0].len())?;
    store_chunks(cfg, client, chunks, &vectors)?;
    count_documents(cfg, client)
}

/// Drops the collection, for rebuilds that find nothing worth indexing.
pub fn clear_index(cfg: &Config, client: &Client) -> Result<(), String> {
    drop_collection(cfg, client)
}

/// Whole-rebuild pipeline: load sources, extract and filter chunks, embed,
/// replace the collection. `sources` overrides the data-dir scan.
pub fn build_index(
    cfg: &Config,
    client: &Client,
    sources: Option<&[String]>,
) -> Result<IndexReport, String> {
    let paths = match sources {
        Some(paths) => paths.to_vec(),
        None => find_data_files(&cfg.data_dir),
    };
    let (files, mut warnings) = load_source_files(&paths);
    let (chunks, extract) = extract_chunks(&files);
    for rejected in &extract.rejected_chapters {
        warnings.push(format!("Skipping empty/bad chapter: {}", rejected));
    }

    let stored = if chunks.is_empty() {
        clear_index(cfg, client)?;
        0
    } else {
        index_chunks(cfg, client, &chunks)?
    };

    Ok(IndexReport {
        files: files.len(),
        chunks: chunks.len(),
        stored,
        warnings,
    })
}

/// One chat round: embed the question with the index-time embedding model,
/// retrieve the nearest chunks, ground the prompt, generate. Returns the
/// context shown to the operator and the answer text.
pub fn answer_query(cfg: &Config, client: &Client, question: &str) -> Result<(String, String), String> {
    let query_vec = embed_query(cfg, client, question)?;
    let texts = retrieve_texts(cfg, client, &query_vec, cfg.top_k)?;
    let (messages, context) = build_prompt(cfg, question, &texts);
    // A failed chat call becomes this turn's answer; the session carries on.
    let answer = match generate_answer(cfg, client, &messages) {
        Ok(answer) => answer,
        Err(err) => format!("Error with Ollama: {}", err),
    };
    Ok((context, answer))
}
