use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub data_dir: String,
    pub ollama_url: String,
    pub embed_model: String,
    pub chat_model: String,
    pub qdrant_url: String,
    pub collection: String,
    pub distance: String,
    pub top_k: usize,
    pub embed_batch: usize,
    pub persona: String,
}

impl Config {
    pub fn from_env() -> Self {
        // Load .env if present so model and store config work without manual `source .env`.
        let _ = dotenvy::dotenv();
        Self {
            data_dir: env::var("RAG_DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
            ollama_url: env::var("OLLAMA_URL").unwrap_or_else(|_| "http://localhost:11434".to_string()),
            embed_model: env::var("OLLAMA_EMBED_MODEL").unwrap_or_else(|_| "nomic-embed-text".to_string()),
            chat_model: env::var("OLLAMA_CHAT_MODEL").unwrap_or_else(|_| "llama3".to_string()),
            qdrant_url: env::var("QDRANT_URL").unwrap_or_else(|_| "http://localhost:6333".to_string()),
            collection: env::var("QDRANT_COLLECTION").unwrap_or_else(|_| "library_assistant".to_string()),
            distance: env::var("QDRANT_DISTANCE").unwrap_or_else(|_| "Cosine".to_string()),
            top_k: env::var("RAG_TOP_K").ok().and_then(|v| v.parse().ok()).unwrap_or(3),
            embed_batch: env::var("RAG_EMBED_BATCH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(32),
            persona: env::var("RAG_PERSONA")
                .unwrap_or_else(|_| "You are a helpful library assistant.".to_string()),
        }
    }
}
