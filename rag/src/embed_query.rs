use reqwest::blocking::Client;

use crate::config::Config;
use crate::embed::embed_texts;

pub fn embed_query(cfg: &Config, client: &Client, text: &str) -> Result<Vec<f32>, String> {
    let vecs = embed_texts(cfg, client, &[text.to_string()])?;
    vecs.into_iter()
        .next()
        .ok_or_else(|| "embedding response was empty".to_string())
}
