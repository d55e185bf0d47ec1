use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::from_str;
use std::time::Duration;

// One client per process; Ollama generation can take a while on CPU.
pub fn client() -> Result<Client, String> {
    Client::builder()
        .timeout(Duration::from_secs(120))
        .build()
        .map_err(|e| e.to_string())
}

pub fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, String> {
    let resp = client.get(url).send().map_err(|e| e.to_string())?;
    decode("GET", url, resp)
}

pub fn post_json<T: DeserializeOwned, B: Serialize>(
    client: &Client,
    url: &str,
    body: &B,
) -> Result<T, String> {
    let resp = client
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .json(body)
        .send()
        .map_err(|e| e.to_string())?;
    decode("POST", url, resp)
}

pub fn put_json<T: DeserializeOwned, B: Serialize>(
    client: &Client,
    url: &str,
    body: &B,
) -> Result<T, String> {
    let resp = client
        .put(url)
        .header(CONTENT_TYPE, "application/json")
        .json(body)
        .send()
        .map_err(|e| e.to_string())?;
    decode("PUT", url, resp)
}

// Deleting a resource that is already gone is not an error.
pub fn delete_quiet(client: &Client, url: &str) -> Result<(), String> {
    let resp = client.delete(url).send().map_err(|e| e.to_string())?;
    let status = resp.status();
    if !status.is_success() && status != reqwest::StatusCode::NOT_FOUND {
        let text = resp.text().unwrap_or_default();
        return Err(format!("DELETE {} failed: {} {}", url, status, text));
    }
    Ok(())
}

fn decode<T: DeserializeOwned>(method: &str, url: &str, resp: Response) -> Result<T, String> {
    let status = resp.status();
    let text = resp.text().unwrap_or_default();
    if !status.is_success() {
        return Err(format!("{} {} failed: {} {}", method, url, status, text));
    }
    from_str::<T>(&text).map_err(|e| format!("{} {} decode failed: {} | {}", method, url, e, text))
}
