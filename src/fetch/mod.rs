// src/fetch/mod.rs

use crate::error::LoadError;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// GET `url` and return the body as text. `path` is the resource name used in
/// error messages.
pub async fn fetch_text(client: &Client, url: &Url, path: &str) -> Result<String, LoadError> {
    debug!(%url, "fetching CSV");
    let resp = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| LoadError::fetch(path, e))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::fetch(path, format!("HTTP error: {}", status)));
    }

    let text = resp.text().await.map_err(|e| LoadError::fetch(path, e))?;
    debug!(%url, bytes = text.len(), "fetched CSV");
    Ok(text)
}
