use std::{path::Path, time::Duration};

use crate::{
    error::{VersegridError, VersegridResult},
    model::PoemRecord,
};

/// Default primary endpoint. PoetryDB returns a JSON array of
/// `{title, author, lines, ...}` objects.
pub const DEFAULT_URL: &str = "https://poetrydb.org/random/50";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches the corpus from the primary endpoint. Any transport failure or
/// non-success status is an error; callers decide how to fall back.
pub fn fetch_poems(url: &str) -> VersegridResult<Vec<PoemRecord>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| VersegridError::fetch(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| VersegridError::fetch(format!("GET {url}: {e}")))?;

    if !response.status().is_success() {
        return Err(VersegridError::fetch(format!(
            "GET {url}: status {}",
            response.status()
        )));
    }

    response
        .json::<Vec<PoemRecord>>()
        .map_err(|e| VersegridError::serde(format!("decode poems from {url}: {e}")))
}

/// Reads the corpus from a local JSON file (same shape as the endpoint).
pub fn load_poems_file(path: &Path) -> VersegridResult<Vec<PoemRecord>> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| VersegridError::source(format!("read '{}': {e}", path.display())))?;
    serde_json::from_str(&data)
        .map_err(|e| VersegridError::serde(format!("decode '{}': {e}", path.display())))
}

/// The built-in corpus used when every other source fails. Kept small; its
/// only job is making sure the grid never renders empty.
pub fn embedded_poems() -> Vec<PoemRecord> {
    vec![
        PoemRecord {
            title: "This Is Just To Say".to_string(),
            author: "William Carlos Williams".to_string(),
            lines: [
                "I have eaten",
                "the plums",
                "that were in",
                "the icebox",
                "",
                "and which",
                "you were probably",
                "saving",
                "for breakfast",
                "",
                "Forgive me",
                "they were delicious",
                "so sweet",
                "and so cold",
            ]
            .iter()
            .map(|l| l.to_string())
            .collect(),
        },
        PoemRecord {
            title: "The Red Wheelbarrow".to_string(),
            author: "William Carlos Williams".to_string(),
            lines: [
                "so much depends",
                "upon",
                "",
                "a red wheel",
                "barrow",
                "",
                "glazed with rain",
                "water",
                "",
                "beside the white",
                "chickens",
            ]
            .iter()
            .map(|l| l.to_string())
            .collect(),
        },
    ]
}

/// Loads the corpus through the full fallback chain: primary endpoint, then a
/// local file, then the embedded set. Failures are logged as warnings and
/// never propagate; the result is always non-empty.
pub fn load_with_fallback(url: Option<&str>, fallback_path: Option<&Path>) -> Vec<PoemRecord> {
    if let Some(url) = url {
        match fetch_poems(url) {
            Ok(poems) if !poems.is_empty() => return poems,
            Ok(_) => tracing::warn!(url, "primary source returned an empty corpus"),
            Err(err) => tracing::warn!(url, %err, "primary source failed"),
        }
    }

    if let Some(path) = fallback_path {
        match load_poems_file(path) {
            Ok(poems) if !poems.is_empty() => return poems,
            Ok(_) => tracing::warn!(path = %path.display(), "fallback file was empty"),
            Err(err) => tracing::warn!(path = %path.display(), %err, "fallback file failed"),
        }
    }

    tracing::warn!("all sources failed, using the embedded corpus");
    embedded_poems()
}
