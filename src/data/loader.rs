// ============================================================
// Layer 4 — Dataset Loaders
// ============================================================
// Load the labelled corpus: a JSON array of
//   { "text": string, "label": 0 | 1 }
//
// Two sources implement DatasetSource:
//   JsonFileLoader    — a path on the local filesystem
//   HttpDatasetLoader — an http(s) URL; any non-2xx is fatal
//
// Every failure (missing file, network error, bad status,
// malformed JSON) becomes CheckerError::DatasetLoad and aborts
// the workflow that asked for the data.

use std::{fs, path::PathBuf, time::Duration};

use anyhow::Result;
use reqwest::blocking::Client;

use crate::domain::document::Document;
use crate::domain::error::CheckerError;
use crate::domain::traits::DatasetSource;

/// Default dataset location, relative to the working directory
pub const DEFAULT_DATASET: &str = "dataset.json";

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Pick a loader for `location`: URLs go over HTTP, anything else is a file path.
pub fn source_for(location: &str) -> Box<dyn DatasetSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpDatasetLoader::new(location))
    } else {
        Box::new(JsonFileLoader::new(location))
    }
}

fn parse_documents(location: &str, body: &str) -> Result<Vec<Document>> {
    let docs: Vec<Document> =
        serde_json::from_str(body).map_err(|e| CheckerError::dataset_load(location, e))?;
    tracing::info!("Loaded {} documents from '{}'", docs.len(), location);
    Ok(docs)
}

// ─── JsonFileLoader ───────────────────────────────────────────────────────────
pub struct JsonFileLoader {
    path: PathBuf,
    location: String,
}

impl JsonFileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }
}

impl DatasetSource for JsonFileLoader {
    fn location(&self) -> &str {
        &self.location
    }

    fn load_all(&self) -> Result<Vec<Document>> {
        let body = fs::read_to_string(&self.path)
            .map_err(|e| CheckerError::dataset_load(&self.location, e))?;
        parse_documents(&self.location, &body)
    }
}

// ─── HttpDatasetLoader ────────────────────────────────────────────────────────
pub struct HttpDatasetLoader {
    url: String,
}

impl HttpDatasetLoader {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl DatasetSource for HttpDatasetLoader {
    fn location(&self) -> &str {
        &self.url
    }

    fn load_all(&self) -> Result<Vec<Document>> {
        let fail = |e: reqwest::Error| CheckerError::dataset_load(&self.url, e);

        let client = Client::builder().timeout(HTTP_TIMEOUT).build().map_err(fail)?;

        tracing::debug!("Fetching dataset from '{}'", self.url);
        let body = client
            .get(&self.url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .map_err(fail)?;

        parse_documents(&self.url, &body)
    }
}

/// A throwaway HTTP server answering exactly one request.
#[cfg(test)]
pub(crate) mod test_support {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve a single response and return the URL to request.
    pub fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        format!("http://{addr}/dataset.json")
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::test_support::serve_once;
    use super::*;
    use crate::domain::document::Label;

    fn expect_dataset_error(err: anyhow::Error) {
        assert!(
            matches!(err.downcast_ref::<CheckerError>(), Some(CheckerError::DatasetLoad { .. })),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_loads_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        fs::write(&path, r#"[{"text":"Hello World!","label":0}]"#).unwrap();

        let docs = JsonFileLoader::new(&path).load_all().unwrap();
        assert_eq!(docs, vec![Document::new("Hello World!", Label::Human)]);
    }

    #[test]
    fn test_missing_file_is_dataset_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFileLoader::new(dir.path().join("nope.json")).load_all().unwrap_err();
        expect_dataset_error(err);
    }

    #[test]
    fn test_malformed_json_is_dataset_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        fs::write(&path, r#"{"text": "not an array"}"#).unwrap();
        expect_dataset_error(JsonFileLoader::new(&path).load_all().unwrap_err());
    }

    #[test]
    fn test_http_ok_loads_documents() {
        let url = serve_once("200 OK", r#"[{"text":"beep boop","label":1}]"#);
        let docs = HttpDatasetLoader::new(url).load_all().unwrap();
        assert_eq!(docs, vec![Document::new("beep boop", Label::Ai)]);
    }

    #[test]
    fn test_http_404_is_dataset_error() {
        let url = serve_once("404 Not Found", "");
        expect_dataset_error(HttpDatasetLoader::new(url).load_all().unwrap_err());
    }

    #[test]
    fn test_source_for_picks_loader_by_scheme() {
        assert_eq!(source_for("https://example.com/d.json").location(), "https://example.com/d.json");
        assert_eq!(source_for("data/d.json").location(), "data/d.json");
    }
}
