use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::{anyhow, Context, Result};
use thiserror::Error;

use super::model::{Quote, QuoteDataset, TimeKey};

// ---------------------------------------------------------------------------
// Where the dataset comes from
// ---------------------------------------------------------------------------

/// A dataset location: an `http(s)` URL or a path on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl FromStr for DataSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(DataSource::Url(s.to_string()))
        } else {
            Ok(DataSource::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{url}"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("GET {url} answered with HTTP status {status}")]
    Status { url: String, status: u16 },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a quote dataset from its source.  Blocks until done.
pub fn load(source: &DataSource) -> Result<QuoteDataset> {
    let text = match source {
        DataSource::Url(url) => fetch(url)?,
        DataSource::File(path) => read_file(path)?,
    };
    parse_json(&text).with_context(|| format!("parsing dataset from {source}"))
}

/// Parse the dataset document.
///
/// Expected schema:
///
/// ```json
/// {
///   "09:00": [ { "quote": "...", "title": "...", "author": "..." } ],
///   "21:30": [ ... ]
/// }
/// ```
///
/// Keys that are not valid `HH:MM` times are skipped; keys with an empty
/// list are dropped.
pub fn parse_json(text: &str) -> Result<QuoteDataset> {
    let raw: BTreeMap<String, Vec<Quote>> =
        serde_json::from_str(text).context("expected an object of HH:MM → quote lists")?;

    let mut skipped = 0usize;
    let entries: Vec<(TimeKey, Vec<Quote>)> = raw
        .into_iter()
        .filter_map(|(key, quotes)| match key.parse::<TimeKey>() {
            Ok(k) => Some((k, quotes)),
            Err(e) => {
                log::warn!("Skipping dataset entry: {e}");
                skipped += 1;
                None
            }
        })
        .collect();

    let dataset = QuoteDataset::from_entries(entries);
    log::info!(
        "Parsed {} quotes across {} minutes ({skipped} invalid keys skipped)",
        dataset.quote_count(),
        dataset.len()
    );
    Ok(dataset)
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn fetch(url: &str) -> Result<String> {
    let response =
        reqwest::blocking::get(url).with_context(|| format!("requesting {url}"))?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        }
        .into());
    }
    response.text().context("reading response body")
}

// ---------------------------------------------------------------------------
// One-shot background load
// ---------------------------------------------------------------------------

/// A load running on its own thread.  The UI polls it once per tick.
pub struct PendingLoad {
    rx: Receiver<Result<QuoteDataset>>,
}

impl PendingLoad {
    pub fn spawn(source: DataSource) -> Self {
        let (tx, rx) = mpsc::channel();
        let spawned = thread::Builder::new()
            .name("dataset-loader".to_string())
            .spawn({
                let tx = tx.clone();
                move || {
                    // The receiver may be gone if the window closed first.
                    let _ = tx.send(load(&source));
                }
            });
        if let Err(e) = spawned {
            let _ = tx.send(Err(anyhow!(e).context("starting loader thread")));
        }
        PendingLoad { rx }
    }

    /// `None` while the load is still running.
    pub fn poll(&self) -> Option<Result<QuoteDataset>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(Err(anyhow!("loader thread exited without a result")))
            }
        }
    }
}

/// One-shot local HTTP server for exercising the URL path.
#[cfg(test)]
pub(crate) mod test_http {
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Answer the first request with `status` and `body`; returns the URL.
    pub fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            // Drain the request head.
            while reader.read_line(&mut line).unwrap_or(0) > 0 && line != "\r\n" {
                line.clear();
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        });
        format!("http://{addr}/times.json")
    }
}
