//! Download provider: accepts enqueue requests and answers status queries.
//!
//! The watcher and the downloads screen only ever consume `query`; all
//! network and disk work happens on the provider's own runtime. Records are
//! kept in memory for the process lifetime — a restart forgets them, which
//! is intentional: the files themselves are the durable artifact.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::types::download::{DownloadRecord, DownloadRequest, DownloadState};
use crate::types::errors::DownloadError;

/// Trait defining the download provider interface.
///
/// `query` is a cheap read-only lookup; multiple watchers may call it
/// concurrently.
pub trait DownloadProvider: Send + Sync {
    fn enqueue(&self, request: DownloadRequest) -> Result<String, DownloadError>;
    fn query(&self, handle: &str) -> Option<DownloadRecord>;
}

type RecordMap = Arc<Mutex<HashMap<String, DownloadRecord>>>;

/// Streaming HTTP download provider.
///
/// Each enqueue spawns a task on a private runtime that streams the response
/// body to the destination file, bumping the record's byte counter per chunk.
/// Terminal records stay queryable so a watcher observes `Completed` or
/// `Failed` at least once.
pub struct HttpDownloadProvider {
    runtime: tokio::runtime::Runtime,
    client: reqwest::Client,
    records: RecordMap,
}

impl HttpDownloadProvider {
    pub fn new() -> Result<Self, DownloadError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .map_err(|e| DownloadError::ProviderUnavailable(format!("runtime: {}", e)))?;

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| DownloadError::ProviderUnavailable(format!("http client: {}", e)))?;

        Ok(Self {
            runtime,
            client,
            records: Arc::new(Mutex::new(HashMap::new())),
        })
    }
}

impl DownloadProvider for HttpDownloadProvider {
    fn enqueue(&self, request: DownloadRequest) -> Result<String, DownloadError> {
        if request.url.is_empty() {
            return Err(DownloadError::NetworkError("empty URL".to_string()));
        }

        let handle = Uuid::new_v4().to_string();
        let destination = request.destination_dir.join(&request.file_name);

        self.records.lock().unwrap().insert(
            handle.clone(),
            DownloadRecord {
                state: DownloadState::Active,
                bytes_downloaded: 0,
                bytes_total: 0,
                destination: destination.clone(),
            },
        );

        info!(url = %request.url, file = %request.file_name, "download enqueued");

        let client = self.client.clone();
        let records = self.records.clone();
        let task_handle = handle.clone();
        self.runtime.spawn(async move {
            let result = stream_to_disk(&client, &request, &destination, &task_handle, &records).await;

            let mut records = records.lock().unwrap();
            if let Some(record) = records.get_mut(&task_handle) {
                match result {
                    Ok(()) => {
                        // Some servers never send Content-Length; settle the
                        // total so the final snapshot reads 100%.
                        if record.bytes_total == 0 {
                            record.bytes_total = record.bytes_downloaded;
                        }
                        record.state = DownloadState::Completed;
                        info!(file = %request.file_name, "download completed");
                    }
                    Err(e) => {
                        record.state = DownloadState::Failed;
                        warn!(file = %request.file_name, error = %e, "download failed");
                    }
                }
            }
        });

        Ok(handle)
    }

    fn query(&self, handle: &str) -> Option<DownloadRecord> {
        self.records.lock().unwrap().get(handle).cloned()
    }
}

async fn stream_to_disk(
    client: &reqwest::Client,
    request: &DownloadRequest,
    destination: &Path,
    handle: &str,
    records: &RecordMap,
) -> Result<(), DownloadError> {
    let mut req = client.get(&request.url);
    if let Some(ua) = &request.user_agent {
        req = req.header(reqwest::header::USER_AGENT, ua.as_str());
    }

    let mut response = req
        .send()
        .await
        .map_err(|e| DownloadError::NetworkError(e.to_string()))?;

    if !response.status().is_success() {
        return Err(DownloadError::NetworkError(format!(
            "{} for {}",
            response.status(),
            request.url
        )));
    }

    if let Some(total) = response.content_length() {
        let mut records = records.lock().unwrap();
        if let Some(record) = records.get_mut(handle) {
            record.bytes_total = total;
        }
    }

    if let Some(parent) = destination.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| DownloadError::FileSystemError(e.to_string()))?;
    }

    let mut file = tokio::fs::File::create(destination)
        .await
        .map_err(|e| DownloadError::FileSystemError(e.to_string()))?;

    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| DownloadError::NetworkError(e.to_string()))?
    {
        file.write_all(&chunk)
            .await
            .map_err(|e| DownloadError::FileSystemError(e.to_string()))?;

        let mut records = records.lock().unwrap();
        if let Some(record) = records.get_mut(handle) {
            record.bytes_downloaded += chunk.len() as u64;
        }
    }

    file.flush()
        .await
        .map_err(|e| DownloadError::FileSystemError(e.to_string()))?;

    debug!(file = %request.file_name, "stream finished");
    Ok(())
}

/// Derives the file name a page-initiated download should land under.
///
/// Priority: Content-Disposition `filename=`, then the last URL path
/// segment, then a fixed fallback. A MIME-derived extension is appended
/// when the name has none (".bin" when the type maps to nothing). Zip
/// archives served as octet-stream end up guessed as ".bin", so anything
/// the URL or MIME type identifies as zip is forced to a ".zip" suffix.
pub fn guess_file_name(
    url: &str,
    content_disposition: Option<&str>,
    mime_type: Option<&str>,
) -> String {
    let mut name = content_disposition
        .and_then(disposition_file_name)
        .or_else(|| url_file_name(url))
        .unwrap_or_else(|| "downloadfile".to_string());

    if !name.contains('.') {
        let ext = mime_type
            .and_then(mime_guess::get_mime_extensions_str)
            .and_then(|exts| exts.first())
            .copied()
            .unwrap_or("bin");
        name = format!("{}.{}", name, ext);
    }

    let is_zip = url.contains(".zip")
        || mime_type
            .map(|m| m.eq_ignore_ascii_case("application/zip"))
            .unwrap_or(false);
    if is_zip {
        if let Some(stem) = name.strip_suffix(".bin") {
            name = format!("{}.zip", stem);
        }
        if !name.ends_with(".zip") {
            name.push_str(".zip");
        }
    }

    name
}

fn disposition_file_name(header: &str) -> Option<String> {
    let lower = header.to_ascii_lowercase();
    let start = lower.find("filename=")? + "filename=".len();
    let rest = header[start..].trim();
    let name = rest
        .split(';')
        .next()
        .unwrap_or(rest)
        .trim()
        .trim_matches('"');
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

fn url_file_name(url: &str) -> Option<String> {
    let no_fragment = url.split('#').next().unwrap_or(url);
    let no_query = no_fragment.split('?').next().unwrap_or(no_fragment);
    let segment = no_query.rsplit('/').next()?;
    if segment.is_empty() || segment.contains(':') {
        None
    } else {
        Some(segment.to_string())
    }
}
