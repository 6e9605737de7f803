//! The relay pipeline: metadata lookup, streaming download, local handle.

use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use thiserror::Error;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info};

use super::link::ShareLink;
use super::metadata;

/// Fallback name when a server-supplied file name sanitizes to nothing.
const FALLBACK_FILE_NAME: &str = "download.bin";

/// Errors that can occur while relaying a file.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid GoFile link: {0}")]
    InvalidLink(String),

    #[error("Metadata lookup failed: {0}")]
    Metadata(String),

    #[error("Download failed: {0}")]
    Download(#[from] reqwest::Error),

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Handle to a file the pipeline wrote to local disk.
///
/// Exclusively owned by the invocation that created it; the owner must
/// call [`LocalFile::remove`] once the file is no longer needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    /// Where the file was written.
    pub path: PathBuf,

    /// Total bytes transferred.
    pub bytes: u64,
}

impl LocalFile {
    /// Unlinks the file from local disk.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the unlink fails.
    pub async fn remove(self) -> Result<(), std::io::Error> {
        debug!(path = %self.path.display(), "removing local copy");
        tokio::fs::remove_file(&self.path).await
    }
}

/// The relay pipeline.
///
/// One instance is shared across command invocations; each call to
/// [`Relay::relay`] runs the full sequence independently with no shared
/// mutable state. Concurrent invocations may race on the download
/// directory if remote file names collide; first writer wins.
#[derive(Debug, Clone)]
pub struct Relay {
    /// Shared HTTP client, reused for connection pooling.
    http: reqwest::Client,

    /// Base URL of the content-info API.
    api_base: String,

    /// Directory downloaded files are written to.
    download_dir: PathBuf,
}

impl Relay {
    /// Creates a new pipeline around a shared HTTP client.
    #[must_use]
    pub fn new(
        http: reqwest::Client,
        api_base: impl Into<String>,
        download_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            http,
            api_base: api_base.into(),
            download_dir: download_dir.into(),
        }
    }

    /// Relays a share link into a local file.
    ///
    /// Strict sequence, no retries: extract the identifier, resolve
    /// metadata, stream the direct-download URL to disk, return the
    /// handle. A single failed call fails the whole invocation. The
    /// caller owns the resulting file and is responsible for removing
    /// it; partial files from mid-stream failures are not cleaned up.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLink` for malformed input, `Metadata` when the
    /// remote lookup fails or yields no entry, `Download` for network
    /// or stream failures and `Io` for local write failures.
    pub async fn relay(&self, share_link: &str) -> Result<LocalFile, RelayError> {
        let link = ShareLink::parse(share_link)?;
        debug!(content_id = %link.content_id(), "relay started");

        let meta = metadata::fetch(&self.http, &self.api_base, link.content_id()).await?;

        let file_name = sanitize_file_name(&meta.name);
        let path = self.download_dir.join(&file_name);
        let bytes = self.download_to(&meta.link, &path).await?;

        info!(path = %path.display(), bytes, "downloaded {}", file_name);

        Ok(LocalFile { path, bytes })
    }

    /// Streams the direct-download URL into `path`, returning bytes written.
    async fn download_to(&self, url: &str, path: &Path) -> Result<u64, RelayError> {
        let response = self.http.get(url).send().await?.error_for_status()?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error(parent, e))?;
        }

        let file = File::create(path).await.map_err(|e| io_error(path, e))?;
        let mut writer = BufWriter::new(file);
        let mut stream = response.bytes_stream();
        let mut bytes: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            writer
                .write_all(&chunk)
                .await
                .map_err(|e| io_error(path, e))?;
            bytes += chunk.len() as u64;
        }

        writer.flush().await.map_err(|e| io_error(path, e))?;

        Ok(bytes)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> RelayError {
    RelayError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Sanitizes a server-supplied file name before joining it to the
/// download directory.
///
/// Path separators, control characters and characters invalid on common
/// filesystems become underscores; names that reduce to nothing fall
/// back to a fixed placeholder.
fn sanitize_file_name(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim_matches(['_', '.', ' ']).is_empty() {
        FALLBACK_FILE_NAME.to_owned()
    } else {
        sanitized
    }
}
