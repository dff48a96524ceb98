// ABOUTME: Streaming HTTP downloader for stats card images
// ABOUTME: Writes response bodies to disk and removes partial files on failure

use futures::StreamExt;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use super::error::{DownloadError, Result};

pub struct Downloader {
    client: Client,
}

impl Downloader {
    /// Create a downloader with a bounded per-request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("statsboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// Download `url` into `dest`, overwriting any existing file.
    ///
    /// A non-2xx status fails before the destination is touched. Any
    /// transport or write error mid-stream removes the partial file, so
    /// `dest` is either the complete response body or absent.
    pub async fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        debug!("GET {}", url);

        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|source| DownloadError::Transport {
                    url: url.to_string(),
                    source,
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let mut file = fs::File::create(dest)
            .await
            .map_err(|source| DownloadError::Write {
                path: dest.to_path_buf(),
                source,
            })?;

        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(source) => {
                    drop(file);
                    Self::discard_partial(dest).await;
                    return Err(DownloadError::Transport {
                        url: url.to_string(),
                        source,
                    });
                }
            };

            if let Err(source) = file.write_all(&chunk).await {
                drop(file);
                Self::discard_partial(dest).await;
                return Err(DownloadError::Write {
                    path: dest.to_path_buf(),
                    source,
                });
            }

            written += chunk.len() as u64;
        }

        if let Err(source) = file.flush().await {
            drop(file);
            Self::discard_partial(dest).await;
            return Err(DownloadError::Write {
                path: dest.to_path_buf(),
                source,
            });
        }

        debug!("Wrote {} bytes to {}", written, dest.display());
        Ok(written)
    }

    async fn discard_partial(dest: &Path) {
        if let Err(e) = fs::remove_file(dest).await {
            warn!("Failed to remove partial file {}: {}", dest.display(), e);
        }
    }
}
