// ABOUTME: Fetch-and-store module for remotely rendered stats cards
// ABOUTME: Exports the streaming downloader and its error types

pub mod downloader;
pub mod error;

pub use downloader::Downloader;
pub use error::{DownloadError, Result};
