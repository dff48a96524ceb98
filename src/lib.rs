// ABOUTME: Main library module for the statsboard card updater
// ABOUTME: Exports all core modules and provides the public API

pub mod cli;
pub mod dashboard;
pub mod fetch;

// Re-export commonly used types
pub use cli::{App, Args, Config, StatsCard};
pub use dashboard::DashboardRenderer;
pub use fetch::Downloader;

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
