// ABOUTME: Command implementations for the statsboard CLI
// ABOUTME: Runs the fetch-both-cards-then-render-dashboard pipeline

use anyhow::{Context, Result};
use std::time::Duration;
use tokio::fs;
use tracing::info;

use super::config::Config;
use crate::dashboard::DashboardRenderer;
use crate::fetch::Downloader;

/// Download both stats cards and regenerate the dashboard.
///
/// Downloads run strictly sequentially; if either fails the dashboard is
/// not rendered and the error propagates to the caller.
pub async fn update_cards(config: &Config) -> Result<()> {
    info!("Starting stats card update");

    // Ensure output directory exists
    fs::create_dir_all(&config.output_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to create output directory {}",
                config.output_dir.display()
            )
        })?;

    let downloader = Downloader::new(Duration::from_secs(config.fetch.timeout_seconds))?;

    for card in config.cards() {
        info!("Downloading {} card", card.title);

        let dest = config.output_dir.join(&card.filename);
        let bytes = downloader
            .download(&card.url, &dest)
            .await
            .with_context(|| format!("Failed to download {} card", card.title))?;

        info!("Downloaded {} ({} bytes)", card.filename, bytes);
    }

    info!("Generating dashboard");

    let renderer = DashboardRenderer::new()?;
    let dashboard_path = renderer.write_dashboard(&config.output_dir).await?;

    info!("Generated dashboard: {}", dashboard_path.display());
    info!("All stats updated, files saved to {}", config.output_dir.display());

    Ok(())
}
