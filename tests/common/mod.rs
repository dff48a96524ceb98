// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides a mock stats-card server and temp-dir test environments

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tempfile::TempDir;
use tokio::net::TcpListener;

use statsboard::cli::Config;

/// Canned response for one mock card endpoint
#[derive(Clone)]
pub struct CardResponse {
    pub status: StatusCode,
    pub body: &'static str,
}

impl CardResponse {
    pub fn ok(body: &'static str) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: "not found",
        }
    }
}

/// Start a mock card server with fixed responses for the two card routes.
///
/// Routes mirror the real renderer: `/api` for GitHub, `/api/wakatime`
/// for WakaTime.
pub async fn start_card_server(
    github: CardResponse,
    wakatime: CardResponse,
) -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let app = Router::new()
        .route(
            "/api",
            get(move || {
                let response = github.clone();
                async move { (response.status, response.body) }
            }),
        )
        .route(
            "/api/wakatime",
            get(move || {
                let response = wakatime.clone();
                async move { (response.status, response.body) }
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, handle)
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn output_dir(&self) -> PathBuf {
        self.path().join("generated-cards")
    }

    /// A config pointed at the mock server with output under the temp dir
    pub fn config_for(&self, addr: SocketAddr) -> Config {
        let mut config = Config::default();
        config.cards.base_url = format!("http://{}", addr);
        config.output_dir = self.output_dir();
        config.fetch.timeout_seconds = 5;
        config
    }
}
