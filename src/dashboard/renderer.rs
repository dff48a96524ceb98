// ABOUTME: Static HTML dashboard renderer using Handlebars
// ABOUTME: Embeds the two stats cards and stamps the generation time

use chrono::{DateTime, Local};
use handlebars::Handlebars;
use serde_json::json;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::error::Result;
use crate::cli::config::{GITHUB_CARD_FILE, WAKATIME_CARD_FILE};

const DASHBOARD_FILE: &str = "dashboard.html";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DASHBOARD_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Daily Stats Dashboard</title>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            margin: 0;
            padding: 20px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
        }
        .header {
            text-align: center;
            color: white;
            margin-bottom: 30px;
        }
        .header h1 {
            font-size: 2.5rem;
            margin: 0;
            text-shadow: 2px 2px 4px rgba(0,0,0,0.3);
        }
        .cards-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(500px, 1fr));
            gap: 30px;
            margin-bottom: 30px;
        }
        .card-wrapper {
            background: white;
            border-radius: 12px;
            padding: 20px;
            box-shadow: 0 8px 32px rgba(0,0,0,0.1);
        }
        .card-title {
            font-size: 1.5rem;
            font-weight: 600;
            color: #333;
            margin-bottom: 15px;
            text-align: center;
        }
        .card-content {
            display: flex;
            justify-content: center;
            align-items: center;
        }
        .footer {
            text-align: center;
            color: white;
            opacity: 0.8;
        }
        .last-updated {
            background: rgba(255,255,255,0.1);
            padding: 10px 20px;
            border-radius: 20px;
            display: inline-block;
            margin-top: 20px;
        }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>&#128202; Daily Coding Stats</h1>
            <p>Automatically updated GitHub and WakaTime statistics</p>
        </div>

        <div class="cards-grid">
            <div class="card-wrapper">
                <div class="card-title">&#128025; GitHub Activity</div>
                <div class="card-content">
                    <img src="./{{github_card}}" alt="GitHub Stats" style="max-width: 100%; height: auto;">
                </div>
            </div>

            <div class="card-wrapper">
                <div class="card-title">&#9200; Coding Time</div>
                <div class="card-content">
                    <img src="./{{wakatime_card}}" alt="WakaTime Stats" style="max-width: 100%; height: auto;">
                </div>
            </div>
        </div>

        <div class="footer">
            <div class="last-updated">
                Last updated: {{generated_at}}
            </div>
        </div>
    </div>
</body>
</html>
"#;

pub struct DashboardRenderer {
    handlebars: Handlebars<'static>,
}

impl DashboardRenderer {
    /// Create a renderer with the embedded dashboard template registered
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_template_string("dashboard", DASHBOARD_TEMPLATE)?;

        Ok(Self { handlebars })
    }

    /// Render the dashboard HTML for the given card filenames and timestamp
    pub fn render(
        &self,
        github_card: &str,
        wakatime_card: &str,
        generated_at: DateTime<Local>,
    ) -> Result<String> {
        let context = json!({
            "github_card": github_card,
            "wakatime_card": wakatime_card,
            "generated_at": generated_at.format(TIMESTAMP_FORMAT).to_string(),
        });

        Ok(self.handlebars.render("dashboard", &context)?)
    }

    /// Render and write `dashboard.html` into the output directory
    pub async fn write_dashboard(&self, output_dir: &Path) -> Result<PathBuf> {
        let html = self.render(GITHUB_CARD_FILE, WAKATIME_CARD_FILE, Local::now())?;

        let path = output_dir.join(DASHBOARD_FILE);
        fs::write(&path, html)
            .await
            .map_err(|source| super::error::RenderError::Write {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_render_references_both_cards() {
        let renderer = DashboardRenderer::new().unwrap();
        let html = renderer
            .render("github-stats.svg", "wakatime-stats.svg", Local::now())
            .unwrap();

        assert_eq!(html.matches("src=\"./github-stats.svg\"").count(), 1);
        assert_eq!(html.matches("src=\"./wakatime-stats.svg\"").count(), 1);
    }

    #[test]
    fn test_render_timestamp_is_parseable() {
        let renderer = DashboardRenderer::new().unwrap();
        let html = renderer
            .render("github-stats.svg", "wakatime-stats.svg", Local::now())
            .unwrap();

        let stamp = html
            .split("Last updated: ")
            .nth(1)
            .and_then(|rest| rest.split('\n').next())
            .unwrap()
            .trim();

        NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
            .expect("timestamp should parse back");
    }

    #[test]
    fn test_render_is_pure_for_fixed_time() {
        let renderer = DashboardRenderer::new().unwrap();
        let now = Local::now();

        let first = renderer.render("a.svg", "b.svg", now).unwrap();
        let second = renderer.render("a.svg", "b.svg", now).unwrap();
        assert_eq!(first, second);
    }
}
