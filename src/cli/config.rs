// ABOUTME: Configuration management for the statsboard application
// ABOUTME: Handles loading and merging configuration from files and environment variables

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const GITHUB_CARD_FILE: &str = "github-stats.svg";
pub const WAKATIME_CARD_FILE: &str = "wakatime-stats.svg";

const DEFAULT_USERNAME: &str = "codenificient";
const DEFAULT_BASE_URL: &str = "https://github-readme-stat-codenificient.vercel.app";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_username")]
    pub github_username: String,

    #[serde(default = "default_username")]
    pub wakatime_username: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub cards: CardsConfig,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardsConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// One remotely rendered stats card: where to fetch it and what to save it as.
#[derive(Debug, Clone)]
pub struct StatsCard {
    pub title: String,
    pub url: String,
    pub filename: String,
}

fn default_username() -> String {
    DEFAULT_USERNAME.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated-cards")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_username: default_username(),
            wakatime_username: default_username(),
            output_dir: default_output_dir(),
            cards: CardsConfig::default(),
            fetch: FetchConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::find_config_file()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let mut config: Config = serde_yaml::from_str(&contents)?;

            // Merge with environment variables
            config.merge_env()?;

            Ok(config)
        } else {
            let mut config = Config::default();
            config.merge_env()?;
            Ok(config)
        }
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Result<PathBuf> {
        let possible_paths = vec![
            PathBuf::from("statsboard.yaml"),
            PathBuf::from("statsboard.yml"),
            PathBuf::from(".statsboard.yaml"),
            PathBuf::from(".statsboard.yml"),
        ];

        // Check home directory
        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".statsboard").join("config.yaml");
            if home_config.exists() {
                return Ok(home_config);
            }
        }

        // Check current directory
        for path in possible_paths {
            if path.exists() {
                return Ok(path);
            }
        }

        // Return default path (may not exist)
        Ok(PathBuf::from("statsboard.yaml"))
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) -> Result<()> {
        if let Ok(username) = std::env::var("GITHUB_USERNAME") {
            self.github_username = username;
        }
        if let Ok(username) = std::env::var("WAKATIME_USERNAME") {
            self.wakatime_username = username;
        }

        if let Ok(dir) = std::env::var("STATSBOARD_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(dir);
        }
        if let Ok(base_url) = std::env::var("STATSBOARD_BASE_URL") {
            self.cards.base_url = base_url;
        }
        if let Ok(timeout) = std::env::var("STATSBOARD_FETCH_TIMEOUT") {
            self.fetch.timeout_seconds = timeout.parse()?;
        }

        // Logging configuration
        if let Ok(level) = std::env::var("STATSBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("STATSBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }

    /// The two stats cards to fetch, in download order
    pub fn cards(&self) -> Vec<StatsCard> {
        let base = self.cards.base_url.trim_end_matches('/');

        vec![
            StatsCard {
                title: "GitHub Activity".to_string(),
                url: format!(
                    "{}/api?username={}&theme=dark&show_icons=true&hide_border=true",
                    base, self.github_username
                ),
                filename: GITHUB_CARD_FILE.to_string(),
            },
            StatsCard {
                title: "Coding Time".to_string(),
                url: format!(
                    "{}/api/wakatime?username={}&theme=dark&hide_border=true",
                    base, self.wakatime_username
                ),
                filename: WAKATIME_CARD_FILE.to_string(),
            },
        ]
    }
}
