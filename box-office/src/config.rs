//! Box office configuration
//!
//! JSON file with built-in defaults. The wave table is static
//! configuration: listed in ascending chronological order and immutable
//! once loaded.

use std::path::{Path, PathBuf};

use chrono::DateTime;
use marquee_client::ClientConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{EventDetails, TicketWave};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Price resolution mode, matching the two reservation service variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PriceMode {
    /// The service assigns wave and price; the local estimate is a
    /// display hint only
    #[default]
    Remote,
    /// The service does a plain insert; price is computed client-side
    Local,
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Reservation service base URL
    #[serde(default = "default_service_url")]
    pub service_url: String,

    /// Optional bearer key for the service
    #[serde(default)]
    pub api_key: Option<String>,

    /// Reservation request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default)]
    pub price_mode: PriceMode,

    /// Directory for saved ticket images and the sequence file
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    pub event: EventDetails,

    /// Sale windows, ascending
    pub waves: Vec<TicketWave>,
}

fn default_timeout() -> u64 {
    15
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_service_url() -> String {
    std::env::var("MARQUEE_SERVICE_URL").unwrap_or_else(|_| {
        tracing::debug!("MARQUEE_SERVICE_URL not set, using development default");
        "http://127.0.0.1:8090".to_string()
    })
}

impl AppConfig {
    /// Load from a JSON file, falling back to defaults when the file does
    /// not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            tracing::info!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Reservation client configuration derived from this config.
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(&self.service_url).with_timeout(self.timeout);
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key);
        }
        config
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            api_key: None,
            timeout: default_timeout(),
            price_mode: PriceMode::default(),
            data_dir: default_data_dir(),
            event: EventDetails {
                title: "Marquee Live 2026".to_string(),
                date: "March 14, 2026".to_string(),
                time: "7:00 PM - 11:00 PM".to_string(),
                location: "Friendship Park, Addis Ababa".to_string(),
                artist: "ISAAC-ADDISU".to_string(),
                description: "Energetic, raw live performance".to_string(),
                base_price: Decimal::from(500),
                currency: "ETB".to_string(),
            },
            waves: vec![
                wave(
                    "first",
                    "First Wave",
                    "Feb 21, 2026 - Mar 7, 2026",
                    500,
                    "2026-02-21T00:00:00+03:00",
                    "2026-03-07T23:59:59+03:00",
                ),
                wave(
                    "second",
                    "Second Wave",
                    "Mar 8, 2026 - Mar 13, 2026",
                    700,
                    "2026-03-08T00:00:00+03:00",
                    "2026-03-13T23:59:59+03:00",
                ),
                wave(
                    "third",
                    "Third Wave (At the Door)",
                    "Mar 14, 2026 (At the door)",
                    1000,
                    "2026-03-14T00:00:00+03:00",
                    "2026-03-14T23:59:59+03:00",
                ),
            ],
        }
    }
}

/// Static wave table entry.
fn wave(id: &str, name: &str, label: &str, price: i64, starts_at: &str, ends_at: &str) -> TicketWave {
    TicketWave {
        id: id.to_string(),
        name: name.to_string(),
        label: label.to_string(),
        price: Decimal::from(price),
        starts_at: DateTime::parse_from_rfc3339(starts_at).expect("static wave window"),
        ends_at: DateTime::parse_from_rfc3339(ends_at).expect("static wave window"),
    }
}
