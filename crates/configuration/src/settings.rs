use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub analytics: AnalyticsSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where the HTTP API listens.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Parameters for the metrics engine and the quadrant classifier.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsSettings {
    /// Annual risk-free rate in percent (e.g. 6.0 for 6%).
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,
    /// Which record set the quadrant averages are taken over. Deliberately has no
    /// default: the two choices give different quadrant counts.
    pub quadrant_baseline: QuadrantBaseline,
}

/// The record set quadrant lines are computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum QuadrantBaseline {
    /// Averages of the whole dataset; lines stay fixed while filtering.
    Dataset,
    /// Averages of the currently filtered subset; lines move with the filter.
    Filtered,
}

/// Limits for ranking tables and the top-performers endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    /// Rows in the dashboard table.
    #[serde(default = "default_table_size")]
    pub table_size: usize,
    /// `limit` used by top-performers when the request omits it.
    #[serde(default = "default_table_size")]
    pub default_limit: usize,
    /// Upper bound applied to any requested `limit`.
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

/// Where index records come from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetSettings {
    /// A JSON file of records. When absent the embedded dataset is used.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,
    /// When set, logs are also written to a daily-rolling file in this directory.
    pub directory: Option<PathBuf>,
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

// --- Default Implementations ---
// This allows a user to omit whole sections from their toml
// and still have it work with sensible defaults.

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    5002
}
fn default_risk_free_rate() -> f64 {
    6.0
}
fn default_table_size() -> usize {
    10
}
fn default_max_limit() -> usize {
    200
}
fn default_level() -> String {
    "info".to_string()
}
fn default_file_prefix() -> String {
    "indexscope.log".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            table_size: default_table_size(),
            default_limit: default_table_size(),
            max_limit: default_max_limit(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            directory: None,
            file_prefix: default_file_prefix(),
        }
    }
}

impl Settings {
    /// Settings with every default and the given baseline, for embedding and tests.
    pub fn with_baseline(quadrant_baseline: QuadrantBaseline) -> Self {
        Self {
            server: ServerSettings::default(),
            analytics: AnalyticsSettings {
                risk_free_rate: default_risk_free_rate(),
                quadrant_baseline,
            },
            ranking: RankingSettings::default(),
            dataset: DatasetSettings::default(),
            logging: LoggingSettings::default(),
        }
    }

    /// Checks cross-field constraints `serde` cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.analytics.risk_free_rate.is_finite() {
            return Err(ConfigError::ValidationError(
                "analytics.risk_free_rate must be a finite number".to_string(),
            ));
        }
        if self.ranking.table_size == 0 {
            return Err(ConfigError::ValidationError(
                "ranking.table_size must be at least 1".to_string(),
            ));
        }
        if self.ranking.default_limit > self.ranking.max_limit {
            return Err(ConfigError::ValidationError(format!(
                "ranking.default_limit ({}) exceeds ranking.max_limit ({})",
                self.ranking.default_limit, self.ranking.max_limit
            )));
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "server.host must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
