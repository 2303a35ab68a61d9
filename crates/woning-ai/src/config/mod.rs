use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::workflows::dashboard::SortOption;
use crate::workflows::scoring::{ScoringConfig, TierThresholds};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub dashboard: DashboardConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    /// Reads `.env` (if present) and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; missing keys take
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment =
            AppEnvironment::from_str(&lookup("APP_ENV").unwrap_or_else(|| "development".to_string()));

        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("APP_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = lookup("APP_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let snapshot_path = lookup("WONING_SNAPSHOT_PATH")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            dashboard: DashboardConfig { snapshot_path },
            scoring: scoring_from_lookup(&lookup)?,
        })
    }
}

fn scoring_from_lookup<F>(lookup: &F) -> Result<ScoringConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut scoring = ScoringConfig::default();

    if let Some(value) = lookup("SCORING_STRETCH_THRESHOLD") {
        scoring.stretch_threshold = value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|threshold| (0.0..1.0).contains(threshold))
            .ok_or(ConfigError::InvalidStretchThreshold { value })?;
    }

    if let Some(value) = lookup("SCORING_TIER_THRESHOLDS") {
        scoring.tier_thresholds =
            parse_tier_thresholds(&value).ok_or(ConfigError::InvalidTierThresholds { value })?;
    }

    if let Some(value) = lookup("DASHBOARD_PAGE_SIZE") {
        scoring.page_size = value
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|size| *size > 0)
            .ok_or(ConfigError::InvalidPageSize { value })?;
    }

    if let Some(value) = lookup("DASHBOARD_DEFAULT_SORT") {
        scoring.default_sort =
            SortOption::parse(&value).ok_or(ConfigError::InvalidDefaultSort { value })?;
    }

    Ok(scoring)
}

/// `"85,70,50,25"` in excellent, strong, moderate, weak order.
fn parse_tier_thresholds(value: &str) -> Option<TierThresholds> {
    let numbers = value
        .split(',')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect::<Option<Vec<f64>>>()?;
    let [excellent, strong, moderate, weak] = numbers.as_slice() else {
        return None;
    };

    let thresholds = TierThresholds {
        excellent: *excellent,
        strong: *strong,
        moderate: *moderate,
        weak: *weak,
    };
    thresholds.is_descending().then_some(thresholds)
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the server reads its property snapshot from; without a path the
/// dashboard starts empty.
#[derive(Debug, Clone, Default)]
pub struct DashboardConfig {
    pub snapshot_path: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidStretchThreshold { value: String },
    InvalidTierThresholds { value: String },
    InvalidPageSize { value: String },
    InvalidDefaultSort { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidStretchThreshold { value } => write!(
                f,
                "SCORING_STRETCH_THRESHOLD must be a fraction in [0, 1), got '{}'",
                value
            ),
            ConfigError::InvalidTierThresholds { value } => write!(
                f,
                "SCORING_TIER_THRESHOLDS must be four descending numbers, got '{}'",
                value
            ),
            ConfigError::InvalidPageSize { value } => write!(
                f,
                "DASHBOARD_PAGE_SIZE must be a positive integer, got '{}'",
                value
            ),
            ConfigError::InvalidDefaultSort { value } => write!(
                f,
                "DASHBOARD_DEFAULT_SORT must be a known sort key, got '{}'",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}
