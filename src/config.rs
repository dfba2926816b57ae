//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the compiled dashboard bundle (`index.html` + assets)
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Allowed CORS origins. Empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("pulseboard-ui/dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Analytics upstream configuration.
///
/// The analytics API is owned by another service; the server only probes it
/// for readiness reporting.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the analytics API, e.g. `http://analytics.internal:9000`
    #[serde(default)]
    pub analytics_base_url: Option<String>,

    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_ms: u64,
}

fn default_probe_timeout() -> u64 {
    3000
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            analytics_base_url: None,
            probe_timeout_ms: default_probe_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Whether structured JSON output was requested
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("pulseboard").join("config.toml")),
            Some(PathBuf::from("/etc/pulseboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = lookup("PULSEBOARD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PULSEBOARD_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(dir) = lookup("PULSEBOARD_STATIC_DIR") {
            self.server.static_dir = PathBuf::from(dir);
        }

        // Upstream overrides
        if let Some(url) = lookup("PULSEBOARD_API_BASE_URL") {
            self.upstream.analytics_base_url = if url.trim().is_empty() {
                None
            } else {
                Some(url)
            };
        }

        // Logging overrides
        if let Some(level) = lookup("PULSEBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("PULSEBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Pulseboard Configuration
#
# Environment variables override these settings:
# - PULSEBOARD_HOST
# - PULSEBOARD_PORT
# - PULSEBOARD_STATIC_DIR
# - PULSEBOARD_API_BASE_URL
# - PULSEBOARD_LOG_LEVEL
# - PULSEBOARD_LOG_FORMAT

[server]
# Server host
host = "0.0.0.0"

# Server port
port = 8080

# Directory containing the built dashboard (trunk output)
static_dir = "pulseboard-ui/dist"

# Allowed CORS origins (empty = any)
cors_origins = []

[upstream]
# Base URL of the analytics API the dashboard reads from.
# Used only for readiness probing.
# analytics_base_url = "http://localhost:9000"

# Probe timeout in milliseconds
probe_timeout_ms = 3000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "0.0.0.0:8080");
        assert_eq!(config.server.static_dir, PathBuf::from("pulseboard-ui/dist"));
        assert!(config.upstream.analytics_base_url.is_none());
        assert_eq!(config.upstream.probe_timeout_ms, 3000);
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nport = 9090\n\n[upstream]\nanalytics_base_url = \"http://analytics:9000\""
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(
            config.upstream.analytics_base_url.as_deref(),
            Some("http://analytics:9000")
        );
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/pulseboard.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("PULSEBOARD_PORT", "3000"),
            ("PULSEBOARD_API_BASE_URL", "http://api.example.com"),
            ("PULSEBOARD_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.upstream.analytics_base_url.as_deref(),
            Some("http://api.example.com")
        );
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_invalid_port_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "PULSEBOARD_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_blank_upstream_override_clears() {
        let mut config = Config::default();
        config.upstream.analytics_base_url = Some("http://old".to_string());
        config.apply_overrides(|key| (key == "PULSEBOARD_API_BASE_URL").then(String::new));
        assert!(config.upstream.analytics_base_url.is_none());
    }
}
