//! Logging configuration.

use super::parse::{env_opt, EnvSource};
use super::ConfigError;

/// Default filter: only problems, so plugin runs stay quiet on stderr.
const DEFAULT_FILTER: &str = "check_logstash=warn";

/// Log output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Logging configuration loaded from environment.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Log level filter (from LOG_LEVEL or RUST_LOG, or debug when --debug is set).
    pub filter: String,
    /// Service name for structured logging.
    pub service_name: String,
    /// Output format (LOG_FORMAT=json|text).
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            service_name: "check_logstash".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl LoggingConfig {
    /// Load configuration from environment variables.
    ///
    /// Priority: --debug > LOG_LEVEL > RUST_LOG > default
    ///
    /// LOG_LEVEL accepts simple values: trace, debug, info, warn, error
    /// RUST_LOG accepts full tracing filter syntax: check_logstash=debug,hyper=warn
    pub fn from_env(env: &impl EnvSource, debug: bool) -> Result<Self, ConfigError> {
        let filter = if debug {
            "check_logstash=debug".to_string()
        } else {
            Self::resolve_log_filter(env)
        };

        let format = match env_opt(env, "LOG_FORMAT").map(|f| f.to_lowercase()) {
            None => LogFormat::Text,
            Some(f) if f == "text" => LogFormat::Text,
            Some(f) if f == "json" => LogFormat::Json,
            Some(f) => {
                return Err(ConfigError::Invalid {
                    key: "LOG_FORMAT".into(),
                    message: format!("'{}', expected: text, json", f),
                })
            }
        };

        Ok(Self {
            filter,
            service_name: env_opt(env, "SERVICE_NAME")
                .unwrap_or_else(|| "check_logstash".to_string()),
            format,
        })
    }

    /// Resolve log filter from environment.
    fn resolve_log_filter(env: &impl EnvSource) -> String {
        // 1. LOG_LEVEL (simple: debug, info, warn, error)
        if let Some(level) = env_opt(env, "LOG_LEVEL") {
            let level = level.to_lowercase();
            match level.as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => {
                    return format!("check_logstash={}", level);
                }
                _ => {
                    // Invalid level, fall through to RUST_LOG
                    eprintln!(
                        "Warning: Invalid LOG_LEVEL '{}', expected: trace, debug, info, warn, error",
                        level
                    );
                }
            }
        }

        // 2. RUST_LOG (full tracing filter syntax)
        if let Some(filter) = env_opt(env, "RUST_LOG") {
            return filter;
        }

        DEFAULT_FILTER.to_string()
    }
}
