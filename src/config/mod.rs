//! Configuration for check_logstash.
//!
//! Settings come from command-line flags, falling back to environment
//! variables and then to defaults. The result is an immutable [`Config`]
//! passed by reference to every component.
//!
//! # Example
//!
//! ```rust,ignore
//! use clap::Parser;
//! use check_logstash::config::{Cli, Config, ProcessEnv};
//!
//! let config = Config::from_cli(Cli::parse(), &ProcessEnv)?;
//! println!("Checking {}", config.base_url());
//! ```

mod cli;
mod error;
mod logging;
mod parse;

use std::time::Duration;

pub use cli::{Cli, EXAMPLE_USAGE};
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use parse::{parse_duration, EnvSource, ProcessEnv};

use parse::{env_bool, env_opt, env_parse};

/// Default Logstash monitoring API port.
pub const DEFAULT_PORT: u16 = 9600;

/// Default timeout for every network operation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Complete application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Logstash host name or address.
    pub host: String,
    /// Monitoring API port.
    pub port: u16,
    /// Bound for the reachability probe and each HTTP request.
    pub timeout: Duration,
    /// Sequential execution with debug logging.
    pub debug: bool,
    /// Append `</br>` to OK detail lines.
    pub checkmk: bool,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Create a configuration with defaults for everything but the target.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: DEFAULT_TIMEOUT,
            debug: false,
            checkmk: false,
            logging: LoggingConfig::default(),
        }
    }

    /// Set the network timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable or disable debug (sequential) mode.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Enable or disable check_mk line breaks.
    pub fn with_checkmk(mut self, checkmk: bool) -> Self {
        self.checkmk = checkmk;
        self
    }

    /// Resolve flags against the environment.
    ///
    /// Priority: flag > environment variable > default.
    pub fn from_cli(cli: Cli, env: &impl EnvSource) -> Result<Self, ConfigError> {
        let host = cli
            .host
            .filter(|h| !h.trim().is_empty())
            .or_else(|| env_opt(env, "LOGSTASH_HOST"))
            .ok_or_else(|| ConfigError::Missing { key: "host".into() })?;

        let port = match cli.port {
            Some(port) => port,
            None => env_parse(env, "LOGSTASH_PORT")?.unwrap_or(DEFAULT_PORT),
        };

        let timeout = match cli.timeout {
            Some(raw) => resolve_timeout("timeout", &raw)?,
            None => match env_opt(env, "LOGSTASH_TIMEOUT") {
                Some(raw) => resolve_timeout("LOGSTASH_TIMEOUT", &raw)?,
                None => DEFAULT_TIMEOUT,
            },
        };

        let debug = cli.debug || env_bool(env, "LOGSTASH_DEBUG", false)?;
        let checkmk = cli.checkmk || env_bool(env, "LOGSTASH_CHECKMK", false)?;

        Ok(Self {
            host,
            port,
            timeout,
            debug,
            checkmk,
            logging: LoggingConfig::from_env(env, debug)?,
        })
    }

    /// `http://host:port`, bracketing IPv6 literals.
    pub fn base_url(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("http://[{}]:{}", self.host, self.port)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }

    /// Print configuration summary to log.
    pub fn log_summary(&self) {
        use tracing::debug;

        debug!("Configuration loaded:");
        debug!("  Target: {}", self.base_url());
        debug!("  Timeout: {}ms", self.timeout.as_millis());
        debug!("  Mode: {}", if self.debug { "sequential" } else { "concurrent" });
        debug!("  check_mk line breaks: {}", self.checkmk);
    }
}

/// A timeout must be a positive duration.
fn resolve_timeout(key: &str, raw: &str) -> Result<Duration, ConfigError> {
    match parse_duration(raw) {
        Ok(Some(timeout)) => Ok(timeout),
        Ok(None) => Err(ConfigError::Invalid {
            key: key.into(),
            message: "timeout must be greater than zero".into(),
        }),
        Err(error) => Err(ConfigError::Parse {
            key: key.into(),
            value: raw.into(),
            error,
        }),
    }
}
