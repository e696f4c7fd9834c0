//! Environment variable parsing utilities.

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use super::ConfigError;

/// Lookup of environment-style settings.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<&str, &str> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| v.to_string())
    }
}

/// Get optional environment variable (None if empty or missing).
pub fn env_opt(env: &impl EnvSource, key: &str) -> Option<String> {
    env.var(key).filter(|s| !s.is_empty())
}

/// Parse environment variable as boolean.
/// Accepts 1/true/yes/on and 0/false/no/off (case-insensitive).
pub fn env_bool(env: &impl EnvSource, key: &str, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = env_opt(env, key) else {
        return Ok(default);
    };
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Parse {
            key: key.into(),
            value,
            error: "expected a boolean".into(),
        }),
    }
}

/// Parse environment variable with type conversion.
pub fn env_parse<T: FromStr>(env: &impl EnvSource, key: &str) -> Result<Option<T>, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env_opt(env, key) {
        Some(v) => v
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Parse {
                key: key.into(),
                value: v,
                error: e.to_string(),
            }),
        None => Ok(None),
    }
}

/// Parse duration string (e.g., "5", "30s", "2m", "1h").
/// A bare number is seconds. Returns None for "off" or "0".
pub fn parse_duration(s: &str) -> Result<Option<Duration>, String> {
    let s = s.trim().to_lowercase();

    if s == "off" || s == "0" || s.is_empty() {
        return Ok(None);
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix("ms") {
        let millis: u64 = n
            .parse()
            .map_err(|_| format!("invalid number: {}", n))?;
        return Ok(Some(Duration::from_millis(millis)).filter(|d| !d.is_zero()));
    } else if let Some(n) = s.strip_suffix('s') {
        (n, 1)
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 60)
    } else if let Some(n) = s.strip_suffix('h') {
        (n, 3600)
    } else {
        (s.as_str(), 1)
    };

    let num: u64 = num_str
        .parse()
        .map_err(|_| format!("invalid duration: {}", s))?;

    let secs = num
        .checked_mul(multiplier)
        .ok_or_else(|| format!("duration too large: {}", s))?;

    Ok(Some(Duration::from_secs(secs)).filter(|d| !d.is_zero()))
}
