//! check_logstash - monitoring plugin for Logstash nodes.
//!
//! Connects to a node's monitoring API, reads pipeline throughput and JVM
//! heap statistics, and reduces them to a single plugin status: a summary
//! line, perfdata, a multi-line detail block and an exit code.
//!
//! # Architecture
//!
//! - [`net`] - TCP reachability probe and the plain-HTTP stats client
//! - [`metrics`] - pipeline and JVM fetchers producing [`check::ProbeResult`]s
//! - [`check`] - coordinator, aggregator and output rendering
//! - [`config`] - flags with environment fallbacks
//!
//! # Example
//!
//! ```rust,ignore
//! use check_logstash::check;
//! use check_logstash::config::Config;
//!
//! let config = Config::new("logstash.local", 9600);
//! let report = check::run(&config).await;
//! let (output, code) = check::render(&report);
//! ```

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit hash (8 chars) with optional "-dirty" suffix
pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// Full version string: "0.1.0 (abc12345)" or "0.1.0 (abc12345-dirty)"
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_VERSION"), ")");

pub mod check;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod net;

// Re-exports for convenience
pub use check::{ProbeResult, Report, Severity};
pub use config::Config;
