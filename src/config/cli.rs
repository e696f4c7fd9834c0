//! Command-line flags.

use clap::Parser;

/// Example invocation shown with usage errors.
pub const EXAMPLE_USAGE: &str = "check_logstash -H logstash.domain.tld";

/// Check a Logstash node through its monitoring API.
///
/// Every flag falls back to an environment variable when omitted.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "check_logstash", version = crate::VERSION, about)]
pub struct Cli {
    /// Your logstash hostname, MANDATORY parameter [env: LOGSTASH_HOST]
    #[arg(short = 'H', long, value_name = "LOGSTASHSERVER")]
    pub host: Option<String>,

    /// Your logstash port, defaults to 9600 [env: LOGSTASH_PORT]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Timeout for each network operation, defaults to 5 seconds [env: LOGSTASH_TIMEOUT]
    #[arg(short, long, value_name = "SECONDS")]
    pub timeout: Option<String>,

    /// Run probes sequentially and print debug information to stderr [env: LOGSTASH_DEBUG]
    #[arg(short, long)]
    pub debug: bool,

    /// Append HTML </br> to each line in the long output for the check_mk GUI [env: LOGSTASH_CHECKMK]
    #[arg(long)]
    pub checkmk: bool,
}
