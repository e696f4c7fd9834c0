use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::{debug, error};

use check_logstash::check::{self, Severity};
use check_logstash::config::{Cli, Config, ConfigError, ProcessEnv, EXAMPLE_USAGE};
use check_logstash::logging;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not usage errors
            let code = if e.use_stderr() {
                Severity::Unknown.exit_code()
            } else {
                0
            };
            let _ = e.print();
            return exit_code(code);
        }
    };

    let config = match Config::from_cli(cli, &ProcessEnv) {
        Ok(config) => config,
        Err(e) => {
            print_usage_error(&e);
            return exit_code(Severity::Unknown.exit_code());
        }
    };

    logging::init(&config.logging);
    config.log_summary();

    // Single-threaded runtime: two concurrent requests need no worker pool
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            println!("UNKNOWN: failed to start runtime: {}", e);
            return exit_code(Severity::Unknown.exit_code());
        }
    };

    let report = runtime.block_on(check::run(&config));
    debug!(severity = %report.severity, "check finished");

    let (output, code) = check::render(&report);
    if let Err(e) = check::write_output(&mut std::io::stdout().lock(), &output) {
        error!(error = %e, "failed to write plugin output");
        return exit_code(Severity::Unknown.exit_code());
    }

    exit_code(code)
}

fn print_usage_error(error: &ConfigError) {
    match error {
        ConfigError::Missing { .. } => {
            println!("ERROR: Please specify your logstash server with -H <LOGSTASHSERVER>");
        }
        other => println!("ERROR: {}", other),
    }
    println!("Example: {}", EXAMPLE_USAGE);
    println!("{}", Cli::command().render_help());
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(3))
}
