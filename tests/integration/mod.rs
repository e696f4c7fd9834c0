//! Integration tests for check_logstash
//!
//! Each test starts an in-process mock of the Logstash monitoring API on
//! 127.0.0.1 and runs the check against it, either through the library or
//! through the compiled binary.
//!
//! Run with: cargo test --test integration

mod helpers;

mod check_scenarios;
