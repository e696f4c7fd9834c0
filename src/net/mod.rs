//! Network access: the TCP reachability probe and the stats HTTP client.

mod client;
mod error;
mod reachability;

pub use client::{HttpStatsClient, StatsSource};
pub use error::FetchError;
pub use reachability::{Reachability, TcpProber};
