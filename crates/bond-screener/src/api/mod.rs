//! API clients for market-data providers

pub mod iss;

pub use iss::{BondDataSource, IssClient};
