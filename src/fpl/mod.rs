//! Fantasy Premier League API client, wire types and point aggregation.

pub mod compute;
pub mod http;
pub mod types;
