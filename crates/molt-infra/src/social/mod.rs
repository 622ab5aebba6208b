//! Moltbook REST API client.

pub mod client;
pub mod envelope;
