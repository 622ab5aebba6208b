//! The agent coordinator and the browsing decision loop.

pub mod browse;
pub mod coordinator;
pub mod prompt;
