//! Shared domain types for the Moltbook agent.
//!
//! This crate contains the data shapes passed between the agent layers:
//! chat messages and stream events, Moltbook posts and profiles, parsed
//! engagement decisions, configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod config;
pub mod decision;
pub mod error;
pub mod llm;
pub mod social;
