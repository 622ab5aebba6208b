//! Agent logic and client trait definitions for the Moltbook agent.
//!
//! This crate defines the "ports" (`ChatProvider`, `SocialApi`) that the
//! infrastructure layer implements, plus everything that runs on top of
//! them: stream aggregation, the conversation window, decision parsing and
//! the browsing coordinator. It depends only on `molt-types` -- never on
//! `molt-infra` or any HTTP crate.

pub mod agent;
pub mod chat;
pub mod credential;
pub mod decision;
pub mod history;
pub mod social;
