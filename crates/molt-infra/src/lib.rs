//! Infrastructure layer for the Moltbook agent.
//!
//! Contains implementations of the client traits defined in `molt-core`:
//! the Moltbook REST client, the Pollinations chat-completion provider
//! (whole-response and SSE streaming), and config/data-directory loading.

pub mod chat;
pub mod config;
pub mod social;

#[cfg(test)]
pub(crate) mod test_support;
