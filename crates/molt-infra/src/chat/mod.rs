//! Chat-completion provider implementations.

pub mod pollinations;
pub mod sse;
