//! Chat-completion abstractions.
//!
//! - `ChatProvider`: RPITIT trait for concrete completion backends
//! - `Aggregator` / `FragmentSink`: the pure fold over stream fragments and
//!   the side-effecting observer that sees the same fragments
//! - `ChatClient`: request assembly plus the "empty text on failure" contract

pub mod aggregate;
pub mod client;
pub mod provider;
