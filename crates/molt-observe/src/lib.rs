//! Tracing and OpenTelemetry setup for the molt agent.

pub mod tracing_setup;
