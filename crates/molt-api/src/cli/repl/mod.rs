//! Interactive REPL: command parsing, async input, console rendering.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod observer;
pub mod renderer;

pub use loop_runner::run_repl;
