//! Host loop
//!
//! Glues the terminal host to the pure core: events are translated into
//! messages, `update` produces commands, and the runner executes them.

pub mod app_runner;

pub use app_runner::AppRunner;
