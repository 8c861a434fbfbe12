//! Execution modes: HTTP server (default) and one-shot CLI commands

pub mod cli;
pub mod server;

pub use cli::run_cli;
pub use server::run_server;
