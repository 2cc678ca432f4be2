//! ChartSight session host.
//!
//! Wires configuration, logging and the session core together and exposes
//! the session operations as CLI subcommands.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

pub use app::App;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result};

#[cfg(test)]
mod tests;
