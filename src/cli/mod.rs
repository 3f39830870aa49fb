//! Command-line interface definitions and subcommand implementations.

pub mod args;
pub mod check;
pub mod links;
pub mod routes;

pub use args::{Cli, Commands};
