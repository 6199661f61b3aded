//! Command line configuration.

pub mod cli_args;

pub use cli_args::CliArgs;
