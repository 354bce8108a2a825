//! Layered service configuration: built-in defaults, an optional TOML file
//! and the `PORT` environment variable.

mod cli;
pub use clap::Parser;
pub use cli::*;

mod settings;
pub use settings::*;
