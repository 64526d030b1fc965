//! CLI module
//!
//! Minimal command-line consumer of the feed controller.
//!
//! # Commands
//!
//! - `check` - Probe the configured API with a single-page fetch
//! - `trending` - Load trending pages and print them as captioned rows

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
