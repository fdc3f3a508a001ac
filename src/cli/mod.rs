//! CLI module
//!
//! Command-line interface over [`DropletsService`](crate::droplets::DropletsService).
//!
//! # Commands
//!
//! - `list` - List all droplets
//! - `get` - Show one droplet
//! - `create` - Create a droplet, optionally waiting until it is active
//! - `create-multiple` - Create several droplets at once
//! - `delete` - Delete a droplet
//! - `kernels`, `snapshots`, `backups`, `actions`, `neighbors` - Per-droplet listings

mod commands;
mod runner;

pub use commands::{Cli, Commands, CreateArgs, OutputFormat};
pub use runner::Runner;
