//! CLI commands and argument parsing

use crate::types::DropletId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// DigitalOcean droplet client
#[derive(Parser, Debug)]
#[command(name = "droplet-kit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API token (overrides config file and DIGITALOCEAN_ACCESS_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// API base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all droplets
    List,

    /// Show one droplet
    Get {
        /// Droplet id
        id: DropletId,
    },

    /// Create a droplet
    Create {
        /// Droplet name
        name: String,

        #[command(flatten)]
        settings: CreateArgs,

        /// Wait until the droplet is active
        #[arg(long)]
        wait: bool,
    },

    /// Create several identically configured droplets
    CreateMultiple {
        /// Droplet names
        #[arg(required = true)]
        names: Vec<String>,

        #[command(flatten)]
        settings: CreateArgs,
    },

    /// Delete a droplet
    Delete {
        /// Droplet id
        id: DropletId,
    },

    /// List kernels available to a droplet
    Kernels {
        /// Droplet id
        id: DropletId,
    },

    /// List snapshots of a droplet
    Snapshots {
        /// Droplet id
        id: DropletId,
    },

    /// List backups of a droplet
    Backups {
        /// Droplet id
        id: DropletId,
    },

    /// List actions performed on a droplet
    Actions {
        /// Droplet id
        id: DropletId,
    },

    /// List droplets on the same physical server
    Neighbors {
        /// Droplet id
        id: DropletId,
    },
}

/// Settings shared by `create` and `create-multiple`
#[derive(clap::Args, Debug, Clone)]
pub struct CreateArgs {
    /// Region slug
    #[arg(long)]
    pub region: String,

    /// Size slug
    #[arg(long)]
    pub size: String,

    /// Image slug or id
    #[arg(long)]
    pub image: String,

    /// SSH key id or fingerprint (repeatable)
    #[arg(long = "ssh-key")]
    pub ssh_keys: Vec<String>,

    /// Tag (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Enable backups
    #[arg(long)]
    pub backups: bool,

    /// Enable IPv6
    #[arg(long)]
    pub ipv6: bool,

    /// Enable monitoring agent
    #[arg(long)]
    pub monitoring: bool,

    /// Cloud-init user data file
    #[arg(long)]
    pub user_data: Option<PathBuf>,

    /// VPC to place the droplet in
    #[arg(long)]
    pub vpc_uuid: Option<String>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
