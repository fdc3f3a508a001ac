// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # droplet-kit
//!
//! Typed, pagination-aware access to DigitalOcean droplets.
//!
//! ## Features
//!
//! - **Generic Pagination**: One [`Paginator`] walks any listing endpoint through a
//!   [`PageFetcher`], with page and item bounds
//! - **Droplet Operations**: list, get, create (optionally waiting for the droplet
//!   to become active), create multiple, delete, kernels, snapshots, backups,
//!   actions, neighbors
//! - **Action Polling**: An explicit wait state machine over the provider's action API
//! - **Transport Retries**: Backoff on 5xx, timeouts and 429s
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use droplet_kit::{ClientConfig, DropletsService, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::default().with_env_token();
//!     let droplets = DropletsService::from_config(&config)?;
//!
//!     for droplet in droplets.list().await? {
//!         println!("{} {:?}", droplet.name, droplet.public_ipv4());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        DropletsService                          │
//! │  list  get  create(wait)  create_multiple  delete  kernels ...  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌───────────────┬──────────────┴────────┬────────────────────────┐
//! │  Pagination   │       Actions         │         HTTP           │
//! ├───────────────┼───────────────────────┼────────────────────────┤
//! │ Paginator     │ ActionWaiter          │ HttpClient             │
//! │ PageFetcher   │ WaitState machine     │ Retry / Backoff        │
//! │ Links / Meta  │ ActionSource          │ Bearer auth            │
//! └───────────────┴───────────────────────┴────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Add docs before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication
pub mod auth;

/// HTTP client with retry
pub mod http;

/// Generic pagination
pub mod pagination;

/// Action polling
pub mod actions;

/// Droplet resources and operations
pub mod droplets;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use actions::{Action, ActionWaiter, WaitConfig};
pub use config::ClientConfig;
pub use droplets::{
    Droplet, DropletCreateRequest, DropletMultiCreateRequest, DropletSettings, DropletsService,
};
pub use pagination::{Page, PageFetcher, PageRequest, PaginationConfig, Paginator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
