//! Authentication module
//!
//! Supports: Bearer token (personal access token), Custom Headers
//!
//! The `Authenticator` decorates every outgoing request with the
//! configured credentials.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;
