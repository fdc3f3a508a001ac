//! Auth configuration types

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Authentication configuration
#[derive(Clone, Default, PartialEq, Eq)]
pub enum AuthConfig {
    /// No authentication (mock servers, proxies that inject credentials)
    #[default]
    None,

    /// Bearer token authentication
    Bearer {
        /// The personal access token
        token: String,
    },

    /// Custom headers
    CustomHeaders {
        /// Headers to add to each request
        headers: HashMap<String, String>,
    },
}

impl AuthConfig {
    /// Bearer auth with a non-blank token
    pub fn bearer(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            return Err(Error::auth("access token is empty"));
        }
        Ok(Self::Bearer {
            token: token.to_string(),
        })
    }

    /// Check whether any credentials are configured
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bearer { .. } => f.debug_struct("Bearer").field("token", &"***").finish(),
            Self::CustomHeaders { headers } => {
                let mut names: Vec<_> = headers.keys().collect();
                names.sort();
                f.debug_struct("CustomHeaders")
                    .field("headers", &names)
                    .finish()
            }
        }
    }
}
