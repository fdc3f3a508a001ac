//! Action types

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An asynchronous operation tracked by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: u64,
    /// Raw status string (`in-progress`, `completed`, `errored`)
    pub status: String,
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resource_id: Option<u64>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub region_slug: Option<String>,
}

impl Action {
    /// Parsed status
    pub fn status_kind(&self) -> ActionStatus {
        ActionStatus::parse(&self.status)
    }

    /// True once the provider reports a terminal status
    pub fn is_finished(&self) -> bool {
        !matches!(self.status_kind(), ActionStatus::InProgress)
    }
}

/// Known action statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    InProgress,
    Completed,
    Errored,
    /// A status this client does not know about
    Unknown,
}

impl ActionStatus {
    /// Parse a provider status string
    pub fn parse(status: &str) -> Self {
        match status {
            "in-progress" => Self::InProgress,
            "completed" => Self::Completed,
            "errored" => Self::Errored,
            _ => Self::Unknown,
        }
    }
}

/// Where action status comes from
#[async_trait]
pub trait ActionSource: Send + Sync {
    /// Fetch the current state of the action at `href`
    async fn fetch_action(&self, href: &str) -> Result<Action>;
}
