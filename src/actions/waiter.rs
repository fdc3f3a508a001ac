//! Polls an action until it settles
//!
//! ```text
//!   Pending ──poll──▶ Polling{attempt, failures} ──completed──▶ Completed
//!                       │    ▲                   ──errored────▶ Failed
//!                       └────┘ in-progress / tolerated fetch failure
//! ```

use super::types::{Action, ActionSource, ActionStatus};
use crate::error::{Error, Result};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Polling configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitConfig {
    /// Delay between polls
    pub poll_interval: Duration,
    /// Give up once this much time has passed
    pub max_wait: Duration,
    /// Consecutive fetch errors tolerated before giving up
    pub max_poll_failures: u32,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            max_wait: Duration::from_secs(600),
            max_poll_failures: 3,
        }
    }
}

/// Where a wait currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitState {
    /// Nothing polled yet
    Pending,
    /// At least one poll issued, action not settled
    Polling {
        attempt: u32,
        consecutive_failures: u32,
    },
    /// Action completed
    Completed,
    /// Action errored, or polling itself failed too often
    Failed,
}

impl WaitState {
    /// Check if no further polling will happen
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Result of a single poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The provider answered with this status
    Status(ActionStatus),
    /// The status request itself failed
    FetchFailed,
}

/// Drives the wait state machine against an [`ActionSource`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionWaiter {
    config: WaitConfig,
}

impl ActionWaiter {
    pub fn new(config: WaitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WaitConfig {
        &self.config
    }

    /// Apply one poll outcome to a state
    pub fn transition(&self, state: WaitState, outcome: PollOutcome) -> WaitState {
        let (attempt, failures) = match state {
            WaitState::Pending => (0, 0),
            WaitState::Polling {
                attempt,
                consecutive_failures,
            } => (attempt, consecutive_failures),
            terminal => return terminal,
        };

        match outcome {
            PollOutcome::Status(ActionStatus::InProgress) => WaitState::Polling {
                attempt: attempt + 1,
                consecutive_failures: 0,
            },
            PollOutcome::Status(ActionStatus::Completed) => WaitState::Completed,
            PollOutcome::Status(ActionStatus::Errored | ActionStatus::Unknown) => {
                WaitState::Failed
            }
            PollOutcome::FetchFailed if failures >= self.config.max_poll_failures => {
                WaitState::Failed
            }
            PollOutcome::FetchFailed => WaitState::Polling {
                attempt: attempt + 1,
                consecutive_failures: failures + 1,
            },
        }
    }

    /// Poll the action at `href` until it completes.
    ///
    /// Returns the completed action. An errored or unrecognized status is
    /// `Error::ActionFailed`; running past `max_wait` is `Error::WaitTimeout`;
    /// too many consecutive fetch errors return the last one.
    pub async fn wait<S>(&self, source: &S, href: &str) -> Result<Action>
    where
        S: ActionSource + ?Sized,
    {
        let started = Instant::now();
        let mut state = WaitState::Pending;

        loop {
            state = match source.fetch_action(href).await {
                Ok(action) => {
                    let status = action.status_kind();
                    match self.transition(state, PollOutcome::Status(status)) {
                        WaitState::Completed => {
                            info!(
                                action_id = action.id,
                                elapsed = ?started.elapsed(),
                                "Action completed"
                            );
                            return Ok(action);
                        }
                        WaitState::Failed => {
                            return Err(Error::action_failed(action.id, action.status));
                        }
                        next => {
                            debug!(
                                action_id = action.id,
                                status = %action.status,
                                "Action still running"
                            );
                            next
                        }
                    }
                }
                Err(err) => match self.transition(state, PollOutcome::FetchFailed) {
                    WaitState::Failed => return Err(err),
                    next => {
                        warn!(href, error = %err, "Action poll failed, will retry");
                        next
                    }
                },
            };

            let elapsed = started.elapsed();
            if elapsed >= self.config.max_wait {
                return Err(Error::WaitTimeout {
                    waited_ms: elapsed.as_millis() as u64,
                });
            }
            tokio::time::sleep(self.config.poll_interval.min(self.config.max_wait - elapsed))
                .await;
        }
    }
}
