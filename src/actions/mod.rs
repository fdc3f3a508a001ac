//! Action tracking
//!
//! The provider records long-running operations (create, power off,
//! snapshot, ...) as actions. This module models them and polls one until it
//! reaches a terminal status.

mod types;
mod waiter;

pub use types::{Action, ActionSource, ActionStatus};
pub use waiter::{ActionWaiter, PollOutcome, WaitConfig, WaitState};
