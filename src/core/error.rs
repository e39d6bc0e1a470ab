//! Failure modes of the scheduling engine.
//!
//! Idle ticks, empty ready sets and tickless arrivals are normal states,
//! not errors. The variants here are invariant violations or rejected
//! configuration; the simulation driver never produces them in a correct
//! run.

use thiserror::Error;

use super::state::JobId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// `peek_best` on an empty ready set. The scheduler guards for this;
    /// seeing it surface means the guard is broken.
    #[error("ready set is empty")]
    EmptyReadySet,

    /// A job with no remaining service time was told to run again.
    #[error("job {id} has no remaining service time")]
    JobExhausted { id: JobId },

    /// Rejected simulation parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
