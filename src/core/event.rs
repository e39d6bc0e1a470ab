use crate::core::{Job, JobId, Ticks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    // Pre-execution snapshot at the top of every tick
    Tick {
        tick: Ticks,
        waiting: usize,
        running: Option<Job>,
    },
    JobArrived {
        tick: Ticks,
        job: Job,
    },
    JobCompleted {
        tick: Ticks,
        id: JobId,
    },
}
