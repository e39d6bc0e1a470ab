use std::fmt;

use tracing::debug;

use super::error::SimError;
use super::ready_set::{OrderingMode, ReadySet};

// Index into the ledger Vec is `id - 1`
pub type JobId = u64;
pub type Ticks = u64;
pub type Priority = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Waiting,
    Running,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: JobId,
    pub priority: Priority,
    pub arrival_time: Ticks,
    pub remaining_time: Ticks,
    pub state: JobState,
    pub completion_time: Option<Ticks>,
}

impl Job {
    pub fn decrement_remaining(&mut self) -> Result<(), SimError> {
        if self.remaining_time == 0 {
            return Err(SimError::JobExhausted { id: self.id });
        }
        self.remaining_time -= 1;
        Ok(())
    }

    pub fn is_completed(&self) -> bool {
        self.remaining_time == 0
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "job #{} priority({}) arrived at {}, {} left",
            self.id, self.priority, self.arrival_time, self.remaining_time
        )
    }
}

#[derive(Debug)]
pub struct SimCtx {
    pub now: Ticks,
    pub ready: ReadySet,
    // Append-only ledger of every job ever created; owns the Job values.
    // The ready set refers into it by id.
    jobs: Vec<Job>,

    // Increment upon job creation; ids start at 1
    next_job_id: JobId,
}

impl SimCtx {
    pub fn new(mode: OrderingMode) -> Self {
        Self {
            now: 0,
            ready: ReadySet::new(mode),
            jobs: Vec::new(),
            next_job_id: 1,
        }
    }

    pub fn advance_time(&mut self, delta: Ticks) {
        self.now = self.now.saturating_add(delta);
    }

    pub fn create_job(&mut self, priority: Priority, service: Ticks, arrival: Ticks) -> JobId {
        debug_assert!(service > 0, "job must require at least one tick of service");

        let id = self.next_job_id;
        self.next_job_id += 1;

        let job = Job {
            id,
            priority,
            arrival_time: arrival,
            remaining_time: service,
            state: JobState::Waiting,
            completion_time: None,
        };

        debug_assert_eq!(self.jobs.len() as JobId, id - 1, "JobId must match ledger slot");
        self.ready.insert(&job);
        self.jobs.push(job);
        debug!(id, priority, service, tick = arrival, "job admitted");

        id
    }

    pub fn job(&self, id: JobId) -> &Job {
        &self.jobs[(id - 1) as usize]
    }

    pub fn job_mut(&mut self, id: JobId) -> &mut Job {
        &mut self.jobs[(id - 1) as usize]
    }

    /// Ledger view: every job ever created, in id order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn total_created(&self) -> usize {
        self.jobs.len()
    }

    pub fn mark_running(&mut self, id: JobId) {
        debug_assert!(
            self.ready.contains(id),
            "job {id} must be in the ready set to run"
        );
        let job = self.job_mut(id);
        debug_assert_eq!(job.state, JobState::Waiting, "job {id} must wait before running");
        job.state = JobState::Running;
    }

    pub fn mark_waiting(&mut self, id: JobId) {
        let job = self.job_mut(id);
        debug_assert_eq!(
            job.state,
            JobState::Running,
            "only the running job {id} can be put back to waiting"
        );
        job.state = JobState::Waiting;
    }

    pub fn mark_completed(&mut self, id: JobId, completion_time: Ticks) {
        let removed = self.ready.remove(id);
        debug_assert!(removed, "completing job {id} that is not in the ready set");

        let job = self.job_mut(id);
        debug_assert_eq!(
            job.state,
            JobState::Running,
            "job {id} must have been running before completion"
        );
        debug_assert_eq!(job.remaining_time, 0, "job {id} completed with service left");

        job.state = JobState::Completed;
        job.completion_time = Some(completion_time);
        debug!(id, tick = completion_time, "job completed");
    }

    // Decrement the selected job's remaining time and re-rank it; true if
    // it just ran out of service.
    pub fn run_selected(&mut self, id: JobId) -> Result<bool, SimError> {
        let job = self.job_mut(id);
        job.decrement_remaining()?;
        if job.is_completed() {
            return Ok(true);
        }
        self.ready.refresh(&self.jobs[(id - 1) as usize]);
        Ok(false)
    }
}
