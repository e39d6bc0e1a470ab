use rustc_hash::FxHashSet;

use super::state::{JobId, JobState, SimCtx};

#[derive(Debug)]
pub struct Observer {
    step: u64,
    completed_seen: FxHashSet<JobId>,
}

impl Observer {
    pub fn new() -> Self {
        Self {
            step: 0,
            completed_seen: FxHashSet::default(),
        }
    }

    pub fn observe(&mut self, ctx: &SimCtx, current: Option<JobId>) {
        self.step += 1;

        if let Some(id) = current {
            let job = ctx.job(id);
            debug_assert_eq!(
                job.state,
                JobState::Running,
                "selected job {id} must be Running"
            );
            debug_assert!(
                ctx.ready.contains(id),
                "selected job {id} must remain a ready set member"
            );
        }

        let running = ctx
            .jobs()
            .iter()
            .filter(|job| job.state == JobState::Running)
            .count();
        debug_assert!(running <= 1, "more than one job Running at step {}", self.step);
        debug_assert_eq!(
            running,
            current.map_or(0, |_| 1),
            "Running designation out of sync with the scheduler's selection"
        );

        for (slot, job) in ctx.jobs().iter().enumerate() {
            debug_assert_eq!(
                job.id,
                slot as JobId + 1,
                "ledger slot {slot} does not match job id"
            );
            debug_assert!(
                job.remaining_time > 0 || job.state == JobState::Completed,
                "job {} ran out of service without completing",
                job.id
            );
        }

        for id in ctx.ready.iter() {
            let job = ctx.job(id);
            debug_assert_ne!(
                job.state,
                JobState::Completed,
                "completed job {id} still present in the ready set"
            );
            debug_assert!(
                !self.completed_seen.contains(&id),
                "job {id} reappeared in the ready set after completing"
            );
        }

        for job in ctx.jobs() {
            if job.state == JobState::Completed {
                debug_assert!(
                    job.completion_time.is_some(),
                    "completed job {} has no completion tick",
                    job.id
                );
                self.completed_seen.insert(job.id);
            }
        }
    }
}
