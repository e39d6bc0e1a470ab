use tracing::trace;

use super::{
    error::SimError,
    observer::Observer,
    ready_set::OrderingMode,
    state::{JobId, SimCtx, Ticks},
};

pub struct Scheduler {
    pub ctx: SimCtx,
    current: Option<JobId>,
    quantum: Ticks,
    slice_left: Ticks,
    observer: Observer,
}

impl Scheduler {
    pub fn new(mode: OrderingMode, quantum: Ticks) -> Self {
        debug_assert!(quantum > 0, "quantum must be at least one tick");
        Self {
            ctx: SimCtx::new(mode),
            current: None,
            quantum,
            slice_left: quantum,
            observer: Observer::new(),
        }
    }

    /// The job selected as of the last `advance`, if any.
    pub fn current(&self) -> Option<JobId> {
        self.current
    }

    // Execute one tick. Returns the id of the job that completed during
    // this tick, if one did.
    pub fn advance(&mut self) -> Result<Option<JobId>, SimError> {
        // Quantum boundary reached: open a fresh slice
        if self.slice_left == 0 {
            self.slice_left = self.quantum;
        }

        // A fresh slice re-evaluates which job should run. Re-selecting
        // the incumbent is allowed: the boundary is a re-evaluation
        // point, not a forced rotation.
        if !self.ctx.ready.is_empty() && self.slice_left == self.quantum {
            let best = self.ctx.ready.peek_best()?;
            self.reselect(best);
        }

        let mut completed = None;
        if let Some(id) = self.current {
            if self.ctx.run_selected(id)? {
                self.ctx.mark_completed(id, self.ctx.now);
                self.current = None;
                self.slice_left = self.quantum;
                completed = Some(id);
            } else {
                self.slice_left -= 1;
            }
        }
        // No ready jobs and nothing selected: idle tick

        self.observer.observe(&self.ctx, self.current);
        Ok(completed)
    }

    fn reselect(&mut self, id: JobId) {
        if self.current == Some(id) {
            return;
        }
        if let Some(previous) = self.current.take() {
            self.ctx.mark_waiting(previous);
        }
        trace!(id, tick = self.ctx.now, "quantum re-selection");
        self.ctx.mark_running(id);
        self.current = Some(id);
    }
}
