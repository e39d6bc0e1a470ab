use average::{Estimate, Mean};
use rand::Rng;

use super::{
    arrival::ArrivalSource,
    config::SimConfig,
    report::{Reporter, Summary},
};
use crate::core::{JobId, Priority, Scheduler, SimError, SimEvent, Ticks};

pub struct Sim<R: Rng> {
    pub core: Scheduler,
    arrivals: ArrivalSource<R>,
    config: SimConfig,
}

impl<R: Rng> Sim<R> {
    pub fn new(config: SimConfig, rng: R) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            core: Scheduler::new(config.ordering, config.quantum),
            arrivals: ArrivalSource::new(&config, rng),
            config,
        })
    }

    /// Admit a job by hand at the current tick, bypassing the arrival
    /// source. Lets callers seed a workload before the first tick.
    pub fn admit(&mut self, priority: Priority, service: Ticks) -> JobId {
        let now = self.core.ctx.now;
        self.core.ctx.create_job(priority, service, now)
    }

    pub fn now(&self) -> Ticks {
        self.core.ctx.now
    }

    // Execute one tick: snapshot, schedule, admit arrivals, surface the
    // completion. Event order within the tick follows that sequence.
    pub fn step(&mut self) -> Result<Vec<SimEvent>, SimError> {
        self.core.ctx.advance_time(1);
        let tick = self.core.ctx.now;

        let mut events = vec![SimEvent::Tick {
            tick,
            waiting: self.core.ctx.ready.len(),
            running: self.core.current().map(|id| self.core.ctx.job(id).clone()),
        }];

        let completed = self.core.advance()?;

        if let Some(spec) = self.arrivals.maybe_generate() {
            let id = self.core.ctx.create_job(spec.priority, spec.service, tick);
            events.push(SimEvent::JobArrived {
                tick,
                job: self.core.ctx.job(id).clone(),
            });
        }

        if let Some(id) = completed {
            events.push(SimEvent::JobCompleted { tick, id });
        }

        Ok(events)
    }

    /// Drive the configured number of ticks, forwarding every event to
    /// the reporter, then emit and return the final summary.
    pub fn run(&mut self, reporter: &mut dyn Reporter) -> Result<Summary, SimError> {
        for _ in 0..self.config.duration {
            for event in self.step()? {
                reporter.on_event(&event);
            }
        }
        let summary = self.summary();
        reporter.on_summary(&summary);
        Ok(summary)
    }

    pub fn summary(&self) -> Summary {
        let ctx = &self.core.ctx;
        let waiting = ctx.ready.len();
        let total = ctx.total_created();

        let avg_remaining = if ctx.ready.is_empty() {
            None
        } else {
            let mean: Mean = ctx
                .ready
                .iter()
                .map(|id| ctx.job(id).remaining_time as f64)
                .collect();
            Some(mean.estimate())
        };

        Summary {
            waiting,
            completed: total - waiting,
            total,
            avg_remaining,
        }
    }
}
