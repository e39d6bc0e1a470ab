use std::fmt;

use crate::core::SimEvent;

/// End-of-run statistics. `avg_remaining` is `None` when no incomplete
/// jobs are left; there is nothing to average over.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Jobs still waiting or running (ready set size at the final tick).
    pub waiting: usize,
    pub completed: usize,
    pub total: usize,
    pub avg_remaining: Option<f64>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} waiting, {} completed, {} total, avg time left ",
            self.waiting, self.completed, self.total
        )?;
        match self.avg_remaining {
            Some(avg) => write!(f, "{avg:.2}"),
            None => write!(f, "undefined"),
        }
    }
}

/// Sink for per-tick lifecycle events and the final summary.
pub trait Reporter {
    fn on_event(&mut self, event: &SimEvent);
    fn on_summary(&mut self, summary: &Summary);
}

/// Discards everything; for headless runs and tests.
#[derive(Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn on_event(&mut self, _event: &SimEvent) {}
    fn on_summary(&mut self, _summary: &Summary) {}
}
