use keyed_priority_queue::KeyedPriorityQueue;

use super::error::SimError;
use super::state::{Job, JobId, Ticks};

/// Ranking policy for the ready set, fixed for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderingMode {
    /// Rank by priority, lower value first.
    #[default]
    Priority,
    /// Rank by remaining service time, lower first.
    ShortestRemaining,
}

// KeyedPriorityQueue is a max-heap, so we need to flip-flop Rank's Ord.
// Ties on the policy key fall through to earlier arrival, then lower id;
// the order is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    key: Ticks,
    arrival: Ticks,
    id: JobId,
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.arrival.cmp(&self.arrival))
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Holds every job that has arrived but not yet completed, ranked by the
/// active [`OrderingMode`]. Membership is by id; the ledger owns the jobs.
#[derive(Debug)]
pub struct ReadySet {
    mode: OrderingMode,
    queue: KeyedPriorityQueue<JobId, Rank>,
}

impl ReadySet {
    pub fn new(mode: OrderingMode) -> Self {
        Self {
            mode,
            queue: KeyedPriorityQueue::new(),
        }
    }

    pub fn mode(&self) -> OrderingMode {
        self.mode
    }

    fn rank_of(&self, job: &Job) -> Rank {
        let key = match self.mode {
            OrderingMode::Priority => job.priority as Ticks,
            OrderingMode::ShortestRemaining => job.remaining_time,
        };
        Rank {
            key,
            arrival: job.arrival_time,
            id: job.id,
        }
    }

    pub fn insert(&mut self, job: &Job) {
        debug_assert!(!job.is_completed(), "completed job {} cannot wait", job.id);
        let previous = self.queue.push(job.id, self.rank_of(job));
        debug_assert!(
            previous.is_none(),
            "job {} already present in the ready set",
            job.id
        );
    }

    // Re-rank a member whose remaining time changed. A no-op reorder in
    // priority mode, but shortest-remaining ranks follow the decrement.
    pub fn refresh(&mut self, job: &Job) {
        let previous = self.queue.push(job.id, self.rank_of(job));
        debug_assert!(
            previous.is_some(),
            "refreshing job {} that is not in the ready set",
            job.id
        );
    }

    /// The best-ranked job id, without removal. Idempotent: repeated calls
    /// with no mutation in between return the same id.
    pub fn peek_best(&self) -> Result<JobId, SimError> {
        self.queue
            .peek()
            .map(|(id, _)| *id)
            .ok_or(SimError::EmptyReadySet)
    }

    pub fn remove(&mut self, id: JobId) -> bool {
        self.queue.remove(&id).is_some()
    }

    pub fn contains(&self, id: JobId) -> bool {
        self.queue.get_priority(&id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Enumerate member ids for reporting; order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = JobId> + '_ {
        self.queue.iter().map(|(id, _)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::JobState;
    use pretty_assertions::assert_eq;

    fn job(id: JobId, priority: u8, arrival: Ticks, remaining: Ticks) -> Job {
        Job {
            id,
            priority,
            arrival_time: arrival,
            remaining_time: remaining,
            state: JobState::Waiting,
            completion_time: None,
        }
    }

    #[test]
    fn priority_mode_ranks_lowest_priority_value_first() {
        let mut ready = ReadySet::new(OrderingMode::Priority);
        ready.insert(&job(1, 3, 0, 5));
        ready.insert(&job(2, 1, 0, 9));
        ready.insert(&job(3, 2, 0, 1));
        assert_eq!(ready.peek_best(), Ok(2));
    }

    #[test]
    fn shortest_remaining_mode_ranks_lowest_remaining_first() {
        let mut ready = ReadySet::new(OrderingMode::ShortestRemaining);
        ready.insert(&job(1, 1, 0, 5));
        ready.insert(&job(2, 4, 0, 2));
        ready.insert(&job(3, 2, 0, 9));
        assert_eq!(ready.peek_best(), Ok(2));
    }

    #[test]
    fn equal_keys_break_ties_by_arrival_then_id() {
        let mut ready = ReadySet::new(OrderingMode::Priority);
        ready.insert(&job(4, 2, 7, 3));
        ready.insert(&job(2, 2, 5, 3));
        ready.insert(&job(3, 2, 5, 3));
        // Same priority everywhere: earliest arrival wins, then lowest id.
        assert_eq!(ready.peek_best(), Ok(2));
        ready.remove(2);
        assert_eq!(ready.peek_best(), Ok(3));
        ready.remove(3);
        assert_eq!(ready.peek_best(), Ok(4));
    }

    #[test]
    fn peek_best_is_idempotent() {
        let mut ready = ReadySet::new(OrderingMode::Priority);
        ready.insert(&job(1, 2, 0, 4));
        ready.insert(&job(2, 1, 1, 4));
        assert_eq!(ready.peek_best(), Ok(2));
        assert_eq!(ready.peek_best(), Ok(2));
        assert_eq!(ready.len(), 2);
    }

    #[test]
    fn peek_best_on_empty_set_is_an_error() {
        let ready = ReadySet::new(OrderingMode::Priority);
        assert_eq!(ready.peek_best(), Err(SimError::EmptyReadySet));
    }

    #[test]
    fn refresh_reorders_after_remaining_time_changes() {
        let mut ready = ReadySet::new(OrderingMode::ShortestRemaining);
        let mut a = job(1, 1, 0, 3);
        let b = job(2, 1, 0, 4);
        ready.insert(&a);
        ready.insert(&b);
        assert_eq!(ready.peek_best(), Ok(1));

        // Job 2 is untouched while job 1 runs twice: 3 -> 1.
        a.remaining_time = 1;
        ready.refresh(&a);
        assert_eq!(ready.peek_best(), Ok(1));

        // And the other way around: job 1 back above job 2.
        a.remaining_time = 5;
        ready.refresh(&a);
        assert_eq!(ready.peek_best(), Ok(2));
    }

    #[test]
    fn remove_reports_membership() {
        let mut ready = ReadySet::new(OrderingMode::Priority);
        ready.insert(&job(1, 1, 0, 2));
        assert!(ready.remove(1));
        assert!(!ready.remove(1));
        assert!(ready.is_empty());
    }
}
