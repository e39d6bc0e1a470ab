pub mod driver;
pub mod error;
pub mod event;
pub mod observer;
pub mod ready_set;
pub mod state;

pub use driver::Scheduler;
pub use error::SimError;
pub use event::SimEvent;
pub use ready_set::{OrderingMode, ReadySet};
pub use state::{Job, JobId, JobState, Priority, SimCtx, Ticks};
