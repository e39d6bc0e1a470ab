pub mod arrival;
pub mod config;
pub mod driver;
pub mod report;

pub use arrival::{ArrivalSource, JobSpec};
pub use config::SimConfig;
pub use driver::Sim;
pub use report::{Reporter, Summary};
