use rand::rngs::StdRng;
use rand::SeedableRng;
use schedsim::{OrderingMode, Reporter, Sim, SimConfig, SimError, SimEvent, Summary};

struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn on_event(&mut self, event: &SimEvent) {
        match event {
            SimEvent::Tick {
                tick,
                waiting,
                running,
            } => {
                println!("time marker {tick}  waiting: {waiting}");
                match running {
                    Some(job) => println!("\texecuting: {job}"),
                    None => println!("\texecuting: none"),
                }
            }
            SimEvent::JobArrived { job, .. } => println!("\tcreated: {job}"),
            SimEvent::JobCompleted { tick, id } => {
                println!("\tcompleted: job #{id} at time {tick}")
            }
        }
    }

    fn on_summary(&mut self, summary: &Summary) {
        println!("**************  final report  **************");
        println!("{summary}");
    }
}

fn ordering_from_args() -> OrderingMode {
    match std::env::args().nth(1).as_deref() {
        Some("srt") => OrderingMode::ShortestRemaining,
        _ => OrderingMode::Priority,
    }
}

fn main() -> Result<(), SimError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let ordering = ordering_from_args();
    println!("**************  scheduling simulation  **************");
    println!("ordering mode: {ordering:?}");

    let config = SimConfig {
        ordering,
        ..Default::default()
    };
    let mut sim = Sim::new(config, StdRng::from_os_rng())?;
    sim.run(&mut ConsoleReporter)?;

    Ok(())
}
