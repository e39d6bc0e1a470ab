use crate::core::{OrderingMode, Priority, SimError, Ticks};

/// Simulation parameters. The defaults reproduce the classic workload:
/// quantum 3, 100 ticks, 30% arrival chance, priorities 1..=4 and service
/// demands 1..=5.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Ticks a selected job keeps the CPU before re-evaluation.
    pub quantum: Ticks,
    /// Total ticks the driver executes.
    pub duration: Ticks,
    /// Per-tick chance of one new job arriving, in percent.
    pub arrival_probability_percent: u8,
    /// Worst (numerically highest) admissible priority; best is 1.
    pub max_priority: Priority,
    /// Shortest service demand a generated job can carry.
    pub min_service: Ticks,
    /// Longest service demand a generated job can carry.
    pub max_service: Ticks,
    /// Ranking policy for the ready set, fixed for the whole run.
    pub ordering: OrderingMode,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            quantum: 3,
            duration: 100,
            arrival_probability_percent: 30,
            max_priority: 4,
            min_service: 1,
            max_service: 5,
            ordering: OrderingMode::Priority,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.quantum == 0 {
            return Err(SimError::InvalidConfig(
                "quantum must be at least one tick".into(),
            ));
        }
        if self.arrival_probability_percent > 100 {
            return Err(SimError::InvalidConfig(format!(
                "arrival probability {}% exceeds 100%",
                self.arrival_probability_percent
            )));
        }
        if self.max_priority == 0 {
            return Err(SimError::InvalidConfig(
                "priorities start at 1; max_priority cannot be 0".into(),
            ));
        }
        if self.min_service == 0 {
            return Err(SimError::InvalidConfig(
                "jobs must demand at least one tick of service".into(),
            ));
        }
        if self.min_service > self.max_service {
            return Err(SimError::InvalidConfig(format!(
                "service range {}..={} is empty",
                self.min_service, self.max_service
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn bad_parameters_are_rejected() {
        for config in [
            SimConfig {
                quantum: 0,
                ..Default::default()
            },
            SimConfig {
                arrival_probability_percent: 101,
                ..Default::default()
            },
            SimConfig {
                max_priority: 0,
                ..Default::default()
            },
            SimConfig {
                min_service: 0,
                ..Default::default()
            },
            SimConfig {
                min_service: 6,
                max_service: 5,
                ..Default::default()
            },
        ] {
            assert!(matches!(
                config.validate(),
                Err(SimError::InvalidConfig(_))
            ));
        }
    }
}
