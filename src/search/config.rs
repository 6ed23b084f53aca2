//! Configuration types for the conflict-repair search

/// Steps allowed per queen when no explicit budget is given.
pub const DEFAULT_STEPS_PER_QUEEN: u64 = 10;

/// How repair workers share the board's conflict tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Synchronization {
    /// Atomic counters, column decisions run concurrently
    #[default]
    Atomic,
    /// One lock around the whole board, held for each column decision
    Locked,
}

impl std::fmt::Display for Synchronization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Synchronization::Atomic => write!(f, "atomic"),
            Synchronization::Locked => write!(f, "locked"),
        }
    }
}

impl std::str::FromStr for Synchronization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "atomic" | "atomics" | "lock-free" => Ok(Synchronization::Atomic),
            "locked" | "lock" | "mutex" => Ok(Synchronization::Locked),
            _ => Err(format!(
                "Unknown synchronization: '{}'. Valid options: atomic, locked",
                s
            )),
        }
    }
}

/// Main solver configuration
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Board dimension (number of queens)
    pub size: usize,
    /// Maximum number of repair rounds before giving up
    pub max_steps: u64,
    /// Conflict-table synchronization discipline
    pub synchronization: Synchronization,
}

impl SolverConfig {
    /// Config for an `size`-queens board with the default step budget.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            max_steps: DEFAULT_STEPS_PER_QUEEN.saturating_mul(size as u64),
            synchronization: Synchronization::default(),
        }
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_max_steps_option(mut self, max_steps: Option<u64>) -> Self {
        if let Some(max_steps) = max_steps {
            self.max_steps = max_steps;
        }
        self
    }

    /// Budget of `steps_per_queen * size` rounds.
    pub fn with_steps_per_queen(mut self, steps_per_queen: u64) -> Self {
        self.max_steps = steps_per_queen.saturating_mul(self.size as u64);
        self
    }

    pub fn with_synchronization(mut self, synchronization: Synchronization) -> Self {
        self.synchronization = synchronization;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synchronization_from_str() {
        assert_eq!(
            "atomic".parse::<Synchronization>().unwrap(),
            Synchronization::Atomic
        );
        assert_eq!(
            "LOCKED".parse::<Synchronization>().unwrap(),
            Synchronization::Locked
        );
        assert_eq!(
            "mutex".parse::<Synchronization>().unwrap(),
            Synchronization::Locked
        );
        assert!("spin".parse::<Synchronization>().is_err());
    }

    #[test]
    fn test_synchronization_display() {
        assert_eq!(format!("{}", Synchronization::Atomic), "atomic");
        assert_eq!(format!("{}", Synchronization::Locked), "locked");
    }

    #[test]
    fn test_default_step_budget() {
        let config = SolverConfig::new(100);
        assert_eq!(config.size, 100);
        assert_eq!(config.max_steps, 1000);
        assert_eq!(config.synchronization, Synchronization::Atomic);
    }

    #[test]
    fn test_solver_config_builder() {
        let config = SolverConfig::new(8)
            .with_max_steps(80)
            .with_synchronization(Synchronization::Locked);

        assert_eq!(config.max_steps, 80);
        assert_eq!(config.synchronization, Synchronization::Locked);

        let config = SolverConfig::new(8).with_steps_per_queen(50);
        assert_eq!(config.max_steps, 400);

        let config = SolverConfig::new(8).with_max_steps_option(None);
        assert_eq!(config.max_steps, 80);
    }
}
