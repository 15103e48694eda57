//! Search configuration parameters.

use crate::error::{Error, Result};

/// Rollout length after which a playout is scored as a draw.
pub const DEFAULT_MAX_ROLLOUT_PLIES: u32 = 1000;

/// Configuration shared by the simulation-based strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Rollouts run for every legal column (PMCGS and UCT).
    pub simulations: u32,

    /// Hard cap on plies in one rollout. A capped rollout counts as a draw.
    pub max_rollout_plies: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            simulations: 1000,
            max_rollout_plies: DEFAULT_MAX_ROLLOUT_PLIES,
        }
    }
}

impl SearchConfig {
    /// Builder pattern: set number of simulations per column.
    pub fn with_simulations(mut self, n: u32) -> Self {
        self.simulations = n;
        self
    }

    /// Builder pattern: set the rollout ply cap.
    pub fn with_max_rollout_plies(mut self, plies: u32) -> Self {
        self.max_rollout_plies = plies;
        self
    }

    /// Rejects configurations the simulation strategies cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.simulations == 0 {
            return Err(Error::InvalidSimulationCount);
        }
        Ok(())
    }
}
