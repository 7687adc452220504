use serde::{Deserialize, Serialize};

/// Execution mode for the engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecutionMode {
    /// Deterministic simulated fills, fixed slippage and fees
    #[default]
    Simulation,
    /// Paper trading - simulated fills against live-looking prices
    Paper,
    /// Live brokerage routing (submission only; fills arrive externally)
    Live,
}

impl ExecutionMode {
    /// Returns true if orders fill immediately inside the engine
    pub fn fills_internally(&self) -> bool {
        matches!(self, ExecutionMode::Simulation | ExecutionMode::Paper)
    }
}
