//! Helios Executor
//!
//! The orchestrating service of the engine: accepts order requests,
//! enforces risk gates, produces deterministic simulated fills and
//! maintains the single authoritative position per symbol - all under a
//! per-symbol lock so concurrent requests for one symbol cannot corrupt
//! position state.
//!
//! ## Pipeline
//!
//! ```text
//! submit_order(request)
//!     │
//!     ▼
//! ┌──────────────────┐  one holder per symbol; other symbols
//! │   Symbol Lock    │  proceed in parallel
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐  roll daily ledger, accumulate every
//! │   Risk Gates     │  validation error, check daily limits
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐  persist pending order, deterministic
//! │  Fill Simulator  │  slippage/fee fill (simulation/paper)
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐  open / extend / partial-close / close /
//! │ Position Netting │  reverse against the existing position
//! └────────┬─────────┘
//!          ▼
//!   ledger update, lock released on every exit path
//! ```

pub mod engine;
pub mod error;
pub mod lock;
pub mod netting;
pub mod simulator;

pub use engine::{
    CloseOutcome, ExecutionStats, ExecutorConfig, OrderExecutor, RejectReason, SubmitOutcome,
};
pub use error::{ExecutorError, Result};
pub use lock::SymbolLocks;
pub use netting::{NettingOutcome, PositionNetter};
pub use simulator::{FillSimulator, SimulatorConfig};
