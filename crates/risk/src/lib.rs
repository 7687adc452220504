//! Helios Risk
//!
//! Pre-trade order validation, the daily risk ledger that gates trading
//! activity, derived risk status, and the trailing-stop ratchet.
//!
//! Validation accumulates every violated rule rather than stopping at the
//! first, so callers can surface the complete list to a user. Rejections
//! are values, not errors: nothing in this crate returns `Err` for a
//! rule violation.

pub mod ledger;
pub mod status;
pub mod trailing;
pub mod validator;

pub use ledger::DailyRiskLedger;
pub use status::{BlockReason, RiskStatus};
pub use trailing::trail_stop;
pub use validator::{OrderValidation, ValidationError, validate_order};
