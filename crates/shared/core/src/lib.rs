//! Helios Core Domain
//!
//! Pure domain types for the Helios execution engine.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod risk_config;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    Execution,
    ExecutionId,
    ExecutionMode,
    // Core trading entities
    Order,
    OrderId,
    OrderRequest,
    OrderStatus,
    OrderType,
    PartialExit,
    Position,
    PositionId,
    PositionStatus,
    Side,
};
pub use risk_config::RiskConfig;
pub use values::{Price, Quantity, Symbol, Timestamp};
