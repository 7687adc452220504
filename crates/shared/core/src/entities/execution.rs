use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{OrderId, Side};
use crate::values::{Price, Quantity, Symbol};

/// Unique identifier for an execution
pub type ExecutionId = Uuid;

/// An immutable fill fact, recorded exactly once per simulated execution
///
/// Executions are append-only: once attached to an order they are never
/// removed or mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Execution {
    pub id: ExecutionId,
    pub order_id: OrderId,
    pub symbol: Symbol,
    pub side: Side,
    pub quantity: Quantity,
    /// Price the caller asked for
    pub requested_price: Price,
    /// Price the fill actually executed at, after slippage
    pub executed_price: Price,
    /// Absolute slippage (executed - requested)
    pub slippage: Decimal,
    /// Slippage as a percentage of the requested price
    pub slippage_percent: Decimal,
    /// Fee charged for this fill
    pub fee: Decimal,
    /// Synthetic latency, reporting only - no real delay is applied
    pub latency_ms: u64,
    pub executed_at: DateTime<Utc>,
}

impl Execution {
    /// Notional value of the fill (executed price x quantity)
    pub fn notional(&self) -> Decimal {
        self.executed_price * self.quantity
    }
}
