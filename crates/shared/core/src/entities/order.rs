use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Execution, ExecutionMode, OrderRequest, OrderStatus, OrderType, Side};
use crate::values::{Price, Quantity, Symbol};

/// Unique identifier for an order
pub type OrderId = Uuid;

/// Engine-owned order record, one per submission
///
/// Invariants: `filled_quantity <= quantity`; `executions` is append-only;
/// status only ever moves forward from `Pending`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub symbol: Symbol,
    pub side: Side,
    pub order_type: OrderType,
    pub quantity: Quantity,
    pub filled_quantity: Quantity,
    /// Required for Limit and StopLimit orders
    pub price: Option<Price>,
    /// Required for StopLoss and StopLimit orders
    pub stop_price: Option<Price>,
    pub status: OrderStatus,
    /// Ordered, append-only list of fills
    pub executions: Vec<Execution>,
    /// Fees accumulated across all executions
    pub total_fees: Decimal,
    pub mode: ExecutionMode,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Create a pending order from a request with an explicit timestamp
    pub fn from_request(
        request: &OrderRequest,
        mode: ExecutionMode,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: request.symbol.clone(),
            side: request.side,
            order_type: request.order_type,
            quantity: request.quantity,
            filled_quantity: Decimal::ZERO,
            price: request.price,
            stop_price: request.stop_price,
            status: OrderStatus::Pending,
            executions: Vec::new(),
            total_fees: Decimal::ZERO,
            mode,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Append a fill, accumulating filled quantity and fees
    ///
    /// Moves the order to `Filled` once the full quantity is covered,
    /// `PartiallyFilled` otherwise.
    pub fn record_execution(&mut self, execution: Execution) {
        self.filled_quantity += execution.quantity;
        self.total_fees += execution.fee;
        self.updated_at = execution.executed_at;
        self.status = if self.filled_quantity >= self.quantity {
            OrderStatus::Filled
        } else {
            OrderStatus::PartiallyFilled
        };
        self.executions.push(execution);
    }

    /// Returns remaining quantity to be filled
    pub fn remaining_quantity(&self) -> Quantity {
        self.quantity - self.filled_quantity
    }

    /// Returns true if the order is completely filled
    pub fn is_filled(&self) -> bool {
        self.filled_quantity >= self.quantity
    }
}
