use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use helios_core::{Execution, Order, OrderId};

use crate::error::StoreResult;

/// Per-status order counters, for execution statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatusCounts {
    pub pending: u64,
    pub partially_filled: u64,
    pub filled: u64,
    pub cancelled: u64,
    pub rejected: u64,
}

impl OrderStatusCounts {
    /// Orders that reached a terminal or partially-filled state
    pub fn total(&self) -> u64 {
        self.partially_filled + self.filled + self.cancelled + self.rejected
    }
}

/// Port for order persistence
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order
    async fn create(&self, order: Order) -> StoreResult<Order>;

    /// Fetch an order by id
    async fn get(&self, id: OrderId) -> StoreResult<Option<Order>>;

    /// Replace an order's stored state
    async fn update(&self, order: Order) -> StoreResult<Order>;

    /// Append an execution to an order, returning the updated order
    ///
    /// The stored execution list is append-only; implementations must
    /// never remove or mutate previously recorded executions.
    async fn add_execution(&self, order_id: OrderId, execution: Execution) -> StoreResult<Order>;

    /// Orders still active (pending or partially filled), optionally
    /// filtered by symbol
    async fn open_orders(&self, symbol: Option<&str>) -> StoreResult<Vec<Order>>;

    /// Count orders by status
    async fn status_counts(&self) -> StoreResult<OrderStatusCounts>;
}
