//! In-memory order repository

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use helios_core::{Execution, Order, OrderId, OrderStatus};
use helios_ports::{OrderRepository, OrderStatusCounts, StoreError, StoreResult};

/// Thread-safe in-memory order storage
pub struct InMemoryOrderRepository {
    orders: Arc<DashMap<OrderId, Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self {
            orders: Arc::new(DashMap::new()),
        }
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemoryOrderRepository {
    fn clone(&self) -> Self {
        Self {
            orders: Arc::clone(&self.orders),
        }
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: Order) -> StoreResult<Order> {
        self.orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn get(&self, id: OrderId) -> StoreResult<Option<Order>> {
        Ok(self.orders.get(&id).map(|o| o.value().clone()))
    }

    async fn update(&self, order: Order) -> StoreResult<Order> {
        if !self.orders.contains_key(&order.id) {
            return Err(StoreError::not_found("order", order.id));
        }
        self.orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn add_execution(&self, order_id: OrderId, execution: Execution) -> StoreResult<Order> {
        let mut entry = self
            .orders
            .get_mut(&order_id)
            .ok_or_else(|| StoreError::not_found("order", order_id))?;
        entry.record_execution(execution);
        Ok(entry.value().clone())
    }

    async fn open_orders(&self, symbol: Option<&str>) -> StoreResult<Vec<Order>> {
        Ok(self
            .orders
            .iter()
            .filter(|o| o.status.is_active())
            .filter(|o| symbol.is_none_or(|s| o.symbol == s))
            .map(|o| o.value().clone())
            .collect())
    }

    async fn status_counts(&self) -> StoreResult<OrderStatusCounts> {
        let mut counts = OrderStatusCounts::default();
        for order in self.orders.iter() {
            match order.status {
                OrderStatus::Pending => counts.pending += 1,
                OrderStatus::PartiallyFilled => counts.partially_filled += 1,
                OrderStatus::Filled => counts.filled += 1,
                OrderStatus::Cancelled => counts.cancelled += 1,
                OrderStatus::Rejected => counts.rejected += 1,
            }
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use helios_core::{ExecutionMode, OrderRequest, Side};
    use rust_decimal_macros::dec;

    fn pending_order(symbol: &str) -> Order {
        let request = OrderRequest::market(symbol, Side::Buy, dec!(1), dec!(100));
        Order::from_request(&request, ExecutionMode::Simulation, Utc::now())
    }

    #[tokio::test]
    async fn open_orders_filters_by_symbol() {
        let repo = InMemoryOrderRepository::new();
        repo.create(pending_order("BTC-USD")).await.unwrap();
        repo.create(pending_order("ETH-USD")).await.unwrap();

        assert_eq!(repo.open_orders(None).await.unwrap().len(), 2);
        assert_eq!(repo.open_orders(Some("BTC-USD")).await.unwrap().len(), 1);
        assert!(repo.open_orders(Some("SOL-USD")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_execution_to_missing_order_is_not_found() {
        let repo = InMemoryOrderRepository::new();
        let order = pending_order("BTC-USD");
        let execution = Execution {
            id: uuid::Uuid::new_v4(),
            order_id: order.id,
            symbol: order.symbol.clone(),
            side: order.side,
            quantity: dec!(1),
            requested_price: dec!(100),
            executed_price: dec!(100),
            slippage: dec!(0),
            slippage_percent: dec!(0),
            fee: dec!(0),
            latency_ms: 0,
            executed_at: Utc::now(),
        };

        let err = repo.add_execution(order.id, execution).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { entity: "order", .. }));
    }

    #[tokio::test]
    async fn status_counts_reflect_lifecycle() {
        let repo = InMemoryOrderRepository::new();
        let mut order = pending_order("BTC-USD");
        order.status = OrderStatus::Filled;
        repo.create(order).await.unwrap();
        repo.create(pending_order("ETH-USD")).await.unwrap();

        let counts = repo.status_counts().await.unwrap();
        assert_eq!(counts.filled, 1);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.total(), 1);
    }
}
