//! In-memory position repository
//!
//! Arithmetic (weighted entries, partial exits, realized P&L) lives on
//! the `Position` domain type; this store only fetches, delegates and
//! persists.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use rust_decimal::Decimal;

use helios_core::{Position, PositionId, Price, Quantity, Timestamp};
use helios_ports::{PositionRepository, StoreError, StoreResult};

/// Thread-safe in-memory position storage
pub struct InMemoryPositionRepository {
    positions: Arc<DashMap<PositionId, Position>>,
}

impl InMemoryPositionRepository {
    pub fn new() -> Self {
        Self {
            positions: Arc::new(DashMap::new()),
        }
    }
}

impl Default for InMemoryPositionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemoryPositionRepository {
    fn clone(&self) -> Self {
        Self {
            positions: Arc::clone(&self.positions),
        }
    }
}

#[async_trait]
impl PositionRepository for InMemoryPositionRepository {
    async fn create(&self, position: Position) -> StoreResult<Position> {
        self.positions.insert(position.id, position.clone());
        Ok(position)
    }

    async fn get(&self, id: PositionId) -> StoreResult<Option<Position>> {
        Ok(self.positions.get(&id).map(|p| p.value().clone()))
    }

    async fn get_open_by_symbol(&self, symbol: &str) -> StoreResult<Option<Position>> {
        Ok(self
            .positions
            .iter()
            .find(|p| p.symbol == symbol && p.is_open())
            .map(|p| p.value().clone()))
    }

    async fn open_positions(&self) -> StoreResult<Vec<Position>> {
        Ok(self
            .positions
            .iter()
            .filter(|p| p.is_open())
            .map(|p| p.value().clone())
            .collect())
    }

    async fn update(&self, position: Position) -> StoreResult<Position> {
        if !self.positions.contains_key(&position.id) {
            return Err(StoreError::not_found("position", position.id));
        }
        self.positions.insert(position.id, position.clone());
        Ok(position)
    }

    async fn close(
        &self,
        id: PositionId,
        exit_price: Price,
        exit_time: Timestamp,
    ) -> StoreResult<Position> {
        let mut entry = self
            .positions
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("position", id))?;
        if !entry.is_open() {
            return Err(StoreError::Conflict(format!("position {id} already closed")));
        }
        entry.close(exit_price, exit_time);
        Ok(entry.value().clone())
    }

    async fn add_partial_exit(
        &self,
        id: PositionId,
        price: Price,
        quantity: Quantity,
        time: Timestamp,
    ) -> StoreResult<Position> {
        let mut entry = self
            .positions
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("position", id))?;
        if !entry.is_open() {
            return Err(StoreError::Conflict(format!("position {id} already closed")));
        }
        entry.record_partial_exit(price, quantity, Decimal::ZERO, time);
        Ok(entry.value().clone())
    }

    async fn count_open(&self) -> StoreResult<usize> {
        Ok(self.positions.iter().filter(|p| p.is_open()).count())
    }

    async fn update_current_price(&self, symbol: &str, price: Price) -> StoreResult<()> {
        for mut entry in self.positions.iter_mut() {
            if entry.symbol == symbol && entry.is_open() {
                let now = chrono::Utc::now();
                entry.update_current_price(price, now);
            }
        }
        Ok(())
    }

    async fn total_unrealized_pnl(&self) -> StoreResult<Decimal> {
        Ok(self
            .positions
            .iter()
            .filter(|p| p.is_open())
            .map(|p| p.unrealized_pnl())
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use helios_core::Side;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn open_position(symbol: &str, quantity: Decimal, entry: Decimal) -> Position {
        Position::open(
            symbol,
            Side::Buy,
            quantity,
            entry,
            Decimal::ZERO,
            Uuid::new_v4(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn get_open_by_symbol_skips_closed_positions() {
        let repo = InMemoryPositionRepository::new();
        let pos = repo.create(open_position("BTC-USD", dec!(1), dec!(100))).await.unwrap();

        repo.close(pos.id, dec!(110), Utc::now()).await.unwrap();

        assert!(repo.get_open_by_symbol("BTC-USD").await.unwrap().is_none());
        assert_eq!(repo.count_open().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn double_close_is_a_conflict() {
        let repo = InMemoryPositionRepository::new();
        let pos = repo.create(open_position("BTC-USD", dec!(1), dec!(100))).await.unwrap();

        repo.close(pos.id, dec!(110), Utc::now()).await.unwrap();
        let err = repo.close(pos.id, dec!(120), Utc::now()).await.unwrap_err();

        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn total_unrealized_pnl_sums_open_positions() {
        let repo = InMemoryPositionRepository::new();
        repo.create(open_position("BTC-USD", dec!(2), dec!(100))).await.unwrap();
        repo.create(open_position("ETH-USD", dec!(1), dec!(50))).await.unwrap();

        repo.update_current_price("BTC-USD", dec!(110)).await.unwrap();
        repo.update_current_price("ETH-USD", dec!(45)).await.unwrap();

        // 2*(110-100) + 1*(45-50) = 15
        assert_eq!(repo.total_unrealized_pnl().await.unwrap(), dec!(15));
    }
}
