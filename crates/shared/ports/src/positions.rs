use async_trait::async_trait;
use rust_decimal::Decimal;

use helios_core::{Position, PositionId, Price, Quantity, Timestamp};

use crate::error::StoreResult;

/// Port for position persistence
///
/// The engine mutates a symbol's position only while holding that
/// symbol's lock; these methods do not themselves provide cross-call
/// atomicity.
#[async_trait]
pub trait PositionRepository: Send + Sync {
    /// Persist a new position
    async fn create(&self, position: Position) -> StoreResult<Position>;

    /// Fetch a position by id
    async fn get(&self, id: PositionId) -> StoreResult<Option<Position>>;

    /// Fetch the open position for a symbol, if any
    async fn get_open_by_symbol(&self, symbol: &str) -> StoreResult<Option<Position>>;

    /// All currently open positions
    async fn open_positions(&self) -> StoreResult<Vec<Position>>;

    /// Replace a position's stored state
    async fn update(&self, position: Position) -> StoreResult<Position>;

    /// Fully close a position at the given exit price, returning the
    /// closed record with realized P&L set
    async fn close(
        &self,
        id: PositionId,
        exit_price: Price,
        exit_time: Timestamp,
    ) -> StoreResult<Position>;

    /// Record a partial exit against an open position
    async fn add_partial_exit(
        &self,
        id: PositionId,
        price: Price,
        quantity: Quantity,
        time: Timestamp,
    ) -> StoreResult<Position>;

    /// Number of open positions
    async fn count_open(&self) -> StoreResult<usize>;

    /// Update the mark price for a symbol's open position, if any
    async fn update_current_price(&self, symbol: &str, price: Price) -> StoreResult<()>;

    /// Sum of unrealized P&L across all open positions
    async fn total_unrealized_pnl(&self) -> StoreResult<Decimal>;
}
