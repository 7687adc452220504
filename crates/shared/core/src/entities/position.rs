use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{OrderId, Side};
use crate::values::{Price, Quantity, Symbol};

/// Unique identifier for a position
pub type PositionId = Uuid;

/// Position lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionStatus {
    Open,
    Closed,
}

/// A partial closure recorded against an open position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartialExit {
    pub price: Price,
    pub quantity: Quantity,
    pub exited_at: DateTime<Utc>,
}

/// The single authoritative position for a symbol
///
/// At most one open position per symbol exists at any instant. The
/// position is mutated only under the symbol's lock; once `Closed` it is
/// an immutable historical record.
///
/// Invariant: remaining quantity + the sum of partial-exit quantities
/// equals the total quantity ever entered. `realized_pnl` is set only at
/// full closure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub id: PositionId,
    pub symbol: Symbol,
    /// Buy = long, Sell = short
    pub side: Side,
    /// Remaining open quantity (always positive while open)
    pub quantity: Quantity,
    /// Quantity-weighted average entry price
    pub entry_price: Price,
    /// Last seen market price, for unrealized P&L
    pub current_price: Price,
    pub status: PositionStatus,
    /// Partial closures, in the order they occurred
    pub partial_exits: Vec<PartialExit>,
    /// Final exit price, set at closure
    pub exit_price: Option<Price>,
    pub exited_at: Option<DateTime<Utc>>,
    /// Realized P&L net of fees, defined only once `Closed`
    pub realized_pnl: Option<Decimal>,
    /// Fees accrued across entry, extensions and exits
    pub total_fees: Decimal,
    /// Trailing stop price, ratcheted on price updates
    pub trailing_stop: Option<Price>,
    /// The order that opened this position
    pub origin_order_id: OrderId,
    pub entered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Position {
    /// Open a new position from a fill
    pub fn open(
        symbol: impl Into<Symbol>,
        side: Side,
        quantity: Quantity,
        entry_price: Price,
        fee: Decimal,
        origin_order_id: OrderId,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into(),
            side,
            quantity,
            entry_price,
            current_price: entry_price,
            status: PositionStatus::Open,
            partial_exits: Vec::new(),
            exit_price: None,
            exited_at: None,
            realized_pnl: None,
            total_fees: fee,
            trailing_stop: None,
            origin_order_id,
            entered_at: timestamp,
            updated_at: timestamp,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == PositionStatus::Open
    }

    /// Mark-to-market P&L on the remaining open quantity
    pub fn unrealized_pnl(&self) -> Decimal {
        if !self.is_open() {
            return Decimal::ZERO;
        }
        (self.current_price - self.entry_price) * self.quantity * self.side.sign()
    }

    /// Unrealized P&L as a percentage of the entry notional
    pub fn unrealized_pnl_percent(&self) -> Decimal {
        let notional = self.entry_price * self.quantity;
        if notional == Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.unrealized_pnl() / notional * Decimal::ONE_HUNDRED
    }

    /// Total quantity ever entered: remaining + all partial exits
    pub fn entered_quantity(&self) -> Quantity {
        self.quantity
            + self
                .partial_exits
                .iter()
                .map(|e| e.quantity)
                .sum::<Decimal>()
    }

    /// Update the mark price
    pub fn update_current_price(&mut self, price: Price, timestamp: DateTime<Utc>) {
        self.current_price = price;
        self.updated_at = timestamp;
    }

    /// Extend the position with a same-side fill
    ///
    /// New entry price is the quantity-weighted average of the old entry
    /// and the fill price.
    pub fn extend(
        &mut self,
        quantity: Quantity,
        price: Price,
        fee: Decimal,
        timestamp: DateTime<Utc>,
    ) {
        let old_notional = self.quantity * self.entry_price;
        let new_notional = quantity * price;
        let total_quantity = self.quantity + quantity;

        if total_quantity > Decimal::ZERO {
            self.entry_price = (old_notional + new_notional) / total_quantity;
        }
        self.quantity = total_quantity;
        self.total_fees += fee;
        self.updated_at = timestamp;
    }

    /// Record a partial closure
    ///
    /// The open quantity decreases and the exit slice is kept in the
    /// position's own bookkeeping; no realized P&L is finalized until the
    /// position fully closes.
    pub fn record_partial_exit(
        &mut self,
        price: Price,
        quantity: Quantity,
        fee: Decimal,
        timestamp: DateTime<Utc>,
    ) {
        self.partial_exits.push(PartialExit {
            price,
            quantity,
            exited_at: timestamp,
        });
        self.quantity -= quantity;
        self.total_fees += fee;
        self.updated_at = timestamp;
    }

    /// Fully close the position, returning the realized P&L
    ///
    /// Realized P&L sums every partial-exit slice plus the final slice,
    /// each `(exit - entry) * quantity * direction`, minus all fees.
    pub fn close(&mut self, exit_price: Price, timestamp: DateTime<Utc>) -> Decimal {
        let sign = self.side.sign();
        let partial_pnl: Decimal = self
            .partial_exits
            .iter()
            .map(|e| (e.price - self.entry_price) * e.quantity * sign)
            .sum();
        let final_pnl = (exit_price - self.entry_price) * self.quantity * sign;
        let realized = partial_pnl + final_pnl - self.total_fees;

        self.status = PositionStatus::Closed;
        self.current_price = exit_price;
        self.exit_price = Some(exit_price);
        self.exited_at = Some(timestamp);
        self.realized_pnl = Some(realized);
        self.updated_at = timestamp;

        realized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn long_position(quantity: Decimal, entry: Decimal) -> Position {
        Position::open(
            "BTC-USD",
            Side::Buy,
            quantity,
            entry,
            Decimal::ZERO,
            Uuid::new_v4(),
            Utc::now(),
        )
    }

    #[test]
    fn unrealized_pnl_tracks_mark_price() {
        let mut pos = long_position(dec!(10), dec!(100));

        pos.update_current_price(dec!(110), Utc::now());
        assert_eq!(pos.unrealized_pnl(), dec!(100));

        pos.update_current_price(dec!(95), Utc::now());
        assert_eq!(pos.unrealized_pnl(), dec!(-50));
    }

    #[test]
    fn short_unrealized_pnl_inverts() {
        let mut pos = Position::open(
            "ETH-USD",
            Side::Sell,
            dec!(4),
            dec!(2000),
            Decimal::ZERO,
            Uuid::new_v4(),
            Utc::now(),
        );

        pos.update_current_price(dec!(1900), Utc::now());
        assert_eq!(pos.unrealized_pnl(), dec!(400));
    }

    #[test]
    fn extend_uses_weighted_average_entry() {
        let mut pos = long_position(dec!(10), dec!(100));

        pos.extend(dec!(5), dec!(130), Decimal::ZERO, Utc::now());

        // (10*100 + 5*130) / 15 = 110
        assert_eq!(pos.entry_price, dec!(110));
        assert_eq!(pos.quantity, dec!(15));
    }

    #[test]
    fn full_close_realizes_pnl() {
        let mut pos = long_position(dec!(10), dec!(100));

        let realized = pos.close(dec!(120), Utc::now());

        assert_eq!(realized, dec!(200));
        assert_eq!(pos.status, PositionStatus::Closed);
        assert_eq!(pos.realized_pnl, Some(dec!(200)));
        assert_eq!(pos.exit_price, Some(dec!(120)));
        assert_eq!(pos.unrealized_pnl(), Decimal::ZERO);
    }

    #[test]
    fn close_includes_partial_exit_slices_and_fees() {
        let mut pos = long_position(dec!(10), dec!(100));

        pos.record_partial_exit(dec!(115), dec!(4), dec!(2), Utc::now());
        assert!(pos.is_open());
        assert!(pos.realized_pnl.is_none());

        // Partial slice: 4*(115-100)=60; final: 6*(120-100)=120; fees 2
        let realized = pos.close(dec!(120), Utc::now());
        assert_eq!(realized, dec!(178));
    }

    #[test]
    fn entered_quantity_invariant_holds_across_partial_exits() {
        let mut pos = long_position(dec!(10), dec!(100));

        pos.record_partial_exit(dec!(105), dec!(3), Decimal::ZERO, Utc::now());
        pos.record_partial_exit(dec!(108), dec!(2), Decimal::ZERO, Utc::now());

        assert_eq!(pos.quantity, dec!(5));
        assert_eq!(pos.entered_quantity(), dec!(10));
    }
}
