//! Daily risk ledger
//!
//! Process-local counters for today's realized P&L and trade count,
//! reset on the first access of each UTC calendar day. The ledger is a
//! plain value with single-writer semantics: the owning engine wraps it
//! in its own mutex, independent of any per-symbol lock, so operations
//! on different symbols cannot race on these shared counters.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Today's realized P&L and trade count, with the date they refer to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRiskLedger {
    /// UTC calendar date the counters belong to
    pub date: NaiveDate,
    /// Realized P&L accumulated today
    pub realized_pnl: Decimal,
    /// Number of trades executed today
    pub trade_count: u32,
}

impl DailyRiskLedger {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today,
            realized_pnl: Decimal::ZERO,
            trade_count: 0,
        }
    }

    /// Reset the counters if the calendar date has changed
    ///
    /// Idempotent within a day: calling twice on the same date resets
    /// nothing. Returns true when a reset occurred.
    pub fn roll_forward(&mut self, today: NaiveDate) -> bool {
        if self.date == today {
            return false;
        }
        *self = Self::new(today);
        true
    }

    /// Count one executed trade
    pub fn record_trade(&mut self) {
        self.trade_count += 1;
    }

    /// Fold a realized P&L figure into today's total
    pub fn record_pnl(&mut self, pnl: Decimal) {
        self.realized_pnl += pnl;
    }

    /// Today's P&L as a percentage of the given equity base
    ///
    /// Negative when losing. Zero equity yields zero rather than a
    /// division error.
    pub fn pnl_percent(&self, equity: Decimal) -> Decimal {
        if equity == Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.realized_pnl / equity * Decimal::ONE_HUNDRED
    }

    /// True once today's loss meets or exceeds the limit percentage
    pub fn loss_limit_reached(&self, equity: Decimal, loss_limit_percent: Decimal) -> bool {
        self.pnl_percent(equity) <= -loss_limit_percent
    }
}
