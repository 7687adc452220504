//! Derived risk status
//!
//! A snapshot assembled from the configuration, the daily ledger and the
//! open-position book. When trading is blocked, exactly one reason is
//! reported: loss limit before trade-count limit before position-count
//! limit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use helios_core::RiskConfig;

use crate::ledger::DailyRiskLedger;

/// Why trading is currently blocked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockReason {
    DailyLossLimit,
    DailyTradeLimit,
    PositionLimit,
}

impl std::fmt::Display for BlockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockReason::DailyLossLimit => write!(f, "daily loss limit reached"),
            BlockReason::DailyTradeLimit => write!(f, "daily trade count limit reached"),
            BlockReason::PositionLimit => write!(f, "maximum open positions reached"),
        }
    }
}

/// Snapshot of the account's risk state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskStatus {
    /// Configured equity + today's realized P&L + open unrealized P&L
    pub current_equity: Decimal,
    pub daily_pnl: Decimal,
    pub daily_pnl_percent: Decimal,
    pub daily_trade_count: u32,
    pub open_position_count: usize,
    pub daily_limit_reached: bool,
    pub can_trade: bool,
    /// The single most relevant reason when `can_trade` is false
    pub block_reason: Option<BlockReason>,
}

impl RiskStatus {
    /// Assemble the status from the ledger and the open-position book
    pub fn derive(
        config: &RiskConfig,
        ledger: &DailyRiskLedger,
        open_position_count: usize,
        total_unrealized_pnl: Decimal,
    ) -> Self {
        let current_equity = config.account_equity + ledger.realized_pnl + total_unrealized_pnl;
        let daily_pnl_percent = ledger.pnl_percent(config.account_equity);

        let loss_limit_reached =
            ledger.loss_limit_reached(config.account_equity, config.daily_loss_limit_percent);
        let trade_limit_reached = ledger.trade_count >= config.daily_trade_limit;
        let position_limit_reached = open_position_count >= config.max_open_positions;

        // Reason priority: loss, then trade count, then position count
        let block_reason = if loss_limit_reached {
            Some(BlockReason::DailyLossLimit)
        } else if trade_limit_reached {
            Some(BlockReason::DailyTradeLimit)
        } else if position_limit_reached {
            Some(BlockReason::PositionLimit)
        } else {
            None
        };

        Self {
            current_equity,
            daily_pnl: ledger.realized_pnl,
            daily_pnl_percent,
            daily_trade_count: ledger.trade_count,
            open_position_count,
            daily_limit_reached: loss_limit_reached,
            can_trade: block_reason.is_none(),
            block_reason,
        }
    }
}
