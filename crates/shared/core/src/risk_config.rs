use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Account-level risk configuration
///
/// Supplied at construction and read-only to the engine. Equity here is a
/// fixed figure; the engine layers daily realized P&L and unrealized P&L
/// on top of it when reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Configured account equity
    pub account_equity: Decimal,
    /// Daily loss ceiling as % of equity; trading halts at or beyond it
    pub daily_loss_limit_percent: Decimal,
    /// Maximum number of trades per UTC calendar day
    pub daily_trade_limit: u32,
    /// Maximum simultaneously open positions
    pub max_open_positions: usize,
    /// Single-order notional ceiling as % of equity
    pub max_position_size_percent: Decimal,
    /// Default stop distance, also the trailing-stop distance
    pub default_stop_loss_percent: Decimal,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            account_equity: dec!(100_000),
            daily_loss_limit_percent: dec!(3),
            daily_trade_limit: 20,
            max_open_positions: 5,
            max_position_size_percent: dec!(20),
            default_stop_loss_percent: dec!(2),
        }
    }
}
