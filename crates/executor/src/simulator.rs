//! Deterministic fill simulation
//!
//! Slippage, fee and latency come from fixed configured constants, not
//! random draws, so simulated results are reproducible. The simulator
//! mutates nothing; it only builds the `Execution` fact.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use helios_core::{Execution, Order, Price, Side};
use helios_ports::Clock;

/// Fixed simulation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Adverse slippage applied to every fill, as % of requested price
    pub slippage_percent: Decimal,
    /// Fee as % of executed notional
    pub fee_percent: Decimal,
    /// Synthetic latency attached to fills, reporting only
    pub latency_ms: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            slippage_percent: Decimal::new(1, 1), // 0.1%
            fee_percent: Decimal::new(1, 1),      // 0.1%
            latency_ms: 50,
        }
    }
}

/// Produces deterministic simulated fills
pub struct FillSimulator {
    config: SimulatorConfig,
    clock: Arc<dyn Clock>,
}

impl FillSimulator {
    pub fn new(config: SimulatorConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Apply adverse slippage to a requested price for the given side
    ///
    /// Buys execute above the requested price, sells below.
    pub fn slipped_price(&self, requested: Price, side: Side) -> Price {
        let fraction = self.config.slippage_percent / Decimal::ONE_HUNDRED;
        match side {
            Side::Buy => requested * (Decimal::ONE + fraction),
            Side::Sell => requested * (Decimal::ONE - fraction),
        }
    }

    /// Simulate a full fill of the order at the requested price
    ///
    /// Always fills the complete quantity; the fee is charged on the
    /// executed notional.
    pub fn simulate(&self, order: &Order, requested_price: Price) -> Execution {
        let executed_price = self.slipped_price(requested_price, order.side);
        let slippage = executed_price - requested_price;
        let slippage_percent = if requested_price == Decimal::ZERO {
            Decimal::ZERO
        } else {
            slippage / requested_price * Decimal::ONE_HUNDRED
        };
        let fee = executed_price * order.quantity * self.config.fee_percent / Decimal::ONE_HUNDRED;

        Execution {
            id: Uuid::new_v4(),
            order_id: order.id,
            symbol: order.symbol.clone(),
            side: order.side,
            quantity: order.quantity,
            requested_price,
            executed_price,
            slippage,
            slippage_percent,
            fee,
            latency_ms: self.config.latency_ms,
            executed_at: self.clock.now(),
        }
    }
}
