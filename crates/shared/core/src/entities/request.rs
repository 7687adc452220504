use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{OrderType, Side};
use crate::values::{Price, Quantity, Symbol};

/// Caller-supplied order request
///
/// Immutable input to `submit_order`. The engine copies these fields
/// into the `Order` it persists; the request itself is never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub symbol: Symbol,
    pub side: Side,
    pub order_type: OrderType,
    pub quantity: Quantity,
    /// Required for Limit and StopLimit orders; in simulation also the
    /// reference price a market order fills against
    pub price: Option<Price>,
    /// Required for StopLoss and StopLimit orders
    pub stop_price: Option<Price>,
}

impl OrderRequest {
    /// Market order at the given reference price
    pub fn market(
        symbol: impl Into<Symbol>,
        side: Side,
        quantity: Quantity,
        reference_price: Price,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Market,
            quantity,
            price: Some(reference_price),
            stop_price: None,
        }
    }

    /// Limit order at the given price
    pub fn limit(symbol: impl Into<Symbol>, side: Side, quantity: Quantity, price: Price) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Limit,
            quantity,
            price: Some(price),
            stop_price: None,
        }
    }

    /// Attach a stop price (turns intent into a stop-style order)
    pub fn with_stop_price(mut self, stop_price: Price) -> Self {
        self.stop_price = Some(stop_price);
        self
    }

    /// Reference price for validation and simulation, if any
    pub fn reference_price(&self) -> Option<Price> {
        self.price.filter(|p| *p > Decimal::ZERO)
    }
}
