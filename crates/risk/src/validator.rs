//! Pre-trade order validation
//!
//! A pure function over the request, risk configuration, current price,
//! ledger-adjusted equity and open-position count. All violated rules
//! are reported together; nothing short-circuits.

use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use helios_core::{OrderRequest, OrderType, Price, RiskConfig};

/// A violated validation rule, with the figures that violated it
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("quantity must be positive, got {quantity}")]
    QuantityNotPositive { quantity: Decimal },

    #[error("{order_type:?} order requires a positive price")]
    PriceRequired { order_type: OrderType },

    #[error("{order_type:?} order requires a positive stop price")]
    StopPriceRequired { order_type: OrderType },

    #[error("no positive reference price available for {symbol}")]
    NoReferencePrice { symbol: String },

    #[error("order notional {notional} exceeds per-order limit {limit}")]
    NotionalExceedsLimit { notional: Decimal, limit: Decimal },

    #[error("order notional {notional} exceeds available equity {equity}")]
    InsufficientEquity { notional: Decimal, equity: Decimal },

    #[error("open position count {open} has reached the maximum {max}")]
    PositionLimitReached { open: usize, max: usize },
}

/// Accumulated validation outcome
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderValidation {
    pub errors: Vec<ValidationError>,
}

impl OrderValidation {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    /// Human-readable rendering of every violation, comma separated
    pub fn reason(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Validate an order request against the risk configuration
///
/// `equity` is the ledger-adjusted account equity (configured equity plus
/// today's realized P&L). `open_positions` is the current open-position
/// count. Every rule is evaluated; every violation is collected.
pub fn validate_order(
    request: &OrderRequest,
    config: &RiskConfig,
    current_price: Option<Price>,
    equity: Decimal,
    open_positions: usize,
) -> OrderValidation {
    let mut validation = OrderValidation::default();

    if request.quantity <= Decimal::ZERO {
        validation.errors.push(ValidationError::QuantityNotPositive {
            quantity: request.quantity,
        });
    }

    let has_price = request.price.is_some_and(|p| p > Decimal::ZERO);
    let has_stop = request.stop_price.is_some_and(|p| p > Decimal::ZERO);

    match request.order_type {
        OrderType::Limit if !has_price => {
            validation.errors.push(ValidationError::PriceRequired {
                order_type: request.order_type,
            });
        }
        OrderType::StopLimit => {
            if !has_price {
                validation.errors.push(ValidationError::PriceRequired {
                    order_type: request.order_type,
                });
            }
            if !has_stop {
                validation.errors.push(ValidationError::StopPriceRequired {
                    order_type: request.order_type,
                });
            }
        }
        OrderType::StopLoss if !has_stop => {
            validation.errors.push(ValidationError::StopPriceRequired {
                order_type: request.order_type,
            });
        }
        _ => {}
    }

    match current_price.filter(|p| *p > Decimal::ZERO) {
        None => {
            validation.errors.push(ValidationError::NoReferencePrice {
                symbol: request.symbol.clone(),
            });
        }
        Some(price) if request.quantity > Decimal::ZERO => {
            let notional = request.quantity * price;
            let per_order_limit =
                equity * config.max_position_size_percent / Decimal::ONE_HUNDRED;

            if notional > per_order_limit {
                validation.errors.push(ValidationError::NotionalExceedsLimit {
                    notional,
                    limit: per_order_limit,
                });
            }
            if notional > equity {
                validation
                    .errors
                    .push(ValidationError::InsufficientEquity { notional, equity });
            }
        }
        Some(_) => {}
    }

    if open_positions >= config.max_open_positions {
        validation.errors.push(ValidationError::PositionLimitReached {
            open: open_positions,
            max: config.max_open_positions,
        });
    }

    if !validation.passed() {
        warn!(
            "[RISK REJECTED] {} {:?} {}: {}",
            request.symbol,
            request.side,
            request.quantity,
            validation.reason()
        );
    }

    validation
}
