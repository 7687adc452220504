//! Order executor
//!
//! The orchestrating service: every mutating operation on a symbol runs
//! under that symbol's lock, the daily ledger lives under its own
//! short-lived mutex, and all rejections are structured values rather
//! than errors.

use std::collections::HashMap;
use std::sync::Arc;

use log::{info, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use helios_core::{
    ExecutionMode, Order, OrderId, OrderRequest, OrderStatus, Position, PositionId, Price,
    RiskConfig, Symbol,
};
use helios_ports::{Clock, OrderRepository, OrderStatusCounts, PositionRepository};
use helios_risk::{
    DailyRiskLedger, RiskStatus, ValidationError, trail_stop, validate_order,
};

use crate::error::Result;
use crate::lock::SymbolLocks;
use crate::netting::{NettingOutcome, PositionNetter};
use crate::simulator::{FillSimulator, SimulatorConfig};

/// Engine configuration
#[derive(Debug, Clone, Default)]
pub struct ExecutorConfig {
    pub mode: ExecutionMode,
    pub risk: RiskConfig,
    pub simulator: SimulatorConfig,
}

/// Why a submission was rejected
///
/// Rejections are part of the normal result surface; `ExecutorError` is
/// reserved for infrastructure failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RejectReason {
    /// One or more validation rules were violated; every violation is
    /// listed
    Validation(Vec<ValidationError>),
    /// Today's trade count has reached the configured limit
    DailyTradeLimit { count: u32, limit: u32 },
    /// Today's realized loss has reached the configured limit
    DailyLossLimit {
        pnl_percent: Decimal,
        limit_percent: Decimal,
    },
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::Validation(errors) => {
                let rendered = errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation failed: {rendered}")
            }
            RejectReason::DailyTradeLimit { count, limit } => {
                write!(f, "daily trade limit reached ({count}/{limit})")
            }
            RejectReason::DailyLossLimit {
                pnl_percent,
                limit_percent,
            } => {
                write!(
                    f,
                    "daily loss limit reached ({pnl_percent}% against a {limit_percent}% limit)"
                )
            }
        }
    }
}

/// Result of a submission
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// The order filled in full and was netted against the position book
    Filled {
        order: Order,
        outcome: NettingOutcome,
    },
    /// Live mode: the order was persisted for external routing
    Accepted { order: Order },
    /// The order was turned away before any state changed
    Rejected(RejectReason),
}

/// Result of an explicit position close
#[derive(Debug, Clone)]
pub enum CloseOutcome {
    Closed {
        position: Position,
        realized_pnl: Decimal,
    },
    NotFound,
    AlreadyClosed,
}

/// Aggregate execution statistics
///
/// Slippage and latency are the configured simulation constants; per-fill
/// figures live on each `Execution`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionStats {
    pub total_orders: u64,
    pub filled_orders: u64,
    pub cancelled_orders: u64,
    pub rejected_orders: u64,
    pub fill_rate_percent: Decimal,
    pub avg_slippage_percent: Decimal,
    pub avg_latency_ms: u64,
    pub counts: OrderStatusCounts,
}

/// The order execution and position management engine
pub struct OrderExecutor {
    config: ExecutorConfig,
    orders: Arc<dyn OrderRepository>,
    positions: Arc<dyn PositionRepository>,
    locks: SymbolLocks,
    ledger: Mutex<DailyRiskLedger>,
    netter: PositionNetter,
    simulator: FillSimulator,
    clock: Arc<dyn Clock>,
}

impl OrderExecutor {
    pub fn new(
        config: ExecutorConfig,
        orders: Arc<dyn OrderRepository>,
        positions: Arc<dyn PositionRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let netter = PositionNetter::new(positions.clone());
        let simulator = FillSimulator::new(config.simulator.clone(), clock.clone());
        let ledger = Mutex::new(DailyRiskLedger::new(clock.now().date_naive()));
        Self {
            config,
            orders,
            positions,
            locks: SymbolLocks::new(),
            ledger,
            netter,
            simulator,
            clock,
        }
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Submit an order
    ///
    /// Runs under the symbol's lock end to end: daily ledger roll,
    /// validation, daily limit gates, persistence and, in simulation or
    /// paper mode, the fill and netting pass. The lock is released on
    /// every exit path when the guard drops.
    pub async fn submit_order(&self, request: OrderRequest) -> Result<SubmitOutcome> {
        let _guard = self.locks.acquire(&request.symbol).await;

        // Ledger snapshot under the short-lived ledger mutex
        let ledger = {
            let mut ledger = self.ledger.lock().await;
            ledger.roll_forward(self.clock.now().date_naive());
            ledger.clone()
        };
        let trade_count = ledger.trade_count;
        let realized_pnl = ledger.realized_pnl;

        let equity = self.config.risk.account_equity + realized_pnl;
        let open_count = self.positions.count_open().await?;
        let validation = validate_order(
            &request,
            &self.config.risk,
            request.reference_price(),
            equity,
            open_count,
        );
        if !validation.passed() {
            return Ok(SubmitOutcome::Rejected(RejectReason::Validation(
                validation.errors,
            )));
        }

        if trade_count >= self.config.risk.daily_trade_limit {
            let reason = RejectReason::DailyTradeLimit {
                count: trade_count,
                limit: self.config.risk.daily_trade_limit,
            };
            warn!("{} rejected: {}", request.symbol, reason);
            return Ok(SubmitOutcome::Rejected(reason));
        }
        if ledger.loss_limit_reached(
            self.config.risk.account_equity,
            self.config.risk.daily_loss_limit_percent,
        ) {
            let reason = RejectReason::DailyLossLimit {
                pnl_percent: ledger.pnl_percent(self.config.risk.account_equity),
                limit_percent: self.config.risk.daily_loss_limit_percent,
            };
            warn!("{} rejected: {}", request.symbol, reason);
            return Ok(SubmitOutcome::Rejected(reason));
        }

        let order = Order::from_request(&request, self.config.mode, self.clock.now());
        let order = self.orders.create(order).await?;

        if !self.config.mode.fills_internally() {
            info!(
                "{} {:?} {} accepted for external routing",
                order.symbol, order.side, order.quantity
            );
            return Ok(SubmitOutcome::Accepted { order });
        }

        // Validation guarantees a positive reference price by this point
        let Some(reference_price) = request.reference_price() else {
            return Ok(SubmitOutcome::Rejected(RejectReason::Validation(vec![
                ValidationError::NoReferencePrice {
                    symbol: request.symbol.clone(),
                },
            ])));
        };

        let execution = self.simulator.simulate(&order, reference_price);
        let filled = self.orders.add_execution(order.id, execution.clone()).await?;

        let existing = self.positions.get_open_by_symbol(&request.symbol).await?;
        let outcome = self.netter.apply(existing, &filled, &execution).await?;

        {
            let mut ledger = self.ledger.lock().await;
            ledger.record_trade();
            if let Some(pnl) = outcome.realized_pnl() {
                ledger.record_pnl(pnl);
            }
        }

        info!(
            "{} {:?} {} filled @ {} (slippage {}, fee {})",
            filled.symbol,
            filled.side,
            filled.quantity,
            execution.executed_price,
            execution.slippage,
            execution.fee
        );
        Ok(SubmitOutcome::Filled {
            order: filled,
            outcome,
        })
    }

    /// Cancel an order
    ///
    /// Returns false when the order does not exist or is already in a
    /// terminal state; cancellation never un-fills.
    pub async fn cancel_order(&self, id: OrderId) -> Result<bool> {
        let Some(mut order) = self.orders.get(id).await? else {
            return Ok(false);
        };
        if order.status.is_terminal() {
            return Ok(false);
        }

        order.status = OrderStatus::Cancelled;
        order.updated_at = self.clock.now();
        let order = self.orders.update(order).await?;
        info!("{} order {} cancelled", order.symbol, order.id);
        Ok(true)
    }

    /// Active orders, optionally filtered by symbol
    pub async fn open_orders(&self, symbol: Option<&str>) -> Result<Vec<Order>> {
        Ok(self.orders.open_orders(symbol).await?)
    }

    /// The open position for a symbol, if any; lock-free, possibly stale
    pub async fn position(&self, symbol: &str) -> Result<Option<Position>> {
        Ok(self.positions.get_open_by_symbol(symbol).await?)
    }

    /// All open positions; lock-free, possibly stale
    pub async fn open_positions(&self) -> Result<Vec<Position>> {
        Ok(self.positions.open_positions().await?)
    }

    /// Explicitly close a position at a given exit price
    ///
    /// The preliminary read short-circuits without taking the lock; the
    /// position is then re-read under the lock because a concurrent
    /// netting pass may have closed it in the meantime. Slippage is
    /// applied for the exit direction; no fee is charged on an explicit
    /// close.
    pub async fn close_position(
        &self,
        id: PositionId,
        exit_price: Price,
    ) -> Result<CloseOutcome> {
        let Some(position) = self.positions.get(id).await? else {
            return Ok(CloseOutcome::NotFound);
        };
        if !position.is_open() {
            return Ok(CloseOutcome::AlreadyClosed);
        }

        let _guard = self.locks.acquire(&position.symbol).await;

        let Some(position) = self.positions.get(id).await? else {
            return Ok(CloseOutcome::NotFound);
        };
        if !position.is_open() {
            return Ok(CloseOutcome::AlreadyClosed);
        }

        let exit_side = position.side.opposite();
        let executed_price = self.simulator.slipped_price(exit_price, exit_side);
        let closed = self
            .positions
            .close(position.id, executed_price, self.clock.now())
            .await?;
        let realized_pnl = closed.realized_pnl.unwrap_or_default();

        {
            let mut ledger = self.ledger.lock().await;
            ledger.roll_forward(self.clock.now().date_naive());
            ledger.record_pnl(realized_pnl);
            ledger.record_trade();
        }

        info!(
            "{} closed @ {}, realized P&L {}",
            closed.symbol, executed_price, realized_pnl
        );
        Ok(CloseOutcome::Closed {
            position: closed,
            realized_pnl,
        })
    }

    /// Close every open position that has a price in the map
    ///
    /// Each close takes its own symbol lock; there is no cross-symbol
    /// atomicity. Positions whose symbol carries no supplied price are
    /// left open, not guessed at.
    pub async fn close_all_positions(
        &self,
        prices: &HashMap<Symbol, Price>,
    ) -> Result<Vec<CloseOutcome>> {
        let open = self.positions.open_positions().await?;
        let mut outcomes = Vec::with_capacity(open.len());
        for position in open {
            let Some(exit_price) = prices.get(&position.symbol).copied() else {
                continue;
            };
            outcomes.push(self.close_position(position.id, exit_price).await?);
        }
        Ok(outcomes)
    }

    /// Update the mark price for a symbol
    ///
    /// Refreshes unrealized P&L and ratchets the trailing stop when the
    /// open position carries one. The stop only ever tightens.
    pub async fn update_price(&self, symbol: &str, price: Price) -> Result<()> {
        self.positions.update_current_price(symbol, price).await?;

        if let Some(position) = self.positions.get_open_by_symbol(symbol).await? {
            if let Some(stop) = position.trailing_stop {
                let new_stop = trail_stop(
                    price,
                    stop,
                    position.side,
                    self.config.risk.default_stop_loss_percent,
                );
                if new_stop != stop {
                    let mut updated = position;
                    updated.trailing_stop = Some(new_stop);
                    self.positions.update(updated).await?;
                }
            }
        }
        Ok(())
    }

    /// Snapshot of the current risk state
    pub async fn risk_status(&self) -> Result<RiskStatus> {
        let ledger = {
            let mut ledger = self.ledger.lock().await;
            ledger.roll_forward(self.clock.now().date_naive());
            ledger.clone()
        };
        let open_count = self.positions.count_open().await?;
        let unrealized = self.positions.total_unrealized_pnl().await?;
        Ok(RiskStatus::derive(
            &self.config.risk,
            &ledger,
            open_count,
            unrealized,
        ))
    }

    /// Aggregate execution statistics
    pub async fn execution_stats(&self) -> Result<ExecutionStats> {
        let counts = self.orders.status_counts().await?;
        let total = counts.total();
        let fill_rate_percent = if total == 0 {
            Decimal::ZERO
        } else {
            Decimal::from(counts.filled + counts.partially_filled) / Decimal::from(total)
                * Decimal::ONE_HUNDRED
        };

        Ok(ExecutionStats {
            total_orders: total,
            filled_orders: counts.filled,
            cancelled_orders: counts.cancelled,
            rejected_orders: counts.rejected,
            fill_rate_percent,
            avg_slippage_percent: self.config.simulator.slippage_percent,
            avg_latency_ms: self.config.simulator.latency_ms,
            counts,
        })
    }
}
