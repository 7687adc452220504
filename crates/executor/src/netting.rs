//! Position netting
//!
//! Combines a new execution with the existing position for its symbol.
//! The decision table, evaluated in order:
//!
//! 1. no open position          -> open a new one at the executed price
//! 2. same side                 -> extend, weighted-average entry
//! 3. opposite, qty < open      -> partial exit, position stays open
//! 4. opposite, qty == open     -> full close, realized P&L finalized
//! 5. opposite, qty > open      -> close fully, reverse the remainder
//!
//! The caller must hold the symbol's lock across `apply`; the netter
//! itself takes no locks.

use std::sync::Arc;

use log::info;

use helios_core::{Execution, Order, Position};
use helios_ports::{PositionRepository, StoreResult};

/// What the netting pass did to the symbol's position
#[derive(Debug, Clone)]
pub enum NettingOutcome {
    /// A new position was opened
    Opened(Position),
    /// The existing position grew; entry price is the weighted average
    Extended(Position),
    /// Part of the position was exited; it remains open
    PartiallyClosed(Position),
    /// The position closed in full; realized P&L is set
    Closed(Position),
    /// The position closed and a new one opened in the other direction
    /// at the same executed price
    Reversed { closed: Position, opened: Position },
}

impl NettingOutcome {
    /// The authoritative position after netting (the newly opened leg
    /// for a reversal)
    pub fn position(&self) -> &Position {
        match self {
            NettingOutcome::Opened(p)
            | NettingOutcome::Extended(p)
            | NettingOutcome::PartiallyClosed(p)
            | NettingOutcome::Closed(p) => p,
            NettingOutcome::Reversed { opened, .. } => opened,
        }
    }

    /// Realized P&L finalized by this netting pass, if any
    pub fn realized_pnl(&self) -> Option<rust_decimal::Decimal> {
        match self {
            NettingOutcome::Closed(p) => p.realized_pnl,
            NettingOutcome::Reversed { closed, .. } => closed.realized_pnl,
            _ => None,
        }
    }
}

/// Applies executions to the position book
pub struct PositionNetter {
    positions: Arc<dyn PositionRepository>,
}

impl PositionNetter {
    pub fn new(positions: Arc<dyn PositionRepository>) -> Self {
        Self { positions }
    }

    /// Net an execution against the symbol's existing position, if any
    pub async fn apply(
        &self,
        existing: Option<Position>,
        order: &Order,
        execution: &Execution,
    ) -> StoreResult<NettingOutcome> {
        let Some(position) = existing.filter(|p| p.is_open()) else {
            let opened = self.open_position(order, execution, order.quantity).await?;
            return Ok(NettingOutcome::Opened(opened));
        };

        if position.side == order.side {
            // Case 2: extend
            let mut extended = position;
            extended.extend(
                order.quantity,
                execution.executed_price,
                execution.fee,
                execution.executed_at,
            );
            let updated = self.positions.update(extended).await?;
            info!(
                "{} extended to {} @ avg {}",
                updated.symbol, updated.quantity, updated.entry_price
            );
            return Ok(NettingOutcome::Extended(updated));
        }

        if order.quantity < position.quantity {
            // Case 3: partial exit; the exit fee still accrues to the
            // position's bookkeeping
            let updated = self
                .positions
                .add_partial_exit(
                    position.id,
                    execution.executed_price,
                    order.quantity,
                    execution.executed_at,
                )
                .await?;
            let mut with_fee = updated;
            with_fee.total_fees += execution.fee;
            let updated = self.positions.update(with_fee).await?;
            info!(
                "{} partially closed, {} remaining",
                updated.symbol, updated.quantity
            );
            return Ok(NettingOutcome::PartiallyClosed(updated));
        }

        if order.quantity == position.quantity {
            // Case 4: full close
            let mut with_fee = position;
            with_fee.total_fees += execution.fee;
            let with_fee = self.positions.update(with_fee).await?;
            let closed = self
                .positions
                .close(with_fee.id, execution.executed_price, execution.executed_at)
                .await?;
            info!(
                "{} closed, realized P&L {:?}",
                closed.symbol, closed.realized_pnl
            );
            return Ok(NettingOutcome::Closed(closed));
        }

        // Case 5: close-and-reverse. The remainder opens in the new
        // direction at the same executed price; the fill's fee is
        // carried by the new leg.
        let matched_quantity = position.quantity;
        let closed = self
            .positions
            .close(position.id, execution.executed_price, execution.executed_at)
            .await?;
        let remainder = order.quantity - matched_quantity;
        let opened = self.open_position(order, execution, remainder).await?;
        info!(
            "{} reversed: closed {} {:?}, opened {} {:?}",
            closed.symbol, matched_quantity, closed.side, remainder, opened.side
        );
        Ok(NettingOutcome::Reversed { closed, opened })
    }

    async fn open_position(
        &self,
        order: &Order,
        execution: &Execution,
        quantity: helios_core::Quantity,
    ) -> StoreResult<Position> {
        let position = Position::open(
            order.symbol.clone(),
            order.side,
            quantity,
            execution.executed_price,
            execution.fee,
            order.id,
            execution.executed_at,
        );
        self.positions.create(position).await
    }
}
