use serde::{Deserialize, Serialize};

/// Order and position side (Buy or Sell)
///
/// A position opened by a buy order is long; one opened by a sell order
/// is short. The same enum serves both because the netting rules compare
/// order side against position side directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// P&L direction sign: +1 for long (buy), -1 for short (sell)
    pub fn sign(&self) -> rust_decimal::Decimal {
        match self {
            Side::Buy => rust_decimal::Decimal::ONE,
            Side::Sell => -rust_decimal::Decimal::ONE,
        }
    }
}
