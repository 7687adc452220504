//! Trailing-stop ratchet
//!
//! A pure function invoked from the price-update path. The stop follows
//! the price in the profitable direction only and never loosens.

use rust_decimal::Decimal;

use helios_core::{Price, Side};

/// Recompute a trailing stop for the given mark price
///
/// For a long (`Side::Buy`) the candidate stop sits `trail_percent`
/// below the price and only ever moves up; for a short it sits above and
/// only ever moves down.
pub fn trail_stop(
    current_price: Price,
    current_stop: Price,
    side: Side,
    trail_percent: Decimal,
) -> Price {
    let fraction = trail_percent / Decimal::ONE_HUNDRED;
    match side {
        Side::Buy => {
            let candidate = current_price * (Decimal::ONE - fraction);
            candidate.max(current_stop)
        }
        Side::Sell => {
            let candidate = current_price * (Decimal::ONE + fraction);
            candidate.min(current_stop)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn long_stop_ratchets_up_only() {
        // 2% trail below 100 = 98
        let stop = trail_stop(dec!(100), dec!(95), Side::Buy, dec!(2));
        assert_eq!(stop, dec!(98));

        // Price falls back: stop holds
        let stop = trail_stop(dec!(97), stop, Side::Buy, dec!(2));
        assert_eq!(stop, dec!(98));

        // New high: stop follows
        let stop = trail_stop(dec!(110), stop, Side::Buy, dec!(2));
        assert_eq!(stop, dec!(107.80));
    }

    #[test]
    fn short_stop_ratchets_down_only() {
        let stop = trail_stop(dec!(100), dec!(105), Side::Sell, dec!(2));
        assert_eq!(stop, dec!(102));

        let stop = trail_stop(dec!(103), stop, Side::Sell, dec!(2));
        assert_eq!(stop, dec!(102));

        let stop = trail_stop(dec!(90), stop, Side::Sell, dec!(2));
        assert_eq!(stop, dec!(91.80));
    }
}
