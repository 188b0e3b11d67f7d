//! Price value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Price of a product in whole units of the shop currency.
///
/// Prices are non-negative by construction; totals are widened to `u64`
/// so `price × quantity` sums cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u32);

impl Price {
    pub const ZERO: Price = Price(0);

    /// Creates a price from a whole amount.
    pub const fn new(amount: u32) -> Self {
        Self(amount)
    }

    /// Returns the whole amount.
    pub fn amount(&self) -> u32 {
        self.0
    }

    /// Returns `price × quantity`.
    pub fn times(&self, quantity: u32) -> u64 {
        u64::from(self.0) * u64::from(quantity)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn times_multiplies_by_quantity() {
        assert_eq!(Price::new(350).times(2), 700);
        assert_eq!(Price::new(350).times(0), 0);
    }

    #[test]
    fn times_does_not_overflow_u32() {
        let total = Price::new(u32::MAX).times(u32::MAX);
        assert_eq!(total, u64::from(u32::MAX) * u64::from(u32::MAX));
    }

    #[test]
    fn prices_order_numerically() {
        assert!(Price::new(260) < Price::new(550));
        assert_eq!(Price::ZERO, Price::new(0));
    }
}
