//! Value objects: equality by value, not identity.

use core::iter::Sum;
use core::ops::Add;

use serde::{Deserialize, Serialize};

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Non-negative amount in the smallest currency unit.
///
/// Arithmetic saturates instead of wrapping; a storefront total is never
/// expected to get anywhere near `u64::MAX`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn new(minor_units: u64) -> Self {
        Self(minor_units)
    }

    pub const fn minor_units(self) -> u64 {
        self.0
    }

    /// Price of `quantity` units.
    pub fn times(self, quantity: u32) -> Price {
        Price(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn times_multiplies_by_quantity() {
        assert_eq!(Price::new(350).times(2), Price::new(700));
        assert_eq!(Price::new(350).times(0), Price::ZERO);
    }

    #[test]
    fn arithmetic_saturates() {
        assert_eq!(Price::new(u64::MAX).times(2), Price::new(u64::MAX));
        assert_eq!(Price::new(u64::MAX) + Price::new(1), Price::new(u64::MAX));
    }

    #[test]
    fn sums_an_iterator() {
        let total: Price = [Price::new(350), Price::new(420), Price::new(200)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::new(970));
        assert_eq!(core::iter::empty::<Price>().sum::<Price>(), Price::ZERO);
    }
}
