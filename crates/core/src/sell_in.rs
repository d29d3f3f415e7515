//! SellIn: days left before an item passes its sell-by date.

use serde::{Deserialize, Serialize};

/// Days remaining before expiry. May go negative without bound.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SellIn(i32);

impl SellIn {
    pub fn new(days: i32) -> Self {
        Self(days)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// Count one day down. No floor.
    pub fn decrease(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    /// Past the sell-by date: strictly below zero, not merely at zero.
    pub fn is_expired(&self) -> bool {
        self.0 < 0
    }

    /// `true` iff the remaining days are at most `threshold` (inclusive).
    pub fn is_within(&self, threshold: i32) -> bool {
        self.0 <= threshold
    }
}

impl From<i32> for SellIn {
    fn from(days: i32) -> Self {
        Self(days)
    }
}

impl From<SellIn> for i32 {
    fn from(value: SellIn) -> Self {
        value.0
    }
}

impl core::fmt::Display for SellIn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_accepts_positive_zero_and_negative() {
        assert_eq!(SellIn::new(10).value(), 10);
        assert_eq!(SellIn::new(0).value(), 0);
        assert_eq!(SellIn::new(-5).value(), -5);
    }

    #[test]
    fn decrease_subtracts_one() {
        let mut sell_in = SellIn::new(10);
        sell_in.decrease();
        assert_eq!(sell_in.value(), 9);
    }

    #[test]
    fn decrease_goes_negative_without_floor() {
        let mut sell_in = SellIn::new(0);
        for _ in 0..3 {
            sell_in.decrease();
        }
        assert_eq!(sell_in.value(), -3);
    }

    #[test]
    fn zero_is_not_expired() {
        assert!(!SellIn::new(0).is_expired());
        assert!(!SellIn::new(1).is_expired());
    }

    #[test]
    fn below_zero_is_expired() {
        assert!(SellIn::new(-1).is_expired());
        assert!(SellIn::new(-100).is_expired());
    }

    #[test]
    fn expires_after_decrease_from_zero() {
        let mut sell_in = SellIn::new(0);
        sell_in.decrease();
        assert!(sell_in.is_expired());
    }

    #[test]
    fn is_within_is_inclusive() {
        assert!(SellIn::new(10).is_within(10));
        assert!(SellIn::new(9).is_within(10));
        assert!(!SellIn::new(11).is_within(10));
        assert!(SellIn::new(-1).is_within(5));
    }

    #[test]
    fn displays_as_bare_number() {
        assert_eq!(SellIn::new(-7).to_string(), "-7");
    }
}
