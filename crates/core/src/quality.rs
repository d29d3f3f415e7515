//! Quality: the bounded score of an item.

use serde::{Deserialize, Serialize};

/// Quality score of an item.
///
/// Mutators keep the result within `[Quality::MIN, Quality::MAX]`, except that
/// `decrease` only floors: a value above the maximum steps down by one.
/// Construction does **not** clamp: legendary items carry 80 and keep it for as
/// long as nothing mutates them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quality(i32);

impl Quality {
    /// Lowest quality any mutator will produce.
    pub const MIN: i32 = 0;
    /// Highest quality any mutator will produce.
    pub const MAX: i32 = 50;

    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// Add one, clamped to `[Quality::MIN, Quality::MAX]`.
    pub fn increase(&mut self) {
        self.0 = self.0.saturating_add(1).clamp(Self::MIN, Self::MAX);
    }

    /// Subtract one, floored at [`Quality::MIN`].
    ///
    /// There is no cap on the way down: a value constructed above the maximum
    /// simply steps down by one.
    pub fn decrease(&mut self) {
        self.0 = self.0.saturating_sub(1).max(Self::MIN);
    }

    pub fn reset(&mut self) {
        self.0 = Self::MIN;
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl From<i32> for Quality {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Quality> for i32 {
    fn from(value: Quality) -> Self {
        value.0
    }
}

impl core::fmt::Display for Quality {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
