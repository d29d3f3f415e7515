//! A tracked item and the per-category aging rules.

use tracing::debug;

use gildedrose_core::{Quality, SellIn};

use crate::kind::ItemKind;
use crate::record::ItemRecord;

/// Backstage passes gain +2 once the concert is this many days away or closer.
const BACKSTAGE_NEAR_DAYS: i32 = 10;
/// Backstage passes gain +3 once the concert is this many days away or closer.
const BACKSTAGE_IMMINENT_DAYS: i32 = 5;

/// An item on the shelf.
///
/// The name and category never change; only `sell_in` and `quality` move, and
/// only through [`Item::advance_one_day`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    kind: ItemKind,
    sell_in: SellIn,
    quality: Quality,
}

impl Item {
    /// Build an item of an explicit category, bypassing name dispatch.
    ///
    /// Values are taken as given: negative `sell_in` and out-of-range `quality`
    /// are accepted.
    pub fn with_kind(
        kind: ItemKind,
        name: impl Into<String>,
        sell_in: impl Into<SellIn>,
        quality: impl Into<Quality>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            sell_in: sell_in.into(),
            quality: quality.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in.value()
    }

    pub fn quality(&self) -> i32 {
        self.quality.value()
    }

    /// Raw `(name, sell_in, quality)` view of the current state.
    pub fn record(&self) -> ItemRecord {
        ItemRecord::new(self.name.clone(), self.sell_in(), self.quality())
    }

    /// Age the item by exactly one day.
    ///
    /// Per-day quality change first, then the sell-by countdown, then the
    /// end-of-life effect, which already sees the decremented `sell_in`.
    pub fn advance_one_day(&mut self) {
        if self.kind.is_legendary() {
            return;
        }

        let (sell_in_before, quality_before) = (self.sell_in, self.quality);

        match self.kind {
            ItemKind::Normal => self.decrease_quality(),
            ItemKind::AgedBrie => self.increase_quality(),
            ItemKind::Conjured => {
                self.decrease_quality();
                self.decrease_quality();
            }
            ItemKind::BackstagePass => {
                for _ in 0..self.backstage_increase() {
                    self.increase_quality();
                }
            }
            ItemKind::Sulfuras => {}
        }

        self.decrease_sell_in();
        self.apply_end_of_life_effect();

        debug!(
            name = %self.name,
            kind = %self.kind,
            sell_in_before = sell_in_before.value(),
            sell_in = self.sell_in.value(),
            quality_before = quality_before.value(),
            quality = self.quality.value(),
            "item aged"
        );
    }

    fn decrease_quality(&mut self) {
        self.quality.decrease();
    }

    fn increase_quality(&mut self) {
        self.quality.increase();
    }

    fn decrease_sell_in(&mut self) {
        self.sell_in.decrease();
    }

    /// Banded gain, read off `sell_in` before today's countdown.
    fn backstage_increase(&self) -> u8 {
        if self.sell_in.is_within(BACKSTAGE_IMMINENT_DAYS) {
            3
        } else if self.sell_in.is_within(BACKSTAGE_NEAR_DAYS) {
            2
        } else {
            1
        }
    }

    fn apply_end_of_life_effect(&mut self) {
        if !self.sell_in.is_expired() {
            return;
        }

        match self.kind {
            ItemKind::Normal => {
                if self.quality.is_positive() {
                    self.decrease_quality();
                }
            }
            ItemKind::AgedBrie => self.increase_quality(),
            ItemKind::Conjured => {
                self.decrease_quality();
                self.decrease_quality();
            }
            // Concert is over: whatever was gained today is lost too.
            ItemKind::BackstagePass => self.quality.reset(),
            ItemKind::Sulfuras => {}
        }
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
