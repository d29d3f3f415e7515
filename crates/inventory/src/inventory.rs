//! The shelf: an ordered collection of items aged together.

use tracing::{info, trace};

use crate::factory::ItemFactory;
use crate::item::Item;
use crate::record::ItemRecord;

/// Ordered inventory of resolved items.
///
/// Insertion order is kept and is the order items are aged in. Items age
/// independently, so order only matters for stable output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
    days_elapsed: u64,
}

impl Inventory {
    /// Resolve every raw record to its category, keeping order and length.
    pub fn new(records: Vec<ItemRecord>) -> Self {
        records.into_iter().collect()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of `tick()` calls so far.
    pub fn days_elapsed(&self) -> u64 {
        self.days_elapsed
    }

    /// Current state as raw records, in inventory order.
    pub fn snapshot(&self) -> Vec<ItemRecord> {
        self.items.iter().map(Item::record).collect()
    }

    /// Advance every item by exactly one day, in order.
    pub fn tick(&mut self) {
        for item in &mut self.items {
            item.advance_one_day();
        }
        self.days_elapsed = self.days_elapsed.saturating_add(1);

        info!(day = self.days_elapsed, items = self.items.len(), "inventory ticked");
    }

    /// Call [`Inventory::tick`] `days` times.
    pub fn tick_days(&mut self, days: u32) {
        for _ in 0..days {
            self.tick();
        }
    }

    /// Render the shelf day by day, ticking between renders.
    ///
    /// Renders `days + 1` sections (the current day, then one per tick), so the
    /// inventory ends up `days` days older.
    pub fn daily_report(&mut self, days: u32) -> String {
        let mut out = String::new();
        for day in 0..=days {
            out.push_str(&format!("-------- day {} --------\n", self.days_elapsed));
            out.push_str("name, sellIn, quality\n");
            out.push_str(&self.to_string());
            out.push('\n');
            if day < days {
                self.tick();
            }
        }
        out
    }
}

impl FromIterator<ItemRecord> for Inventory {
    fn from_iter<T: IntoIterator<Item = ItemRecord>>(iter: T) -> Self {
        let items: Vec<Item> = iter.into_iter().map(ItemFactory::from_record).collect();
        trace!(items = items.len(), "inventory loaded");
        Self {
            items,
            days_elapsed: 0,
        }
    }
}

impl core::fmt::Display for Inventory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for item in &self.items {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}
