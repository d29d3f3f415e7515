//! Name-based construction of items.

use tracing::debug;

use crate::item::Item;
use crate::kind::ItemKind;
use crate::record::ItemRecord;

/// Maps a display name onto the category that governs it.
///
/// Total: every input produces an item. Unrecognized names (including wrong
/// case and the empty string) become `Normal` items.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemFactory;

impl ItemFactory {
    pub fn create_variant(name: impl Into<String>, sell_in: i32, quality: i32) -> Item {
        let name = name.into();
        let kind = ItemKind::for_name(&name);
        if kind == ItemKind::Normal {
            debug!(name = %name, "no dedicated category, aging as normal item");
        }
        Item::with_kind(kind, name, sell_in, quality)
    }

    pub fn from_record(record: ItemRecord) -> Item {
        Self::create_variant(record.name, record.sell_in, record.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_aged_brie() {
        let item = ItemFactory::create_variant("Aged Brie", 10, 20);
        assert_eq!(item.kind(), ItemKind::AgedBrie);
        assert_eq!(item.name(), "Aged Brie");
        assert_eq!(item.sell_in(), 10);
        assert_eq!(item.quality(), 20);
    }

    #[test]
    fn creates_backstage_pass() {
        let item = ItemFactory::create_variant("Backstage passes to a TAFKAL80ETC concert", 15, 30);
        assert_eq!(item.kind(), ItemKind::BackstagePass);
        assert_eq!(item.name(), "Backstage passes to a TAFKAL80ETC concert");
        assert_eq!((item.sell_in(), item.quality()), (15, 30));
    }

    #[test]
    fn creates_sulfuras_keeping_legendary_quality() {
        let item = ItemFactory::create_variant("Sulfuras, Hand of Ragnaros", 0, 80);
        assert_eq!(item.kind(), ItemKind::Sulfuras);
        assert_eq!((item.sell_in(), item.quality()), (0, 80));
    }

    #[test]
    fn creates_conjured() {
        let item = ItemFactory::create_variant("Conjured", 3, 6);
        assert_eq!(item.kind(), ItemKind::Conjured);
    }

    #[test]
    fn unknown_names_become_normal() {
        for name in ["Normal Item", "", "Random Item XYZ", "+5 Dexterity Vest"] {
            let item = ItemFactory::create_variant(name, 7, 15);
            assert_eq!(item.kind(), ItemKind::Normal);
            assert_eq!(item.name(), name);
            assert_eq!((item.sell_in(), item.quality()), (7, 15));
        }
    }

    #[test]
    fn dispatch_is_case_sensitive() {
        let item = ItemFactory::create_variant("aged brie", 10, 20);
        assert_eq!(item.kind(), ItemKind::Normal);
    }

    #[test]
    fn accepts_out_of_range_values() {
        let item = ItemFactory::create_variant("Normal Item", -5, 10);
        assert_eq!(item.sell_in(), -5);

        let item = ItemFactory::create_variant("Backstage passes to a TAFKAL80ETC concert", 0, 50);
        assert_eq!((item.sell_in(), item.quality()), (0, 50));

        let item = ItemFactory::create_variant("Normal Item", 100, 0);
        assert_eq!((item.sell_in(), item.quality()), (100, 0));
    }

    #[test]
    fn from_record_resolves_the_same_way() {
        let item = ItemFactory::from_record(ItemRecord::new("Aged Brie", 2, 0));
        assert_eq!(item, ItemFactory::create_variant("Aged Brie", 2, 0));
    }
}
