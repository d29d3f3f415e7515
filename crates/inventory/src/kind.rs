//! Item categories and the fixed name table that selects them.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const CONJURED: &str = "Conjured";

/// Recognized display names. Matching is exact and case-sensitive.
const KNOWN_NAMES: [(&str, ItemKind); 4] = [
    (AGED_BRIE, ItemKind::AgedBrie),
    (BACKSTAGE_PASSES, ItemKind::BackstagePass),
    (SULFURAS, ItemKind::Sulfuras),
    (CONJURED, ItemKind::Conjured),
];

/// Aging category of an item. Fixed for the item's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Fallback for every unrecognized name.
    #[default]
    Normal,
    AgedBrie,
    BackstagePass,
    /// Legendary: never ages.
    Sulfuras,
    Conjured,
}

impl ItemKind {
    /// Resolve a display name to its category. Unknown names are `Normal`.
    pub fn for_name(name: &str) -> Self {
        KNOWN_NAMES
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, kind)| *kind)
            .unwrap_or_default()
    }

    /// Canonical display name, or `None` for `Normal` (any name goes).
    pub fn display_name(self) -> Option<&'static str> {
        KNOWN_NAMES
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(name, _)| *name)
    }

    /// Stable snake_case label, matching the serde representation.
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Normal => "normal",
            ItemKind::AgedBrie => "aged_brie",
            ItemKind::BackstagePass => "backstage_pass",
            ItemKind::Sulfuras => "sulfuras",
            ItemKind::Conjured => "conjured",
        }
    }

    pub fn is_legendary(self) -> bool {
        self == ItemKind::Sulfuras
    }
}

impl core::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ItemKind {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "normal" => Ok(ItemKind::Normal),
            "aged_brie" => Ok(ItemKind::AgedBrie),
            "backstage_pass" => Ok(ItemKind::BackstagePass),
            "sulfuras" => Ok(ItemKind::Sulfuras),
            "conjured" => Ok(ItemKind::Conjured),
            other => Err(DomainError::validation(format!("unknown item kind: {other}"))),
        }
    }
}
