//! Raw item triple as it enters (or is read back from) an inventory.

use serde::{Deserialize, Serialize};

/// Unresolved `(name, sell_in, quality)` entry.
///
/// Carries no category: the category is picked from `name` when the record is
/// loaded into an [`Inventory`](crate::Inventory).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl ItemRecord {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }
}

impl<S: Into<String>> From<(S, i32, i32)> for ItemRecord {
    fn from((name, sell_in, quality): (S, i32, i32)) -> Self {
        Self::new(name, sell_in, quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_tuple() {
        let record: ItemRecord = ("Aged Brie", 2, 0).into();
        assert_eq!(record, ItemRecord::new("Aged Brie", 2, 0));
    }

    #[test]
    fn decodes_from_json_object() {
        let record: ItemRecord =
            serde_json::from_str(r#"{"name":"Elixir of the Mongoose","sell_in":5,"quality":7}"#)
                .unwrap();
        assert_eq!(record.name, "Elixir of the Mongoose");
        assert_eq!(record.sell_in, 5);
        assert_eq!(record.quality, 7);
    }
}
