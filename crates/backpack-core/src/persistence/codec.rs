//! Stored Format
//!
//! Each trip's list lives under `mybackpack-items-<trip label>` as a JSON
//! array of items. Decoding re-checks every item invariant so a hand-edited or
//! corrupted value never enters the collection.

use std::collections::HashSet;

use thiserror::Error;

use super::traits::StorageError;
use crate::domain::{Entity, Item, TripType, MAX_SAFE_ID};

pub const STORAGE_KEY_PREFIX: &str = "mybackpack-items-";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("stored items are not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("stored items are invalid: {0}")]
    Invalid(String),
}

/// Storage key for a trip's item list
pub fn storage_key(trip: TripType) -> String {
    format!("{STORAGE_KEY_PREFIX}{}", trip.label())
}

pub fn encode_items(items: &[Item]) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(items)?)
}

pub fn decode_items(raw: &str) -> Result<Vec<Item>, PersistenceError> {
    let items: Vec<Item> = serde_json::from_str(raw)?;
    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        if item.id().0 > MAX_SAFE_ID {
            return Err(PersistenceError::Invalid(format!("id {} is out of range", item.id())));
        }
        if !seen.insert(item.id()) {
            return Err(PersistenceError::Invalid(format!("duplicate id {}", item.id())));
        }
        if item.name.trim().is_empty() {
            return Err(PersistenceError::Invalid(format!("item {} has an empty name", item.id)));
        }
        if !item.weight.is_finite() || item.weight < 0.0 {
            return Err(PersistenceError::Invalid(format!(
                "item {} has weight {}",
                item.id, item.weight
            )));
        }
        if !item.position().is_finite() {
            return Err(PersistenceError::Invalid(format!("item {} has a non-finite position", item.id)));
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, ItemId, Position};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn sample() -> Vec<Item> {
        vec![
            Item::new(ItemId(1_700_000_000_000), "Tent".to_string(), Category::Equipment, 2.5, Position::new(12.25, 80.0)),
            Item::new(ItemId(1_700_000_000_001), "Sleeping Bag".to_string(), Category::Sleeping, 1.8, Position::new(0.0, 299.5)),
            Item::new(ItemId(3), "Trail Mix".to_string(), Category::Food, 0.0, Position::new(150.0, 150.0)),
        ]
    }

    #[test]
    fn test_storage_key_format() {
        assert_eq!(storage_key(TripType::DayHike), "mybackpack-items-Day Hike");
        assert_eq!(
            storage_key(TripType::ThroughHikingPct),
            "mybackpack-items-Through Hiking PCT Trail"
        );
    }

    #[test]
    fn test_encode_decode_preserves_order_and_values() {
        let items = sample();
        let raw = encode_items(&items).unwrap();
        assert_eq!(decode_items(&raw).unwrap(), items);
    }

    #[test]
    fn test_decode_browser_written_value() {
        // Integral coordinates as a browser JSON.stringify would write them
        let raw = r#"[{"id":1712345678901,"name":"Headlamp","category":"Equipment","weight":0.1,"x":42,"y":17.5}]"#;
        let items = decode_items(raw).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, ItemId(1712345678901));
        assert_eq!(items[0].position(), Position::new(42.0, 17.5));
    }

    #[test]
    fn test_decode_rejects_corrupt_json() {
        assert!(matches!(decode_items("[{"), Err(PersistenceError::Corrupt(_))));
        assert!(matches!(decode_items("{}"), Err(PersistenceError::Corrupt(_))));
    }

    #[test]
    fn test_decode_rejects_unknown_category() {
        let raw = r#"[{"id":1,"name":"Kayak","category":"Boats","weight":20,"x":0,"y":0}]"#;
        assert!(matches!(decode_items(raw), Err(PersistenceError::Corrupt(_))));
    }

    #[test]
    fn test_decode_rejects_nan_weight() {
        // JSON.stringify(NaN) writes null
        let raw = r#"[{"id":1,"name":"Rope","category":"Equipment","weight":null,"x":0,"y":0}]"#;
        assert!(matches!(decode_items(raw), Err(PersistenceError::Corrupt(_))));
    }

    #[test]
    fn test_decode_rejects_invariant_violations() {
        let duplicate = r#"[
            {"id":1,"name":"A","category":"Food","weight":1,"x":0,"y":0},
            {"id":1,"name":"B","category":"Food","weight":1,"x":0,"y":0}
        ]"#;
        assert!(matches!(decode_items(duplicate), Err(PersistenceError::Invalid(_))));

        let negative = r#"[{"id":1,"name":"A","category":"Food","weight":-2,"x":0,"y":0}]"#;
        assert!(matches!(decode_items(negative), Err(PersistenceError::Invalid(_))));

        let unnamed = r#"[{"id":1,"name":" ","category":"Food","weight":2,"x":0,"y":0}]"#;
        assert!(matches!(decode_items(unnamed), Err(PersistenceError::Invalid(_))));
    }

    #[test]
    fn test_decode_rejects_ids_beyond_safe_range() {
        let raw = r#"[{"id":18446744073709551615,"name":"Tent","category":"Equipment","weight":2.5,"x":0,"y":0}]"#;
        assert!(matches!(decode_items(raw), Err(PersistenceError::Invalid(_))));

        let edge = format!(
            r#"[{{"id":{},"name":"Tent","category":"Equipment","weight":2.5,"x":0,"y":0}}]"#,
            MAX_SAFE_ID
        );
        assert_eq!(decode_items(&edge).unwrap()[0].id, ItemId(MAX_SAFE_ID));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(encode_items(&[]).unwrap(), "[]");
        assert!(decode_items("[]").unwrap().is_empty());
    }

    #[test]
    fn test_full_precision_floats_survive() {
        let item = Item::new(
            ItemId(9),
            "Bear Canister".to_string(),
            Category::Food,
            15.354314168712035,
            Position::new(9.095208259530384, 271.03710448230447),
        );
        let raw = encode_items(std::slice::from_ref(&item)).unwrap();
        assert_eq!(decode_items(&raw).unwrap(), vec![item]);
    }

    proptest! {
        #[test]
        fn prop_arbitrary_floats_round_trip(
            entries in prop::collection::vec(
                (0.0f64..f64::MAX, prop::num::f64::NORMAL | prop::num::f64::ZERO, prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL),
                1..8,
            ),
        ) {
            let items: Vec<Item> = entries
                .iter()
                .enumerate()
                .map(|(n, (weight, x, y))| {
                    Item::new(ItemId(n as u64), format!("item {n}"), Category::Other, *weight, Position::new(*x, *y))
                })
                .collect();
            let raw = encode_items(&items).unwrap();
            prop_assert_eq!(decode_items(&raw).unwrap(), items);
        }
    }
}
