#![no_std] // The data model carries no I/O

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod category;
pub mod features;
pub mod inventory;
pub mod record;

// Re-export core types for convenience
pub use category::{LexicalCategory, UnknownCategory};
pub use features::{join_readings, values, FeatureStructure};
pub use inventory::SuffixInventory;
pub use record::TokenRecord;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use rkyv::{from_bytes, to_bytes};

    #[test]
    fn test_inventory_serialization() {
        let original = SuffixInventory::default();

        let bytes = to_bytes::<_, 4096>(&original).expect("Failed to serialize SuffixInventory");

        // Simulate loading a compiled table from disk
        let deserialized: SuffixInventory =
            from_bytes(&bytes).expect("Failed to deserialize SuffixInventory");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_category_codes_round_trip() {
        for category in LexicalCategory::ALL {
            let parsed: LexicalCategory = category.code().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("xyz".parse::<LexicalCategory>().is_err());
    }

    #[test]
    fn test_fixed_structure_has_eight_slots() {
        let fs = FeatureStructure::fixed("COMMA", "punc");
        assert_eq!(fs.to_string(), "<fs af='COMMA,punc,,,,,,'>");
    }
}
