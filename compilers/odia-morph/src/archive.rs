use odia_protocol::SuffixInventory;
use rkyv::{AlignedVec, Deserialize, Infallible};

use crate::MorphError;

/// Validates and loads a suffix inventory compiled by `suffix-compiler`.
pub fn load_inventory(bytes: &[u8]) -> Result<SuffixInventory, MorphError> {
    // Files are read into unaligned buffers; rkyv needs aligned storage.
    let mut aligned = AlignedVec::with_capacity(bytes.len());
    aligned.extend_from_slice(bytes);

    let archived = rkyv::check_archived_root::<SuffixInventory>(&aligned)
        .map_err(|e| MorphError::InvalidArchive(e.to_string()))?;

    archived
        .deserialize(&mut Infallible)
        .map_err(|_| MorphError::InvalidArchive("deserialization failed".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rkyv::to_bytes;

    #[test]
    fn test_load_compiled_inventory() {
        let mut inventory = SuffixInventory::default();
        inventory.context_postpositions.push("ବିନା".to_string());

        let bytes = to_bytes::<_, 4096>(&inventory).expect("Failed to serialize inventory");
        let loaded = load_inventory(&bytes).unwrap();
        assert_eq!(loaded, inventory);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(matches!(
            load_inventory(b"not an archive"),
            Err(MorphError::InvalidArchive(_))
        ));
    }
}
