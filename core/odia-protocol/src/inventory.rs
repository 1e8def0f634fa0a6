use alloc::string::{String, ToString};
use alloc::vec::Vec;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

const PLURAL_OBLIQUE: &[&str] = &[
    "mAnafku", "mAnafkare", "mAnafkara", "mAnafkaTAre", "mAnafkaru",
    "gudiku", "gudikara", "gudikaru", "gudikaTAre", "gudikare",
    "gudZiku", "gudZikara", "gudZikaru", "gudZikaTAre", "gudZikare",
    "gudZAku", "gudZAkara", "gudZAkaru", "gudZAkaTAre", "gudZAkare",
    "gudAku", "gudAkara", "gudAkaru", "gudAkaTAre", "gudAkare",
];

const PLURAL_DIRECT: &[&str] = &["mAne", "gudA", "gudZA", "gudZAka", "gudZika", "gudika"];

const SINGULAR_OBLIQUE: &[&str] = &[
    "re", "ra", "ru", "TAre", "TAru", "fku", "fka", "fkara", "fkaTAru", "fkaTAre", "ku",
    "xbArA", "fkaxbArA",
];

/// Instrumental, comitative, locative and purposive postpositions that put
/// the preceding bare token into the oblique case.
const CONTEXT_POSTPOSITIONS: &[&str] = &["ସହିତ", "ଦ୍ଵାରା", "ଠାରେ", "ପାଇଁ"];

/// POS tags whose unanalyzed tokens go through suffix stripping.
const INFLECTING_TAGS: &[&str] = &["N_NN", "N_NNP", "V_VM_VNF"];

/// The closed marker lists used by fallback inference.
///
/// Suffixes are in the working transliteration and are listed in match
/// priority order; postpositions are surface forms.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct SuffixInventory {
    pub version: u32,
    pub plural_oblique: Vec<String>,
    pub plural_direct: Vec<String>,
    pub singular_oblique: Vec<String>,
    pub context_postpositions: Vec<String>,
    pub inflecting_tags: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for SuffixInventory {
    fn default() -> Self {
        Self {
            version: 1,
            plural_oblique: owned(PLURAL_OBLIQUE),
            plural_direct: owned(PLURAL_DIRECT),
            singular_oblique: owned(SINGULAR_OBLIQUE),
            context_postpositions: owned(CONTEXT_POSTPOSITIONS),
            inflecting_tags: owned(INFLECTING_TAGS),
        }
    }
}
