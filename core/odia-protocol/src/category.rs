use core::fmt;
use core::str::FromStr;

use alloc::string::String;
use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Coarse lexical category (`lcat`) written into the second feature slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum LexicalCategory {
    Noun = 0,
    SpatioTemporalNoun = 1,
    Pronoun = 2,
    Verb = 3,
    Indeclinable = 4,
    Adverb = 5,
    Adjective = 6,
    Postposition = 7,
    Punctuation = 8,
    Unknown = 9,
    Numeral = 10,
}

impl LexicalCategory {
    pub const ALL: [LexicalCategory; 11] = [
        LexicalCategory::Noun,
        LexicalCategory::SpatioTemporalNoun,
        LexicalCategory::Pronoun,
        LexicalCategory::Verb,
        LexicalCategory::Indeclinable,
        LexicalCategory::Adverb,
        LexicalCategory::Adjective,
        LexicalCategory::Postposition,
        LexicalCategory::Punctuation,
        LexicalCategory::Unknown,
        LexicalCategory::Numeral,
    ];

    /// The code used in the annotation format (`n`, `pn`, `avy`, ...).
    pub const fn code(self) -> &'static str {
        match self {
            LexicalCategory::Noun => "n",
            LexicalCategory::SpatioTemporalNoun => "nst",
            LexicalCategory::Pronoun => "pn",
            LexicalCategory::Verb => "v",
            LexicalCategory::Indeclinable => "avy",
            LexicalCategory::Adverb => "adv",
            LexicalCategory::Adjective => "adj",
            LexicalCategory::Postposition => "psp",
            LexicalCategory::Punctuation => "punc",
            LexicalCategory::Unknown => "unk",
            LexicalCategory::Numeral => "num",
        }
    }
}

impl fmt::Display for LexicalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown lexical category code: {:?}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownCategory {}

impl FromStr for LexicalCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LexicalCategory::ALL
            .into_iter()
            .find(|category| category.code() == s)
            .ok_or_else(|| UnknownCategory(String::from(s)))
    }
}
