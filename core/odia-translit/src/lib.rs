//! Odia script ↔ WX working representation.
//!
//! Suffix matching and root repair happen on the Roman WX form; results are
//! converted back to native script for the annotation.

pub mod wx;

use std::borrow::Cow;

pub use wx::WxTransliterator;

/// Vowel letters a finalized root may end with, in WX.
pub const FINAL_VOWELS: [char; 8] = ['a', 'A', 'i', 'I', 'e', 'E', 'o', 'O'];

/// The inherent vowel appended to bare stems.
pub const INHERENT_VOWEL: char = 'a';

/// Bidirectional script conversion. Both directions are total.
pub trait Transliterator {
    fn to_working(&self, native: &str) -> String;
    fn to_native(&self, working: &str) -> String;
}

impl<T: Transliterator + ?Sized> Transliterator for &T {
    fn to_working(&self, native: &str) -> String {
        (**self).to_working(native)
    }

    fn to_native(&self, working: &str) -> String {
        (**self).to_native(working)
    }
}

/// Appends the inherent vowel when the WX root does not already end in one of
/// the [`FINAL_VOWELS`]. Returns `Cow::Borrowed` when the root is unchanged.
/// An empty root is left empty.
pub fn finalize_root(working: &str) -> Cow<'_, str> {
    match working.chars().last() {
        Some(last) if !FINAL_VOWELS.contains(&last) => {
            let mut owned = String::with_capacity(working.len() + 1);
            owned.push_str(working);
            owned.push(INHERENT_VOWEL);
            Cow::Owned(owned)
        }
        _ => Cow::Borrowed(working),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_finalize_appends_inherent_vowel() {
        assert_eq!(finalize_root("rAm"), "rAma");
        assert_eq!(finalize_root("guru"), "gurua");
        assert!(matches!(finalize_root("pilA"), Cow::Borrowed("pilA")));
        assert!(matches!(finalize_root(""), Cow::Borrowed("")));
    }

    proptest! {
        #[test]
        fn test_finalized_root_ends_in_vowel(root in "[a-zA-Z]{1,12}") {
            let finalized = finalize_root(&root);
            let last = finalized.chars().last().unwrap();
            prop_assert!(FINAL_VOWELS.contains(&last));
        }
    }
}
