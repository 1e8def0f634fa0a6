use odia_protocol::SuffixInventory;
use regex::Regex;

use crate::MorphError;

/// Where a suffix matched inside a working-form token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixSpan {
    pub start: usize,
    pub end: usize,
    pub literal: String,
}

impl SuffixSpan {
    /// The token with this suffix removed.
    pub fn stem<'a>(&self, working: &'a str) -> &'a str {
        &working[..self.start]
    }
}

/// One closed marker set compiled into an end-anchored alternation.
#[derive(Debug, Clone)]
pub struct SuffixTable {
    pattern: Option<Regex>,
}

impl SuffixTable {
    pub fn compile(table: &'static str, literals: &[String]) -> Result<Self, MorphError> {
        let alternatives: Vec<String> = literals
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| format!("{}$", regex::escape(s)))
            .collect();
        if alternatives.is_empty() {
            return Ok(Self { pattern: None });
        }

        let pattern = Regex::new(&alternatives.join("|"))
            .map_err(|source| MorphError::Pattern { table, source })?;

        Ok(Self { pattern: Some(pattern) })
    }

    pub fn find(&self, working: &str) -> Option<SuffixSpan> {
        self.find_from(working, 0)
    }

    /// Leftmost suffix match starting at or after `from`. A match covering the
    /// whole token is skipped: a suffix must leave a non-empty stem.
    pub fn find_from(&self, working: &str, from: usize) -> Option<SuffixSpan> {
        let pattern = self.pattern.as_ref()?;
        let mut at = from;
        while at <= working.len() {
            let m = pattern.find_at(working, at)?;
            if m.start() > 0 {
                return Some(SuffixSpan {
                    start: m.start(),
                    end: m.end(),
                    literal: m.as_str().to_string(),
                });
            }
            // Retry past the first character for a shorter suffix.
            at = working[m.start()..]
                .chars()
                .next()
                .map_or(working.len() + 1, |c| m.start() + c.len_utf8());
        }
        None
    }
}

/// The compiled fallback configuration: built once, then shared read-only.
#[derive(Debug, Clone)]
pub struct MorphTables {
    pub plural_oblique: SuffixTable,
    pub plural_direct: SuffixTable,
    pub singular_oblique: SuffixTable,
    context_postpositions: Vec<String>,
    inflecting_tags: Vec<String>,
}

impl MorphTables {
    pub fn compile(inventory: &SuffixInventory) -> Result<Self, MorphError> {
        Ok(Self {
            plural_oblique: SuffixTable::compile("plural_oblique", &inventory.plural_oblique)?,
            plural_direct: SuffixTable::compile("plural_direct", &inventory.plural_direct)?,
            singular_oblique: SuffixTable::compile(
                "singular_oblique",
                &inventory.singular_oblique,
            )?,
            context_postpositions: inventory.context_postpositions.clone(),
            inflecting_tags: inventory.inflecting_tags.clone(),
        })
    }

    pub fn builtin() -> Result<Self, MorphError> {
        Self::compile(&SuffixInventory::default())
    }

    /// The following token forces the oblique case on a bare form.
    pub fn is_context_postposition(&self, surface: &str) -> bool {
        self.context_postpositions.iter().any(|p| p == surface)
    }

    /// Tokens with this tag go through suffix stripping.
    pub fn is_inflecting_tag(&self, pos: &str) -> bool {
        self.inflecting_tags.iter().any(|t| t == pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> MorphTables {
        MorphTables::builtin().unwrap()
    }

    #[test]
    fn test_plural_oblique_match() {
        let t = tables();
        let span = t.plural_oblique.find("pilAmAnafku").unwrap();
        assert_eq!(span.literal, "mAnafku");
        assert_eq!(span.stem("pilAmAnafku"), "pilA");
    }

    #[test]
    fn test_leftmost_match_wins() {
        // `fkaTAre`, `TAre` and `re` all end the token; the earliest start wins.
        let span = tables().singular_oblique.find("GarafkaTAre").unwrap();
        assert_eq!(span.literal, "fkaTAre");
        assert_eq!(span.start, 4);
    }

    #[test]
    fn test_inner_search_stays_in_span() {
        let t = tables();
        let word = "pilAmAnafku";
        let plural = t.plural_oblique.find(word).unwrap();
        let inner = t.singular_oblique.find_from(word, plural.start).unwrap();
        assert_eq!(inner.literal, "fku");
        assert!(inner.start >= plural.start);
    }

    #[test]
    fn test_suffix_must_leave_stem() {
        let t = tables();
        assert_eq!(t.singular_oblique.find("ku"), None);
        // The whole token is `fku`; the shorter `ku` still leaves a stem.
        assert_eq!(t.singular_oblique.find("fku").unwrap().literal, "ku");
    }

    #[test]
    fn test_empty_table_never_matches() {
        let table = SuffixTable::compile("empty", &[]).unwrap();
        assert_eq!(table.find("anything"), None);
    }

    #[test]
    fn test_literals_are_escaped() {
        let table = SuffixTable::compile("dots", &["a.b".to_string()]).unwrap();
        assert!(table.find("xa.b").is_some());
        assert!(table.find("xacb").is_none());
    }

    #[test]
    fn test_context_and_tag_sets() {
        let t = tables();
        assert!(t.is_context_postposition("ସହିତ"));
        assert!(!t.is_context_postposition("ଘର"));
        assert!(t.is_inflecting_tag("N_NNP"));
        assert!(!t.is_inflecting_tag("JJ"));
    }
}
