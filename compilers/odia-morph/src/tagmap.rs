use odia_protocol::LexicalCategory;
use LexicalCategory::*;
use TagPattern::*;

/// How a rule inspects a POS tag.
#[derive(Debug, Clone, Copy)]
pub enum TagPattern {
    Exact(&'static str),
    Prefix(&'static str),
    Contains(&'static str),
}

impl TagPattern {
    pub fn matches(&self, tag: &str) -> bool {
        match self {
            Exact(s) => tag == *s,
            Prefix(s) => tag.starts_with(s),
            Contains(s) => tag.contains(s),
        }
    }
}

/// Evaluated top to bottom; the first matching rule wins.
pub const TAG_RULES: &[(TagPattern, LexicalCategory)] = &[
    (Contains("N_NN"), Noun),
    (Exact("N_NST"), SpatioTemporalNoun),
    (Prefix("PR_"), Pronoun),
    (Prefix("DM_"), Pronoun),
    (Prefix("V_"), Verb),
    (Prefix("RP_"), Indeclinable),
    (Prefix("CC_"), Indeclinable),
    (Exact("RB"), Adverb),
    (Exact("JJ"), Adjective),
    (Exact("PSP"), Postposition),
    (Exact("RD_PUNC"), Punctuation),
    (Exact("RD_SYM"), Punctuation),
    (Exact("RD_RDF"), Unknown),
    (Exact("RD_UNK"), Unknown),
    (Exact("RD_BUL"), Unknown),
    (Exact("QT_QTC"), Numeral),
    (Exact("QT_QTO"), Numeral),
    (Exact("QT_QTF"), Indeclinable),
    (Exact("RD_ECH"), Indeclinable),
];

/// Maps a BIS part-of-speech tag to its coarse category. Unknown tags give
/// `None`, which downstream treats as "no category known".
pub fn map_pos_tag(tag: &str) -> Option<LexicalCategory> {
    TAG_RULES
        .iter()
        .find(|(pattern, _)| pattern.matches(tag))
        .map(|(_, category)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tag_families() {
        assert_eq!(map_pos_tag("N_NN"), Some(Noun));
        assert_eq!(map_pos_tag("N_NNP"), Some(Noun));
        assert_eq!(map_pos_tag("N_NNV"), Some(Noun));
        assert_eq!(map_pos_tag("N_NST"), Some(SpatioTemporalNoun));
        assert_eq!(map_pos_tag("PR_PRP"), Some(Pronoun));
        assert_eq!(map_pos_tag("DM_DMD"), Some(Pronoun));
        assert_eq!(map_pos_tag("V_VM_VNF"), Some(Verb));
        assert_eq!(map_pos_tag("CC_CCD"), Some(Indeclinable));
        assert_eq!(map_pos_tag("RP_NEG"), Some(Indeclinable));
        assert_eq!(map_pos_tag("RD_SYM"), Some(Punctuation));
        assert_eq!(map_pos_tag("RD_BUL"), Some(Unknown));
        assert_eq!(map_pos_tag("QT_QTO"), Some(Numeral));
        assert_eq!(map_pos_tag("QT_QTF"), Some(Indeclinable));
    }

    #[test]
    fn test_unknown_tag_is_unset() {
        assert_eq!(map_pos_tag("XC"), None);
        assert_eq!(map_pos_tag(""), None);
        assert_eq!(map_pos_tag("rb"), None);
    }

    fn first_rule(tag: &str) -> Option<LexicalCategory> {
        if tag.contains("N_NN") {
            Some(Noun)
        } else if tag == "N_NST" {
            Some(SpatioTemporalNoun)
        } else if tag.starts_with("PR_") || tag.starts_with("DM_") {
            Some(Pronoun)
        } else if tag.starts_with("V_") {
            Some(Verb)
        } else if tag.starts_with("RP_") || tag.starts_with("CC_") {
            Some(Indeclinable)
        } else {
            match tag {
                "RB" => Some(Adverb),
                "JJ" => Some(Adjective),
                "PSP" => Some(Postposition),
                "RD_PUNC" | "RD_SYM" => Some(Punctuation),
                "RD_RDF" | "RD_UNK" | "RD_BUL" => Some(Unknown),
                "QT_QTC" | "QT_QTO" => Some(Numeral),
                "QT_QTF" | "RD_ECH" => Some(Indeclinable),
                _ => None,
            }
        }
    }

    fn tag_strategy() -> impl Strategy<Value = String> {
        let heads = vec![
            "", "N_NN", "N_NST", "PR_", "DM_", "V_", "RP_", "CC_", "RB", "JJ", "PSP", "RD_", "QT_",
            "XN_NN",
        ];
        (prop::sample::select(heads), "[A-Z_]{0,6}", any::<bool>()).prop_map(|(head, tail, bare)| {
            if bare {
                head.to_string()
            } else {
                format!("{}{}", head, tail)
            }
        })
    }

    proptest! {
        #[test]
        fn test_first_matching_rule_wins(tag in tag_strategy()) {
            prop_assert_eq!(map_pos_tag(&tag), first_rule(&tag));
            let matching: Vec<_> = TAG_RULES.iter().filter(|(p, _)| p.matches(&tag)).collect();
            prop_assert_eq!(map_pos_tag(&tag), matching.first().map(|(_, c)| *c));
        }
    }
}
