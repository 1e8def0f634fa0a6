use odia_protocol::FeatureStructure;

const ODIA_FULL_STOP: &str = "।";

/// A fixed annotation applied before the analyzer is consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    pub fs: FeatureStructure,
    /// Replacement for the POS column, when the tag is rewritten.
    pub corrected_pos: Option<&'static str>,
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || ('\u{0b66}'..='\u{0b6f}').contains(&c)
}

/// Punctuation, symbols and numerals get literal structures and never reach
/// the analyzer.
pub fn special_override(surface: &str, pos: &str) -> Option<Override> {
    let punctuation_tag = matches!(pos, "RD_SYM" | "RD_PUNC");

    match surface {
        "," => Some(Override {
            fs: FeatureStructure::fixed("COMMA", "punc"),
            corrected_pos: Some("RD_PUNC"),
        }),
        "/" => Some(Override {
            fs: FeatureStructure::fixed("BACKSLASH", "punc"),
            corrected_pos: Some("RD_SYM"),
        }),
        _ if punctuation_tag => Some(Override {
            fs: FeatureStructure::fixed(surface, "punc"),
            corrected_pos: (surface == ODIA_FULL_STOP).then_some("RD_PUNC"),
        }),
        _ if surface.chars().any(is_digit) || matches!(pos, "QT_QTC" | "QT_QTO") => Some(Override {
            fs: FeatureStructure::fixed(surface, "num"),
            corrected_pos: None,
        }),
        _ => None,
    }
}
