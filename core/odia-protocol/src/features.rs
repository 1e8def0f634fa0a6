use core::fmt;

use alloc::string::String;

/// Values shared by the inference paths.
pub mod values {
    pub const ANY: &str = "any";
    pub const SINGULAR: &str = "sg";
    pub const PLURAL: &str = "pl";
    pub const THIRD_PERSON: &str = "3";
    pub const OBLIQUE: &str = "o";
    pub const DIRECT: &str = "d";
    /// Written into the marker slots when a form is known to be unmarked.
    pub const ZERO_MARKER: &str = "0";
}

/// The eight-slot `af` annotation of one token reading.
///
/// Every slot is always serialized, in this order, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureStructure {
    pub root: String,
    pub category: String,
    pub gender: String,
    pub number: String,
    pub person: String,
    pub case: String,
    /// Tense-aspect-mood or case/determiner marker, native script.
    pub marker_native: String,
    /// The same marker in the working representation.
    pub marker_working: String,
    pub negation: Option<String>,
}

impl FeatureStructure {
    /// A structure carrying only a root and a category, as used for
    /// punctuation and numerals.
    pub fn fixed(root: &str, category: &str) -> Self {
        Self {
            root: String::from(root),
            category: String::from(category),
            ..Self::default()
        }
    }

    pub fn slots(&self) -> [&str; 8] {
        [
            &self.root,
            &self.category,
            &self.gender,
            &self.number,
            &self.person,
            &self.case,
            &self.marker_native,
            &self.marker_working,
        ]
    }
}

impl fmt::Display for FeatureStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<fs af='")?;
        for (i, slot) in self.slots().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(slot)?;
        }
        f.write_str("'")?;
        if let Some(neg) = &self.negation {
            write!(f, " neg='{}'", neg)?;
        }
        f.write_str(">")
    }
}

/// Joins alternative readings of one token with `|`, preserving order.
pub fn join_readings(readings: &[FeatureStructure]) -> String {
    use core::fmt::Write;

    let mut out = String::new();
    for (i, reading) in readings.iter().enumerate() {
        if i > 0 {
            out.push('|');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", reading);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_negation_attribute() {
        let fs = FeatureStructure {
            root: "ନ".into(),
            category: "avy".into(),
            negation: Some("y".into()),
            ..FeatureStructure::default()
        };
        assert_eq!(fs.to_string(), "<fs af='ନ,avy,,,,,,' neg='y'>");
    }

    #[test]
    fn test_readings_are_pipe_joined() {
        let joined = join_readings(&vec![
            FeatureStructure::fixed("a", "n"),
            FeatureStructure::fixed("b", "v"),
        ]);
        assert_eq!(joined, "<fs af='a,n,,,,,,'>|<fs af='b,v,,,,,,'>");
    }
}
