use nom::{
    bytes::complete::{take_till, take_until},
    character::complete::char,
    multi::many0,
    sequence::{delimited, preceded},
    IResult,
};
use odia_protocol::{FeatureStructure, LexicalCategory};
use odia_translit::{finalize_root, Transliterator};

use crate::features::{normalize_category, normalize_number, normalize_person};

/// One `/`-separated reading from the analyzer, split into its root and its
/// `<name:value>` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReading<'a> {
    pub root: &'a str,
    pub fields: Vec<(&'a str, &'a str)>,
}

impl<'a> RawReading<'a> {
    /// First value recorded under `name`.
    pub fn field(&self, name: &str) -> Option<&'a str> {
        self.fields.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }

    fn field_or_empty(&self, name: &str) -> &'a str {
        self.field(name).unwrap_or("")
    }
}

fn bracket(input: &str) -> IResult<&str, &str> {
    delimited(char('<'), take_until(">"), char('>'))(input)
}

fn reading(input: &str) -> IResult<&str, RawReading<'_>> {
    let (input, root) = take_till(|c: char| c == '<')(input)?;
    let (input, tags) = many0(preceded(take_till(|c: char| c == '<'), bracket))(input)?;

    // Tags without a `name:` part carry nothing we can read.
    let fields = tags.into_iter().filter_map(|tag| tag.split_once(':')).collect();
    Ok((input, RawReading { root, fields }))
}

/// True when the output carries at least one closed `<...>` field.
pub fn has_analysis(raw: &str) -> bool {
    raw.find('<').is_some_and(|open| raw[open..].contains('>'))
}

/// Splits analyzer output (`^surface/reading1/reading2$`) into its readings,
/// in order. The surface echo before the first `/` is dropped.
pub fn split_readings(raw: &str) -> Vec<RawReading<'_>> {
    let raw = raw.trim();
    let raw = raw.strip_suffix('$').unwrap_or(raw);
    raw.split('/')
        .skip(1)
        .filter_map(|segment| reading(segment).ok().map(|(_, r)| r))
        .collect()
}

/// Turns raw analyzer readings into feature structures, one per reading.
pub struct AnalysisNormalizer<'t, T: Transliterator> {
    translit: &'t T,
}

impl<'t, T: Transliterator> AnalysisNormalizer<'t, T> {
    pub fn new(translit: &'t T) -> Self {
        Self { translit }
    }

    /// Returns `None` when the analyzer produced no analysis, which is the
    /// signal to run fallback inference. `working` is the token's own
    /// transliteration, used when a reading carries no root.
    pub fn normalize(
        &self,
        raw: &str,
        prior: Option<LexicalCategory>,
        working: &str,
    ) -> Option<Vec<FeatureStructure>> {
        if !has_analysis(raw) {
            return None;
        }
        let readings = split_readings(raw);
        if readings.is_empty() {
            return None;
        }
        Some(readings.iter().map(|r| self.reading_to_fs(r, prior, working)).collect())
    }

    fn reading_to_fs(
        &self,
        reading: &RawReading<'_>,
        prior: Option<LexicalCategory>,
        working: &str,
    ) -> FeatureStructure {
        let root_working = if reading.root.is_empty() { working } else { reading.root };
        let root = self.translit.to_native(&finalize_root(root_working));

        // The analyzer is authoritative over the tag-derived category.
        let analyzed = normalize_category(reading.field_or_empty("cat"));
        let category = if analyzed.is_empty() {
            prior.map(LexicalCategory::code).unwrap_or("")
        } else {
            analyzed
        };

        let marker = match category {
            "n" => match (reading.field("prsg"), reading.field("det")) {
                (Some(prsg), Some(det)) if !det.is_empty() && det != "0" => {
                    format!("{}_{}", prsg, det)
                }
                (Some(prsg), _) => prsg.to_string(),
                (None, _) => String::new(),
            },
            "v" => reading.field_or_empty("tam").to_string(),
            _ => String::new(),
        };

        FeatureStructure {
            root,
            category: category.to_string(),
            gender: reading.field_or_empty("gen").to_string(),
            number: normalize_number(reading.field_or_empty("num")).to_string(),
            person: normalize_person(reading.field_or_empty("per")).to_string(),
            case: reading.field_or_empty("case").to_string(),
            marker_native: self.translit.to_native(&marker),
            marker_working: marker,
            negation: reading.field("neg").filter(|v| !v.is_empty()).map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odia_translit::WxTransliterator;

    const NOUN: &str = "^Gare/Gara<cat:n><gen:m><num:s><per:a><case:o><prsg:re><det:0>$";

    #[test]
    fn test_reading_fields() {
        let readings = split_readings(NOUN);
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].root, "Gara");
        assert_eq!(readings[0].field("case"), Some("o"));
        assert_eq!(readings[0].field("tam"), None);
    }

    #[test]
    fn test_noun_reading() {
        let wx = WxTransliterator::new();
        let fs = AnalysisNormalizer::new(&wx)
            .normalize(NOUN, Some(LexicalCategory::Noun), "Gare")
            .unwrap();
        assert_eq!(fs.len(), 1);
        assert_eq!(fs[0].to_string(), "<fs af='ଘର,n,m,sg,3,o,ରେ,re'>");
    }

    #[test]
    fn test_determiner_joins_marker() {
        let wx = WxTransliterator::new();
        let raw = "^pilAti/pilA<cat:n><num:s><prsg:0><det:ti>$";
        let fs = AnalysisNormalizer::new(&wx).normalize(raw, None, "pilAti").unwrap();
        assert_eq!(fs[0].marker_working, "0_ti");
        assert_eq!(fs[0].category, "n");
    }

    #[test]
    fn test_ambiguity_is_preserved_in_order() {
        let wx = WxTransliterator::new();
        let raw = "^kara/kara<cat:n><num:s>/kar<cat:v><per:m_h1><tam:a>/kara<cat:conj>$";
        let fs = AnalysisNormalizer::new(&wx)
            .normalize(raw, Some(LexicalCategory::Noun), "kara")
            .unwrap();
        assert_eq!(fs.len(), 3);
        assert_eq!(fs[0].category, "n");
        assert_eq!(fs[1].category, "v");
        assert_eq!(fs[1].root, "କର");
        assert_eq!(fs[1].person, "2h");
        assert_eq!(fs[1].marker_working, "a");
        assert_eq!(fs[2].category, "avy");
    }

    #[test]
    fn test_prior_applies_to_each_reading() {
        let wx = WxTransliterator::new();
        let raw = "^xa/xa<cat:v><tam:a>/xa<num:p>$";
        let fs = AnalysisNormalizer::new(&wx)
            .normalize(raw, Some(LexicalCategory::Noun), "xa")
            .unwrap();
        assert_eq!(fs[0].category, "v");
        assert_eq!(fs[1].category, "n");
        assert_eq!(fs[1].number, "pl");
    }

    #[test]
    fn test_negation_attribute() {
        let wx = WxTransliterator::new();
        let raw = "^nAhif/nAhif<cat:neg><neg:y>$";
        let fs = AnalysisNormalizer::new(&wx).normalize(raw, None, "nAhif").unwrap();
        assert_eq!(fs[0].category, "avy");
        assert!(fs[0].to_string().ends_with(" neg='y'>"));

        let raw = "^nAhif/nAhif<cat:neg><neg:>$";
        let fs = AnalysisNormalizer::new(&wx).normalize(raw, None, "nAhif").unwrap();
        assert_eq!(fs[0].negation, None);
        assert!(!fs[0].to_string().contains("neg="));
    }

    #[test]
    fn test_malformed_fields_degrade_to_empty() {
        let wx = WxTransliterator::new();
        let raw = "^Gara/Gara<cat:n><gen><num:s><case:d$";
        let fs = AnalysisNormalizer::new(&wx).normalize(raw, None, "Gara").unwrap();
        assert_eq!(fs[0].gender, "");
        assert_eq!(fs[0].number, "sg");
        assert_eq!(fs[0].case, "");
    }

    #[test]
    fn test_unanalyzed_echo_signals_fallback() {
        let wx = WxTransliterator::new();
        let normalizer = AnalysisNormalizer::new(&wx);
        assert_eq!(normalizer.normalize("^xyz/*xyz$", None, "xyz"), None);
        assert_eq!(normalizer.normalize("xyz", None, "xyz"), None);
        assert_eq!(normalizer.normalize("", None, "xyz"), None);
    }

    #[test]
    fn test_root_finalization() {
        let wx = WxTransliterator::new();
        let raw = "^kare/kar<cat:v><tam:e>$";
        let fs = AnalysisNormalizer::new(&wx).normalize(raw, None, "kare").unwrap();
        assert_eq!(fs[0].root, "କର");
        assert_eq!(fs[0].marker_native, "ଏ");
    }
}
