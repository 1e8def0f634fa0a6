use std::borrow::Cow;

use odia_protocol::values::{ANY, DIRECT, OBLIQUE, PLURAL, SINGULAR, THIRD_PERSON, ZERO_MARKER};
use odia_protocol::{FeatureStructure, LexicalCategory};
use odia_translit::{finalize_root, Transliterator};

use crate::suffix::{MorphTables, SuffixSpan};

/// Everything fallback inference knows about an unanalyzed token.
#[derive(Debug, Clone, Copy)]
pub struct FallbackQuery<'a> {
    pub surface: &'a str,
    pub working: &'a str,
    pub pos: &'a str,
    pub category: Option<LexicalCategory>,
    /// Surface form of the following token, or `""`.
    pub next_surface: &'a str,
}

/// Agreement and case values chosen by one inference branch.
struct Agreement {
    gender: &'static str,
    number: &'static str,
    person: &'static str,
    case: &'static str,
}

impl Agreement {
    const fn new(
        gender: &'static str,
        number: &'static str,
        person: &'static str,
        case: &'static str,
    ) -> Self {
        Self { gender, number, person, case }
    }
}

/// The stem left after stripping, and the marker it carried.
struct Stripped<'a> {
    stem: &'a str,
    whole_token: bool,
    marker_native: String,
    marker_working: String,
}

/// Suffix-stripping inference for tokens the analyzer could not analyze.
/// Always yields exactly one feature structure.
pub struct FallbackEngine<'a, T: Transliterator> {
    tables: &'a MorphTables,
    translit: &'a T,
}

impl<'a, T: Transliterator> FallbackEngine<'a, T> {
    pub fn new(tables: &'a MorphTables, translit: &'a T) -> Self {
        Self { tables, translit }
    }

    pub fn infer(&self, query: &FallbackQuery<'_>) -> FeatureStructure {
        let oblique_by_context = self.tables.is_context_postposition(query.next_surface);

        let (stripped, agreement) = if self.tables.is_inflecting_tag(query.pos) {
            self.strip_inflection(query, oblique_by_context)
        } else {
            let case = if oblique_by_context { OBLIQUE } else { "" };
            (self.unstripped(query.working, "", ""), Agreement::new("", "", "", case))
        };

        let finalized = finalize_root(stripped.stem);
        let root = match finalized {
            Cow::Borrowed(_) if stripped.whole_token => query.surface.to_string(),
            _ => self.translit.to_native(&finalized),
        };

        FeatureStructure {
            root,
            category: query.category.map(LexicalCategory::code).unwrap_or("").to_string(),
            gender: agreement.gender.to_string(),
            number: agreement.number.to_string(),
            person: agreement.person.to_string(),
            case: agreement.case.to_string(),
            marker_native: stripped.marker_native,
            marker_working: stripped.marker_working,
            negation: None,
        }
    }

    fn strip_inflection<'q>(
        &self,
        query: &FallbackQuery<'q>,
        oblique_by_context: bool,
    ) -> (Stripped<'q>, Agreement) {
        let working = query.working;

        if let Some(plural) = self.tables.plural_oblique.find(working) {
            // A singular case marker inside the plural marker is the case remnant.
            let stripped = match self.tables.singular_oblique.find_from(working, plural.start) {
                Some(inner) => self.marked(working, &inner),
                None => Stripped {
                    stem: plural.stem(working),
                    whole_token: false,
                    marker_native: String::new(),
                    marker_working: String::new(),
                },
            };
            return (stripped, Agreement::new(ANY, PLURAL, THIRD_PERSON, OBLIQUE));
        }

        if let Some(singular) = self.tables.singular_oblique.find(working) {
            let agreement = if query.category == Some(LexicalCategory::Noun) {
                Agreement::new(ANY, SINGULAR, THIRD_PERSON, OBLIQUE)
            } else {
                Agreement::new(ANY, ANY, ANY, OBLIQUE)
            };
            return (self.marked(working, &singular), agreement);
        }

        if let Some(plural) = self.tables.plural_direct.find(working) {
            let stripped = Stripped {
                stem: plural.stem(working),
                whole_token: false,
                marker_native: ZERO_MARKER.to_string(),
                marker_working: ZERO_MARKER.to_string(),
            };
            return (stripped, Agreement::new(ANY, PLURAL, THIRD_PERSON, DIRECT));
        }

        if oblique_by_context {
            return (self.unstripped(working, "", ""), Agreement::new(ANY, ANY, ANY, OBLIQUE));
        }
        match query.category {
            Some(LexicalCategory::Noun) => (
                self.unstripped(working, ZERO_MARKER, ZERO_MARKER),
                Agreement::new(ANY, ANY, ANY, DIRECT),
            ),
            Some(LexicalCategory::Verb) => (
                self.unstripped(working, ZERO_MARKER, ZERO_MARKER),
                Agreement::new(ANY, ANY, ANY, ""),
            ),
            _ => (self.unstripped(working, "", ""), Agreement::new(ANY, ANY, ANY, "")),
        }
    }

    fn marked<'q>(&self, working: &'q str, span: &SuffixSpan) -> Stripped<'q> {
        Stripped {
            stem: span.stem(working),
            whole_token: false,
            marker_native: self.translit.to_native(&span.literal),
            marker_working: span.literal.clone(),
        }
    }

    fn unstripped<'q>(&self, working: &'q str, native: &str, marker: &str) -> Stripped<'q> {
        Stripped {
            stem: working,
            whole_token: true,
            marker_native: native.to_string(),
            marker_working: marker.to_string(),
        }
    }
}
