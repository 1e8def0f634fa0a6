use log::{debug, trace};
use nom::{
    character::complete::{char, digit1},
    combinator::recognize,
    sequence::{separated_pair, terminated},
    IResult,
};
use odia_morph::{
    map_pos_tag, special_override, AnalysisNormalizer, FallbackEngine, FallbackQuery, MorphTables,
};
use odia_protocol::{join_readings, TokenRecord};
use odia_translit::Transliterator;

use crate::analyzer::Analyzer;
use crate::AnnotateError;

const CLOSING_BRACKET: &str = "))";

/// How data lines are addressed in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numbering {
    /// `3\t...`
    Sentence,
    /// `3.2\t...`
    Chunk,
}

impl Numbering {
    pub fn from_chunk_flag(chunked: bool) -> Self {
        if chunked {
            Numbering::Chunk
        } else {
            Numbering::Sentence
        }
    }
}

fn sentence_address(input: &str) -> IResult<&str, &str> {
    terminated(digit1, char('\t'))(input)
}

fn chunk_address(input: &str) -> IResult<&str, &str> {
    terminated(recognize(separated_pair(digit1, char('.'), digit1)), char('\t'))(input)
}

/// The address of a data line, or `None` for structural lines.
pub fn data_address(line: &str, numbering: Numbering) -> Option<&str> {
    let parsed = match numbering {
        Numbering::Sentence => sentence_address(line),
        Numbering::Chunk => chunk_address(line),
    };
    parsed.ok().map(|(_, address)| address)
}

/// Which component produced a token's annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphSource {
    Fixed,
    Analyzer,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub pos: String,
    pub morph: String,
    pub source: MorphSource,
}

/// Annotates a tagged line stream, one token at a time.
pub struct Annotator<'a, A: Analyzer, T: Transliterator> {
    analyzer: A,
    translit: &'a T,
    tables: &'a MorphTables,
    numbering: Numbering,
}

impl<'a, A: Analyzer, T: Transliterator> Annotator<'a, A, T> {
    pub fn new(
        analyzer: A,
        translit: &'a T,
        tables: &'a MorphTables,
        numbering: Numbering,
    ) -> Self {
        Self { analyzer, translit, tables, numbering }
    }

    pub fn annotate_lines<S: AsRef<str>>(
        &mut self,
        lines: &[S],
    ) -> Result<Vec<String>, AnnotateError> {
        let mut annotated = Vec::with_capacity(lines.len());

        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let trimmed = line.trim();

            if data_address(trimmed, self.numbering).is_none() {
                if trimmed == CLOSING_BRACKET {
                    annotated.push(format!("\t{}", CLOSING_BRACKET));
                } else {
                    annotated.push(line.to_string());
                }
                continue;
            }

            let line_no = index + 1;
            let record = self.parse_record(trimmed, line_no)?;
            let next_surface = lines
                .get(index + 1)
                .and_then(|next| self.data_surface(next.as_ref()))
                .unwrap_or("");

            let annotation = self.annotate_token(&record, next_surface, line_no)?;
            annotated.push(format!(
                "{}\t{}\t{}\t{}",
                record.address, record.surface, annotation.pos, annotation.morph
            ));
        }

        Ok(annotated)
    }

    fn parse_record(&self, line: &str, line_no: usize) -> Result<TokenRecord, AnnotateError> {
        let fields: Vec<&str> = line.split('\t').collect();
        let &[address, surface, pos] = fields.as_slice() else {
            return Err(AnnotateError::Malformed {
                line: line_no,
                fields: fields.len(),
                content: line.to_string(),
            });
        };
        if surface.trim().is_empty() || pos.trim().is_empty() {
            return Err(AnnotateError::EmptyField {
                line: line_no,
                content: line.to_string(),
            });
        }

        Ok(TokenRecord {
            address: address.to_string(),
            surface: surface.to_string(),
            working: self.translit.to_working(surface),
            pos: pos.to_string(),
            category: map_pos_tag(pos),
        })
    }

    /// Surface token of `line` if it is a data line.
    fn data_surface<'l>(&self, line: &'l str) -> Option<&'l str> {
        let trimmed = line.trim();
        data_address(trimmed, self.numbering)?;
        trimmed.split('\t').nth(1)
    }

    /// Resolves one token: fixed overrides first, then the analyzer, then
    /// suffix inference when the analyzer found nothing.
    pub fn annotate_token(
        &mut self,
        record: &TokenRecord,
        next_surface: &str,
        line_no: usize,
    ) -> Result<Annotation, AnnotateError> {
        if let Some(fixed) = special_override(&record.surface, &record.pos) {
            return Ok(Annotation {
                pos: fixed.corrected_pos.unwrap_or(record.pos.as_str()).to_string(),
                morph: fixed.fs.to_string(),
                source: MorphSource::Fixed,
            });
        }

        let raw = self.analyzer.analyze(&record.working).map_err(|source| AnnotateError::Analyzer {
            line: line_no,
            token: record.surface.clone(),
            source,
        })?;
        trace!("line {}: analyzer returned {:?}", line_no, raw);

        let normalizer = AnalysisNormalizer::new(self.translit);
        if let Some(readings) = normalizer.normalize(&raw, record.category, &record.working) {
            return Ok(Annotation {
                pos: record.pos.clone(),
                morph: join_readings(&readings),
                source: MorphSource::Analyzer,
            });
        }

        debug!("line {}: no analysis for {:?}, inferring from suffixes", line_no, record.surface);
        let query = FallbackQuery {
            surface: &record.surface,
            working: &record.working,
            pos: &record.pos,
            category: record.category,
            next_surface,
        };
        let fs = FallbackEngine::new(self.tables, self.translit).infer(&query);
        Ok(Annotation {
            pos: record.pos.clone(),
            morph: fs.to_string(),
            source: MorphSource::Fallback,
        })
    }
}
