//! Line-stream annotation of SSF (Shakti Standard Format) token files.

pub mod analyzer;
pub mod batch;
pub mod driver;

use std::path::PathBuf;

use thiserror::Error;

pub use analyzer::{Analyzer, AnalyzerError, LtProcAnalyzer};
pub use batch::{annotate_path, output_file_name};
pub use driver::{Annotation, Annotator, MorphSource, Numbering};

#[derive(Debug, Error)]
pub enum AnnotateError {
    #[error("line {line}: expected 3 tab-separated fields, found {fields}: {content:?}")]
    Malformed {
        line: usize,
        fields: usize,
        content: String,
    },
    #[error("line {line}: empty token or tag field: {content:?}")]
    EmptyField { line: usize, content: String },
    #[error("line {line}: analyzer failed on {token:?}")]
    Analyzer {
        line: usize,
        token: String,
        #[source]
        source: AnalyzerError,
    },
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
