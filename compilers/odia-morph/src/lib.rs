pub mod analysis;
pub mod archive;
pub mod fallback;
pub mod features;
pub mod special;
pub mod suffix;
pub mod tagmap;

use thiserror::Error;

pub use analysis::AnalysisNormalizer;
pub use fallback::{FallbackEngine, FallbackQuery};
pub use special::{special_override, Override};
pub use suffix::{MorphTables, SuffixSpan, SuffixTable};
pub use tagmap::map_pos_tag;

#[derive(Debug, Error)]
pub enum MorphError {
    #[error("suffix table `{table}` failed to compile: {source}")]
    Pattern {
        table: &'static str,
        #[source]
        source: regex::Error,
    },
    #[error("invalid suffix archive: {0}")]
    InvalidArchive(String),
}
