use alloc::string::String;

use crate::category::LexicalCategory;

/// One tagged token, built per data line and consumed immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    /// Document position id (`1`, `3.2`, ...).
    pub address: String,
    /// Surface form, native script.
    pub surface: String,
    /// Surface form in the working transliteration.
    pub working: String,
    pub pos: String,
    /// `None` when the tag mapper knows no category for `pos`.
    pub category: Option<LexicalCategory>,
}
