//! File-type association metadata and input sniffing.
//!
//! Advisory only: a host application uses these to auto-select this
//! tokenizer among many. Nothing here affects tokenization.

use std::path::Path;

pub const NAME: &str = "ASP";
pub const ALIASES: &[&str] = &["asp", "clingo", "gringo"];
pub const FILENAMES: &[&str] = &["*.lp", "*.asp", "*.clingo", "*.gringo"];
pub const MIMETYPES: &[&str] = &["text/plain"];

/// Heuristic: input is plausibly an ASP program if it contains a rule
/// arrow anywhere. False positives and negatives are acceptable.
pub fn analyse_text(text: &str) -> bool {
    text.contains(":-")
}

/// Whether a file name matches one of the associated `*.ext` patterns.
pub fn matches_filename(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    FILENAMES
        .iter()
        .filter_map(|pattern| pattern.strip_prefix("*."))
        .any(|candidate| candidate == ext)
}
