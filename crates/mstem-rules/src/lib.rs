//! Rule table compiler and lexicon for the mstem stemmer.
//!
//! # Architecture
//!
//! - [`matcher`] -- compiled pattern with first-occurrence and all-occurrence
//!   substitution, plus translation of the rule-file dialect
//! - [`rule`] -- a single rule and the ordered [`RuleTable`] read from TSV
//! - [`lexicon`] -- the set of known forms that stops the rewrite loop

pub mod lexicon;
pub mod matcher;
pub mod rule;

pub use lexicon::Lexicon;
pub use matcher::Matcher;
pub use rule::{Rule, RuleTable};

/// Error type for rule table compilation.
///
/// Any of these aborts construction of the whole table.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("no edge specified in pattern {pattern:?} on line {line}")]
    MalformedRule { line: usize, pattern: String },
    #[error("expected 3 tab-separated fields on line {line}, found {fields}")]
    MalformedRecord { line: usize, fields: usize },
    #[error("invalid pattern {pattern:?} on line {line}: {source}")]
    InvalidPattern {
        line: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("failed to read rule table: {0}")]
    Csv(#[from] csv::Error),
}
