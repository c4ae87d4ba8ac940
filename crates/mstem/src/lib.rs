//! Rule-driven multilingual stemmer.
//!
//! A [`Stemmer`] strips affixes from a word by applying an ordered table of
//! anchored rewrite rules until the remaining form is found in a lexicon or
//! the rules run out. It can report the bare stem, the morpheme sequence,
//! gloss tags for the affixes, or a prefix/stem/suffix segmentation.
//!
//! ```
//! use mstem::Stemmer;
//!
//! let stemmer = Stemmer::builder()
//!     .rules("tgl-Latn")
//!     .forms(["sulat"])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(stemmer.stem("sumulat"), "sulat");
//! assert_eq!(stemmer.parse("pagsulatan", false), ["pag", "sulat", "an"]);
//! assert_eq!(stemmer.gloss("pagsulatan"), ["NMLZ", "sulat", "LV"]);
//! ```

pub mod annotate;
#[cfg(feature = "conll")]
pub mod conll;
#[cfg(feature = "ltf")]
pub mod ltf;
pub mod source;
pub mod stemmer;

use std::path::PathBuf;

pub use mstem_core::{AffixChain, Analysis, GlossParse, Position, Segmentation, Termination};
pub use mstem_rules::{Lexicon, Rule, RuleError, RuleTable};
pub use source::{RuleSource, SearchPaths};
pub use stemmer::{Evidence, Stemmer, StemmerBuilder, StemmerOptions};

/// Error type for stemmer construction.
///
/// Analysis itself cannot fail; every error surfaces while the rule table
/// and lexicon are being loaded.
#[derive(Debug, thiserror::Error)]
pub enum StemmerError {
    /// Neither a file path nor a rule directory nor a bundled rule set
    /// matched the requested name.
    #[error("rule source {name:?} not found (searched: {})", display_paths(.searched))]
    RuleSourceNotFound { name: String, searched: Vec<PathBuf> },

    /// The rule source was found but could not be read.
    #[error("failed to read rule source {}: {source}", .path.display())]
    RuleIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rule table did not compile.
    #[error("invalid rule table: {0}")]
    Rules(#[from] RuleError),

    /// A lexicon file could not be read.
    #[error("failed to read lexicon {}: {source}", .path.display())]
    LexiconIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nothing".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
