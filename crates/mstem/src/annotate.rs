// One-line morphological annotation of running text
//
// Each token is rendered as `w:<token>~l:<lemma>~m:<tags>` where `<tags>` are
// the gloss tags of its prefixes and suffixes joined by `+`.

use crate::{Evidence, Stemmer};

/// Separator between gloss tags in the `m:` field.
pub const TAG_JOINER: &str = "+";

/// Annotate one token.
pub fn annotate_token(stemmer: &Stemmer, token: &str) -> String {
    let analysis = stemmer.analyze(token, Evidence::Glosses);
    let tags = analysis
        .prefixes
        .iter()
        .chain(analysis.suffixes.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(TAG_JOINER);
    format!("w:{token}~l:{}~m:{tags}", analysis.stem)
}

/// Annotate every space-separated token of a line, one annotation per entry.
pub fn annotate_line(stemmer: &Stemmer, line: &str) -> Vec<String> {
    line.trim_end_matches(['\r', '\n'])
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(|t| annotate_token(stemmer, t))
        .collect()
}
