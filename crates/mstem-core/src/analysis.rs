// Affix accumulator and analysis result shapes

use std::collections::{BTreeSet, VecDeque};

/// How the rewrite loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Termination {
    /// The working form was found in the lexicon before the rules ran out.
    Matched,
    /// Every rule was tried without a lexicon hit. The stem is a best-effort
    /// residual and is not re-checked against the lexicon.
    Exhausted,
}

/// Ordered affix evidence collected during one analysis.
///
/// The two sides grow in opposite directions so that output order always
/// runs from the outside of the word towards the stem and back out:
///
/// - prefixes are pushed to the **back**: a prefix stripped later sits
///   closer to the stem;
/// - suffixes are pushed to the **front**: a suffix stripped later also sits
///   closer to the stem, which on the suffix side means earlier in the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffixChain {
    prefixes: VecDeque<String>,
    suffixes: VecDeque<String>,
}

impl AffixChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a prefix; it goes after (inside of) every prefix seen so far.
    pub fn push_prefix(&mut self, affix: impl Into<String>) {
        self.prefixes.push_back(affix.into());
    }

    /// Record a suffix; it goes before (inside of) every suffix seen so far.
    pub fn push_suffix(&mut self, affix: impl Into<String>) {
        self.suffixes.push_front(affix.into());
    }

    /// Record a group of prefix tags from one rule, in their given order.
    pub fn extend_prefixes<I>(&mut self, tags: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.prefixes.extend(tags.into_iter().map(Into::into));
    }

    /// Record a group of suffix tags from one rule at the front of the
    /// suffix side. The group keeps its own internal order.
    pub fn extend_suffixes<I>(&mut self, tags: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
        I::IntoIter: DoubleEndedIterator,
    {
        for tag in tags.into_iter().rev() {
            self.suffixes.push_front(tag.into());
        }
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }

    pub fn suffixes(&self) -> impl Iterator<Item = &str> {
        self.suffixes.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty() && self.suffixes.is_empty()
    }

    /// Number of recorded entries on both sides.
    pub fn len(&self) -> usize {
        self.prefixes.len() + self.suffixes.len()
    }
}

/// Result of one traversal of the rule table: prefix evidence, the residual
/// stem and suffix evidence, each side in output order.
///
/// The evidence is either literal affix text or gloss tags, depending on the
/// mode the traversal ran in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis {
    pub prefixes: Vec<String>,
    pub stem: String,
    pub suffixes: Vec<String>,
    pub termination: Termination,
    /// Number of rules whose substitution was attempted before the loop
    /// stopped. Never exceeds the length of the rule table.
    pub rules_tried: usize,
}

impl Analysis {
    pub fn new(
        chain: AffixChain,
        stem: String,
        termination: Termination,
        rules_tried: usize,
    ) -> Self {
        Self {
            prefixes: chain.prefixes.into(),
            stem,
            suffixes: chain.suffixes.into(),
            termination,
            rules_tried,
        }
    }

    /// Prefixes, then the stem, then suffixes.
    pub fn morphemes(&self) -> Vec<String> {
        self.prefixes
            .iter()
            .chain(std::iter::once(&self.stem))
            .chain(self.suffixes.iter())
            .cloned()
            .collect()
    }

    /// Consuming variant of [`Analysis::morphemes`].
    pub fn into_morphemes(self) -> Vec<String> {
        let mut out = self.prefixes;
        out.reserve(1 + self.suffixes.len());
        out.push(self.stem);
        out.extend(self.suffixes);
        out
    }

    /// Collapse into a prefix block, the stem and a suffix block.
    pub fn into_segmentation(self) -> Segmentation {
        Segmentation {
            prefixes: self.prefixes.concat(),
            stem: self.stem,
            suffixes: self.suffixes.concat(),
        }
    }

    /// Collapse into the stem and the set of all recorded tags.
    pub fn into_gloss_parse(self) -> GlossParse {
        GlossParse {
            glosses: self.prefixes.into_iter().chain(self.suffixes).collect(),
            stem: self.stem,
        }
    }

    /// Whether the loop stopped on a lexicon entry.
    pub fn is_lexical(&self) -> bool {
        self.termination == Termination::Matched
    }
}

/// A word split into its prefix block, stem and suffix block. The blocks
/// are the literal affixes concatenated without delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segmentation {
    pub prefixes: String,
    pub stem: String,
    pub suffixes: String,
}

impl Segmentation {
    /// `(prefix block, stem, suffix block)`.
    pub fn into_tuple(self) -> (String, String, String) {
        (self.prefixes, self.stem, self.suffixes)
    }
}

/// A stem with the set of gloss tags its affixes carried. Duplicate tags
/// collapse; iteration order is lexicographic, not affix order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlossParse {
    pub stem: String,
    pub glosses: BTreeSet<String>,
}
