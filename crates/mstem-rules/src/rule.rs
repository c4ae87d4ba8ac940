// Rule compilation and the ordered rule table
//
// Source format (tab-separated, first row is a header):
//
//   pattern<TAB>replacement<TAB>dotted.gloss.list
//
// Table order is significant: the stemmer tries rules strictly in the order
// they appear here.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use mstem_core::Position;
use mstem_core::text::to_nfd;
use tracing::debug;

use crate::RuleError;
use crate::matcher::Matcher;

/// Separator between tags in the gloss column.
pub const GLOSS_SEPARATOR: char = '.';

/// One compiled rewrite rule.
#[derive(Debug, Clone)]
pub struct Rule {
    position: Position,
    matcher: Matcher,
    glosses: Vec<String>,
    line: usize,
}

impl Rule {
    /// Compile a rule from its three source fields.
    ///
    /// `pattern` and `replacement` are brought to NFD before anything else,
    /// so anchors and literals line up with normalized tokens. `line` is only
    /// used for error reporting.
    pub fn compile(
        pattern: &str,
        replacement: &str,
        glosses: &str,
        line: usize,
    ) -> Result<Self, RuleError> {
        let pattern = to_nfd(pattern);
        let replacement = to_nfd(replacement);

        let position = Position::classify(&pattern).ok_or_else(|| RuleError::MalformedRule {
            line,
            pattern: pattern.clone(),
        })?;

        let matcher =
            Matcher::new(&pattern, &replacement).map_err(|source| RuleError::InvalidPattern {
                line,
                pattern: pattern.clone(),
                source,
            })?;

        Ok(Self {
            position,
            matcher,
            glosses: split_glosses(glosses),
            line,
        })
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Gloss tags in source order. May be empty.
    pub fn glosses(&self) -> &[String] {
        &self.glosses
    }

    /// Line of the rule source this rule was read from.
    pub fn line(&self) -> usize {
        self.line
    }
}

/// Split a dotted gloss field into tags, dropping empty pieces.
pub fn split_glosses(field: &str) -> Vec<String> {
    field
        .split(GLOSS_SEPARATOR)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Ordered, immutable sequence of compiled rules.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Create a table from already compiled rules, keeping their order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Read and compile a TSV rule source. The first row is a header and is
    /// skipped; blank lines are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RuleError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut rules = Vec::new();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line() as usize);
            if record.len() != 3 {
                return Err(RuleError::MalformedRecord {
                    line,
                    fields: record.len(),
                });
            }
            rules.push(Rule::compile(&record[0], &record[1], &record[2], line)?);
        }

        debug!(rules = rules.len(), "compiled rule table");
        Ok(Self { rules })
    }

    /// Compile a rule table held in memory.
    pub fn from_tsv(source: &str) -> Result<Self, RuleError> {
        Self::from_reader(source.as_bytes())
    }

    /// Read and compile a rule table from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RuleError> {
        let file = File::open(path.as_ref()).map_err(csv::Error::from)?;
        Self::from_reader(file)
    }

    /// Compile `(pattern, replacement, glosses)` triples without a header.
    /// Lines are numbered from 1 in iteration order.
    pub fn from_records<I, P, R, G>(records: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = (P, R, G)>,
        P: AsRef<str>,
        R: AsRef<str>,
        G: AsRef<str>,
    {
        records
            .into_iter()
            .enumerate()
            .map(|(i, (p, r, g))| Rule::compile(p.as_ref(), r.as_ref(), g.as_ref(), i + 1))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
