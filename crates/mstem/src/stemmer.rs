// Stemmer: the ordered rewrite loop and its output shapes
//
// Two traversals share one structure (membership check, then rule) but
// differ in substitution scope:
// - `stem` rewrites every occurrence of each pattern and keeps no evidence;
// - `analyze` rewrites only the first occurrence, so that each matched rule
//   accounts for exactly one affix.

use std::borrow::Cow;
use std::path::PathBuf;

use mstem_core::text::{starts_with_class_marker, to_nfd};
use mstem_core::{AffixChain, Analysis, GlossParse, Position, Segmentation, Termination};
use mstem_rules::lexicon::DEFAULT_DELIMITER;
use mstem_rules::{Lexicon, RuleTable};
use tracing::{debug, trace};

use crate::StemmerError;
use crate::source::{RuleSource, SearchPaths};

/// What kind of evidence an analysis records for each matched affix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Evidence {
    /// The literal matched affix text.
    #[default]
    Affixes,
    /// The gloss tags of the rule that matched.
    Glosses,
}

impl From<bool> for Evidence {
    /// `true` selects gloss tags.
    fn from(gloss: bool) -> Self {
        if gloss {
            Evidence::Glosses
        } else {
            Evidence::Affixes
        }
    }
}

/// Stems words that are not in the lexicon.
///
/// Holds an immutable rule table and lexicon; every analysis method takes
/// `&self`, so one stemmer can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Stemmer {
    rules: RuleTable,
    lexicon: Lexicon,
}

impl Stemmer {
    /// Create a stemmer from an already compiled rule table and lexicon.
    pub fn new(rules: RuleTable, lexicon: Lexicon) -> Self {
        debug!(
            rules = rules.len(),
            lexicon = lexicon.len(),
            "stemmer ready"
        );
        Self { rules, lexicon }
    }

    pub fn builder() -> StemmerBuilder {
        StemmerBuilder::default()
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Stem a token until it is in the lexicon or no rules are left.
    ///
    /// Each rule rewrites all non-overlapping occurrences of its pattern.
    /// The form left after the last rule is returned as is: it is neither
    /// re-checked against the lexicon nor re-normalized.
    pub fn stem(&self, token: &str) -> String {
        let mut token = to_nfd(token);
        for rule in &self.rules {
            if self.lexicon.contains_nfd(&token) {
                break;
            }
            if let Some(next) = changed(rule.matcher().replace_all(&token)) {
                trace!(line = rule.line(), from = %token, to = %next, "stem rewrite");
                token = next;
            }
        }
        token
    }

    /// Run the evidence-collecting traversal.
    ///
    /// For every rule, in table order, until the working form is a lexicon
    /// entry: find one occurrence of the pattern; if there is one, record it
    /// (unless the rule is a class rule or the match starts with a class
    /// marker) and rewrite that occurrence only.
    pub fn analyze(&self, token: &str, evidence: impl Into<Evidence>) -> Analysis {
        let evidence = evidence.into();
        let mut token = to_nfd(token);
        let mut chain = AffixChain::new();
        let mut tried = 0;
        let mut termination = Termination::Exhausted;

        for rule in &self.rules {
            if self.lexicon.contains_nfd(&token) {
                termination = Termination::Matched;
                break;
            }
            tried += 1;

            let matcher = rule.matcher();
            let Some(affix) = matcher.find(&token) else {
                continue;
            };

            if !starts_with_class_marker(affix) {
                match (rule.position(), evidence) {
                    (Position::Suffix, Evidence::Affixes) => chain.push_suffix(affix),
                    (Position::Suffix, Evidence::Glosses) => {
                        chain.extend_suffixes(rule.glosses().iter().cloned())
                    }
                    (Position::Prefix, Evidence::Affixes) => chain.push_prefix(affix),
                    (Position::Prefix, Evidence::Glosses) => {
                        chain.extend_prefixes(rule.glosses().iter().cloned())
                    }
                    (Position::Delete, _) => {}
                }
            }

            if let Some(next) = changed(matcher.replace_first(&token)) {
                trace!(line = rule.line(), from = %token, to = %next, "parse rewrite");
                token = next;
            }
        }

        // Reporting only: the residual is never rewritten again.
        if termination == Termination::Exhausted && self.lexicon.contains_nfd(&token) {
            termination = Termination::Matched;
        }

        Analysis::new(chain, token, termination, tried)
    }

    /// Prefixes, stem and suffixes in word order. With `gloss` set, the
    /// affixes are replaced by their gloss tags.
    pub fn parse(&self, token: &str, gloss: bool) -> Vec<String> {
        self.analyze(token, gloss).into_morphemes()
    }

    /// The stem and the set of gloss tags collected on the way.
    pub fn gloss_parse(&self, token: &str) -> GlossParse {
        self.analyze(token, Evidence::Glosses).into_gloss_parse()
    }

    /// Prefix block, stem and suffix block, always as literal affix text.
    pub fn segment(&self, token: &str) -> Segmentation {
        self.analyze(token, Evidence::Affixes).into_segmentation()
    }

    /// Gloss tags of the prefixes, the stem, then gloss tags of the suffixes.
    pub fn gloss(&self, token: &str) -> Vec<String> {
        self.parse(token, true)
    }
}

/// The new string if the substitution changed anything.
fn changed(result: Cow<'_, str>) -> Option<String> {
    match result {
        Cow::Borrowed(_) => None,
        Cow::Owned(s) => Some(s),
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Loading options.
#[derive(Debug, Clone)]
pub struct StemmerOptions {
    /// Field delimiter of lexicon files. Default: tab.
    pub delimiter: char,
    /// Directories searched for `<name>.tsv` rule files, in order.
    pub rule_dirs: Vec<PathBuf>,
    /// Also search the directory named by `MSTEM_RULES_DIR`. Default: true.
    pub use_env_rules_dir: bool,
    /// Fall back to the rule sets compiled into this library. Default: true.
    pub use_bundled_rules: bool,
}

impl Default for StemmerOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            rule_dirs: Vec::new(),
            use_env_rules_dir: true,
            use_bundled_rules: true,
        }
    }
}

enum RuleSpec {
    Named(String),
    Table(RuleTable),
}

/// Builder that resolves a rule source, reads lexicons and returns a
/// [`Stemmer`]. Without any rules the stemmer has an empty table and
/// returns every token in NFD unchanged.
#[derive(Default)]
pub struct StemmerBuilder {
    rules: Option<RuleSpec>,
    resolver: Option<Box<dyn RuleSource>>,
    lexicon_paths: Vec<PathBuf>,
    forms: Vec<String>,
    options: StemmerOptions,
}

impl StemmerBuilder {
    /// Use the rule set with this name or path.
    pub fn rules(mut self, name: impl Into<String>) -> Self {
        self.rules = Some(RuleSpec::Named(name.into()));
        self
    }

    /// Use an already compiled rule table.
    pub fn rule_table(mut self, table: RuleTable) -> Self {
        self.rules = Some(RuleSpec::Table(table));
        self
    }

    /// Resolve named rules through `resolver` instead of the search paths.
    pub fn resolver(mut self, resolver: impl RuleSource + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Add a lexicon file.
    pub fn lexicon(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon_paths.push(path.into());
        self
    }

    /// Add several lexicon files.
    pub fn lexicons<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.lexicon_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Add known forms directly.
    pub fn forms<I, S>(mut self, forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forms.extend(forms.into_iter().map(Into::into));
        self
    }

    /// Set the lexicon field delimiter.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.options.delimiter = delimiter;
        self
    }

    /// Add a directory to search for `<name>.tsv` rule files.
    pub fn rule_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.rule_dirs.push(dir.into());
        self
    }

    pub fn options(mut self, options: StemmerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Result<Stemmer, StemmerError> {
        let rules = match self.rules {
            None => RuleTable::default(),
            Some(RuleSpec::Table(table)) => table,
            Some(RuleSpec::Named(name)) => match &self.resolver {
                Some(resolver) => resolver.load(&name)?,
                None => SearchPaths::from_options(&self.options).load(&name)?,
            },
        };

        let mut lexicon = Lexicon::new();
        for path in &self.lexicon_paths {
            lexicon
                .extend_from_path(path, self.options.delimiter)
                .map_err(|source| StemmerError::LexiconIo {
                    path: path.clone(),
                    source,
                })?;
        }
        lexicon.extend(&self.forms);

        Ok(Stemmer::new(rules, lexicon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stemmer(rules: &[(&str, &str, &str)], forms: &[&str]) -> Stemmer {
        Stemmer::new(
            RuleTable::from_records(rules.iter().copied()).unwrap(),
            forms.iter().collect(),
        )
    }

    #[test]
    fn suffixes_nearest_the_stem_come_first() {
        let s = stemmer(&[("s$", "", "PL"), ("ed$", "", "PST")], &["walk"]);
        assert_eq!(s.parse("walkeds", false), ["walk", "ed", "s"]);
        assert_eq!(s.gloss("walkeds"), ["walk", "PST", "PL"]);
    }

    #[test]
    fn prefixes_nearest_the_stem_come_last() {
        let s = stemmer(&[("^re", "", "ITER"), ("^un", "", "NEG")], &["do"]);
        assert_eq!(s.parse("reundo", false), ["re", "un", "do"]);
        assert_eq!(s.gloss("reundo"), ["ITER", "NEG", "do"]);
    }

    #[test]
    fn multi_tag_suffix_keeps_tag_order() {
        let s = stemmer(&[("s$", "", "3SG.PRS"), ("ed$", "", "PST")], &["walk"]);
        assert_eq!(s.gloss("walkeds"), ["walk", "PST", "3SG", "PRS"]);
    }

    #[test]
    fn lexicon_hit_stops_before_later_rules() {
        let s = stemmer(&[("^un", "", "NEG"), ("^un", "X", "OTHER")], &["happy"]);
        assert_eq!(s.stem("unhappy"), "happy");
        let a = s.analyze("unhappy", false);
        assert_eq!(a.stem, "happy");
        assert_eq!(a.prefixes, ["un"]);
        assert_eq!(a.termination, Termination::Matched);
        assert_eq!(a.rules_tried, 1);
    }

    #[test]
    fn class_marker_with_digit_is_rewritten_and_not_reported() {
        let s = stemmer(&[("an$", "{{C1}}", "LV"), ("{{C1}}", "", "")], &["sulat"]);
        assert_eq!(s.stem("sulatan"), "sulat");
        assert_eq!(s.parse("sulatan", false), ["sulat", "an"]);
        assert_eq!(s.gloss("sulatan"), ["sulat", "LV"]);
        assert_eq!(s.analyze("sulatan", false).termination, Termination::Matched);
    }

    #[test]
    fn mixed_case_class_marker_is_rewritten() {
        let s = stemmer(&[("^um", "{{Vowel}}", "AV"), ("{{Vowel}}", "i", "")], &["ibig"]);
        assert_eq!(s.stem("umbig"), "ibig");
        assert_eq!(s.parse("umbig", false), ["um", "ibig"]);
        assert_eq!(s.gloss("umbig"), ["AV", "ibig"]);
    }

    #[test]
    fn stem_rewrites_every_occurrence_analyze_only_the_first() {
        // The alternation lets an end-anchored rule match mid-word.
        let s = stemmer(&[("a|x$", "o", "X")], &[]);
        assert_eq!(s.stem("banana"), "bonono");
        assert_eq!(s.analyze("banana", false).stem, "bonana");
    }

    #[test]
    fn class_rule_rewrites_every_marker_when_stemming() {
        let s = stemmer(&[("{{V}}", "a", "")], &[]);
        assert_eq!(s.stem("t{{V}}p{{V}}s"), "tapas");
    }

    #[test]
    fn parse_rewrites_only_first_occurrence() {
        let s = stemmer(&[("{{V}}", "a", "")], &[]);
        assert_eq!(s.parse("t{{V}}p{{V}}s", false), ["tap{{V}}s"]);
    }

    #[test]
    fn class_rules_leave_no_evidence() {
        let s = stemmer(&[("an$", "{{N}}", "LV"), ("{{N}}", "", "")], &["sulat"]);
        let a = s.analyze("sulatan", false);
        assert_eq!(a.stem, "sulat");
        assert_eq!(a.suffixes, ["an"]);
    }

    #[test]
    fn matches_starting_with_class_marker_leave_no_evidence() {
        let s = stemmer(&[("{{N}}an$", "", "LV")], &["sulat"]);
        let a = s.analyze("sulat{{N}}an", true);
        assert_eq!(a.stem, "sulat");
        assert!(a.suffixes.is_empty());
    }

    #[test]
    fn unmatched_rules_leave_no_evidence() {
        let s = stemmer(&[("ing$", "", "PROG"), ("s$", "", "PL")], &["cat"]);
        assert_eq!(s.parse("cats", false), ["cat", "s"]);
    }

    #[test]
    fn segment_concatenates_literal_affixes() {
        let s = stemmer(
            &[("^re", "", "ITER"), ("s$", "", "PL"), ("ed$", "", "PST")],
            &["walk"],
        );
        let seg = s.segment("rewalkeds");
        assert_eq!(seg.into_tuple(), ("re".into(), "walk".into(), "eds".into()));
    }

    #[test]
    fn gloss_parse_collapses_tags() {
        let s = stemmer(&[("s$", "", "PL"), ("es$", "", "PL")], &["box"]);
        let gp = s.gloss_parse("boxess");
        assert_eq!(gp.stem, "box");
        assert_eq!(gp.glosses.iter().collect::<Vec<_>>(), ["PL"]);
    }

    #[test]
    fn exhausted_returns_residual() {
        let s = stemmer(&[("s$", "", "PL")], &[]);
        let a = s.analyze("cats", false);
        assert_eq!(a.stem, "cat");
        assert_eq!(a.termination, Termination::Exhausted);
        assert_eq!(a.rules_tried, 1);
    }

    #[test]
    fn residual_matching_after_last_rule_reports_matched() {
        let s = stemmer(&[("s$", "", "PL")], &["cat"]);
        let a = s.analyze("cats", false);
        assert_eq!(a.stem, "cat");
        assert!(a.is_lexical());
    }

    #[test]
    fn evidence_from_bool() {
        assert_eq!(Evidence::from(true), Evidence::Glosses);
        assert_eq!(Evidence::from(false), Evidence::Affixes);
    }

    #[test]
    fn builder_without_rules_is_identity_on_nfd() {
        let s = Stemmer::builder().build().unwrap();
        assert!(s.rules().is_empty());
        assert_eq!(s.stem("caf\u{00E9}"), "cafe\u{0301}");
    }

    #[test]
    fn builder_reports_missing_lexicon() {
        let err = Stemmer::builder()
            .lexicon("/nonexistent/lexicon.tsv")
            .build()
            .unwrap_err();
        assert!(matches!(err, StemmerError::LexiconIo { .. }));
    }

    #[test]
    fn stemmer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Stemmer>();
    }
}
