// Affix position of a rewrite rule

use crate::text::{CLASS_CLOSE, CLASS_OPEN};

/// Where a rule's pattern sits in the word, decided once from its anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Position {
    /// Anchored at the start of the word (`^...`).
    Prefix,
    /// Anchored at the end of the word (`...$`).
    Suffix,
    /// A `{{CLASS}}` placeholder rule. It rewrites an abstract class marker
    /// and never surfaces as an affix.
    Delete,
}

impl Position {
    /// Classify a pattern by its anchors.
    ///
    /// Checked in order: wrapped in `{{` ... `}}` is [`Position::Delete`],
    /// leading `^` is [`Position::Prefix`], trailing `$` is
    /// [`Position::Suffix`]. Returns `None` when no anchor is present.
    pub fn classify(pattern: &str) -> Option<Self> {
        if pattern.len() >= CLASS_OPEN.len() + CLASS_CLOSE.len()
            && pattern.starts_with(CLASS_OPEN)
            && pattern.ends_with(CLASS_CLOSE)
        {
            Some(Position::Delete)
        } else if pattern.starts_with('^') {
            Some(Position::Prefix)
        } else if pattern.ends_with('$') {
            Some(Position::Suffix)
        } else {
            None
        }
    }

    /// Whether a match of this rule is recorded as affix evidence.
    pub fn surfaces(self) -> bool {
        !matches!(self, Position::Delete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_prefix() {
        assert_eq!(Position::classify("^un"), Some(Position::Prefix));
        assert_eq!(Position::classify("^([^aeiou])um"), Some(Position::Prefix));
    }

    #[test]
    fn classify_suffix() {
        assert_eq!(Position::classify("ed$"), Some(Position::Suffix));
    }

    #[test]
    fn classify_delete() {
        assert_eq!(Position::classify("{{V}}"), Some(Position::Delete));
    }

    #[test]
    fn delete_wins_over_anchors() {
        // The class check runs first, mirroring the load order of the table.
        assert_eq!(Position::classify("{{^V$}}"), Some(Position::Delete));
    }

    #[test]
    fn prefix_wins_over_suffix() {
        assert_eq!(Position::classify("^un$"), Some(Position::Prefix));
    }

    #[test]
    fn unanchored_is_rejected() {
        assert_eq!(Position::classify("happy"), None);
        assert_eq!(Position::classify(""), None);
        assert_eq!(Position::classify("{{V"), None);
    }

    #[test]
    fn delete_does_not_surface() {
        assert!(Position::Prefix.surfaces());
        assert!(Position::Suffix.surfaces());
        assert!(!Position::Delete.surfaces());
    }
}
