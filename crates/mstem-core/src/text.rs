// Text utilities: canonical decomposition and class markers
//
// Every string that takes part in matching (rule patterns, replacements,
// lexicon entries, input tokens) is brought to NFD first, so a precomposed
// character and its base + combining mark spelling compare equal.

use std::borrow::Cow;

use unicode_normalization::{IsNormalized, UnicodeNormalization, is_nfd_quick};

/// Opening delimiter of a `{{CLASS}}` marker.
pub const CLASS_OPEN: &str = "{{";

/// Closing delimiter of a `{{CLASS}}` marker.
pub const CLASS_CLOSE: &str = "}}";

/// Normalize `s` to canonical decomposed form (NFD).
///
/// Borrows when the input is already known to be in NFD.
pub fn nfd(s: &str) -> Cow<'_, str> {
    match is_nfd_quick(s.chars()) {
        IsNormalized::Yes => Cow::Borrowed(s),
        _ => Cow::Owned(s.nfd().collect()),
    }
}

/// Normalize `s` to NFD, always returning an owned string.
pub fn to_nfd(s: &str) -> String {
    nfd(s).into_owned()
}

/// Byte length of the `{{NAME}}` marker at the start of `s`, if any.
///
/// `NAME` is one or more characters other than `{` and `}`.
pub fn class_marker_len(s: &str) -> Option<usize> {
    let rest = s.strip_prefix(CLASS_OPEN)?;
    let name_len = rest.find(['{', '}']).unwrap_or(rest.len());
    if name_len == 0 {
        return None;
    }
    rest[name_len..]
        .starts_with(CLASS_CLOSE)
        .then_some(CLASS_OPEN.len() + name_len + CLASS_CLOSE.len())
}

/// Whether `s` begins with a `{{NAME}}` class marker.
///
/// Affix text that starts with a marker is an abstract placeholder, not a
/// surface affix, and is never reported as evidence.
pub fn starts_with_class_marker(s: &str) -> bool {
    class_marker_len(s).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nfd_decomposes_precomposed() {
        // U+00E9 LATIN SMALL LETTER E WITH ACUTE
        assert_eq!(to_nfd("caf\u{00E9}"), "cafe\u{0301}");
    }

    #[test]
    fn nfd_borrows_ascii() {
        assert!(matches!(nfd("walk"), Cow::Borrowed("walk")));
    }

    #[test]
    fn nfd_is_stable_on_decomposed() {
        let decomposed = "cafe\u{0301}";
        assert_eq!(to_nfd(decomposed), decomposed);
    }

    #[test]
    fn nfd_reorders_combining_marks() {
        // dot below (ccc 220) sorts before acute (ccc 230)
        assert_eq!(to_nfd("a\u{0301}\u{0323}"), "a\u{0323}\u{0301}");
    }

    #[test]
    fn class_marker_detected() {
        assert_eq!(class_marker_len("{{V}}"), Some(5));
        assert_eq!(class_marker_len("{{CV}}an"), Some(6));
        assert!(starts_with_class_marker("{{NAS}}"));
    }

    #[test]
    fn class_marker_names_are_not_restricted_to_uppercase() {
        assert_eq!(class_marker_len("{{C1}}"), Some(6));
        assert_eq!(class_marker_len("{{Vowel}}an"), Some(9));
        assert!(starts_with_class_marker("{{v}}"));
    }

    #[test]
    fn class_marker_rejects_empty_and_unclosed() {
        assert_eq!(class_marker_len("{{}}"), None);
        assert_eq!(class_marker_len("{{{V}}}"), None);
        assert_eq!(class_marker_len("{{V}"), None);
        assert_eq!(class_marker_len("{{V"), None);
        assert_eq!(class_marker_len("an{{V}}"), None);
        assert_eq!(class_marker_len(""), None);
    }
}
