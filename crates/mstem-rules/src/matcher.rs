// Compiled rule pattern with two substitution modes
//
// Rule files use backslash group references in replacements (`\1`,
// `\g<name>`) and treat any brace that does not form a counted repetition,
// `{{NAME}}` class markers included, as literal text. Both are translated
// into `regex` syntax once, when the matcher is built.

use std::borrow::Cow;

use regex::Regex;

/// A compiled pattern together with its replacement template.
///
/// Substitution scope is an explicit choice at every call site:
/// [`Matcher::replace_first`] rewrites one occurrence,
/// [`Matcher::replace_all`] rewrites every non-overlapping occurrence.
#[derive(Debug, Clone)]
pub struct Matcher {
    source: String,
    regex: Regex,
    replacement: String,
}

impl Matcher {
    /// Compile `pattern` and translate `replacement` into expansion syntax.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&translate_pattern(pattern))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
            replacement: translate_replacement(replacement),
        })
    }

    /// The pattern as written in the rule source.
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// The replacement template in `regex` expansion syntax.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The literal text of the leftmost match, if any.
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex.find(text).map(|m| m.as_str())
    }

    /// Substitute the leftmost occurrence only.
    pub fn replace_first<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.regex.replacen(text, 1, self.replacement.as_str())
    }

    /// Substitute every non-overlapping occurrence.
    pub fn replace_all<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.regex.replace_all(text, self.replacement.as_str())
    }
}

/// Rewrite brace syntax into something the `regex` crate reads the same way.
///
/// A `{` only opens a counted repetition when it is followed by `n}`,
/// `n,}`, `,m}` or `n,m}`; a missing lower bound means zero. Every other
/// brace, including the ones of a `{{NAME}}` class marker, is a literal and
/// gets escaped. Backslash escapes are copied as written.
pub fn translate_pattern(pattern: &str) -> Cow<'_, str> {
    if !pattern.contains(['{', '}']) {
        return Cow::Borrowed(pattern);
    }
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;
    while let Some(ch) = rest.chars().next() {
        match ch {
            '\\' => {
                let len = 1 + rest[1..].chars().next().map_or(0, char::len_utf8);
                out.push_str(&rest[..len]);
                rest = &rest[len..];
            }
            '{' => match repetition(&rest[1..]) {
                Some((lo, hi, len)) => {
                    out.push('{');
                    out.push_str(if lo.is_empty() { "0" } else { lo });
                    if let Some(hi) = hi {
                        out.push(',');
                        out.push_str(hi);
                    }
                    out.push('}');
                    rest = &rest[1 + len..];
                }
                None => {
                    out.push_str("\\{");
                    rest = &rest[1..];
                }
            },
            '}' => {
                out.push_str("\\}");
                rest = &rest[1..];
            }
            _ => {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }
    Cow::Owned(out)
}

/// Bounds of a counted repetition whose `{` was just consumed.
///
/// Returns the lower bound digits, the upper bound digits when a comma is
/// present, and the byte length up to and including the closing `}`.
fn repetition(s: &str) -> Option<(&str, Option<&str>, usize)> {
    let digits = |t: &str| t.bytes().take_while(u8::is_ascii_digit).count();
    let lo_len = digits(s);
    let lo = &s[..lo_len];
    let after = &s[lo_len..];
    let (hi, used) = match after.strip_prefix(',') {
        Some(tail) => {
            let hi_len = digits(tail);
            (Some(&tail[..hi_len]), lo_len + 1 + hi_len)
        }
        None if lo.is_empty() => return None,
        None => (None, lo_len),
    };
    s[used..].starts_with('}').then_some((lo, hi, used + 1))
}

/// Rewrite a backslash-style replacement template into `regex` syntax.
///
/// - `\1` .. `\99` and `\g<N>` / `\g<name>` become `${N}` / `${name}`
/// - `\\`, `\n`, `\t` become the literal character
/// - a literal `$` becomes `$$`
///
/// Any other backslash is kept as written.
pub fn translate_replacement(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '$' => out.push_str("$$"),
            '\\' => match chars.peek().copied() {
                Some(d) if d.is_ascii_digit() => {
                    let mut group = String::new();
                    while group.len() < 2 {
                        match chars.peek() {
                            Some(d) if d.is_ascii_digit() => {
                                group.push(*d);
                                chars.next();
                            }
                            _ => break,
                        }
                    }
                    out.push_str("${");
                    out.push_str(&group);
                    out.push('}');
                }
                Some('g') => {
                    let mut lookahead = chars.clone();
                    lookahead.next();
                    match named_group(&mut lookahead) {
                        Some(name) => {
                            out.push_str("${");
                            out.push_str(&name);
                            out.push('}');
                            chars = lookahead;
                        }
                        None => out.push('\\'),
                    }
                }
                Some('\\') => {
                    chars.next();
                    out.push('\\');
                }
                Some('n') => {
                    chars.next();
                    out.push('\n');
                }
                Some('t') => {
                    chars.next();
                    out.push('\t');
                }
                _ => out.push('\\'),
            },
            _ => out.push(c),
        }
    }
    out
}

/// Parse `<name>` from the iterator, returning the name on success.
fn named_group<I: Iterator<Item = char>>(chars: &mut I) -> Option<String> {
    if chars.next()? != '<' {
        return None;
    }
    let mut name = String::new();
    for c in chars.by_ref() {
        if c == '>' {
            return (!name.is_empty()).then_some(name);
        }
        if !(c.is_alphanumeric() || c == '_') {
            return None;
        }
        name.push(c);
    }
    None
}
