// CoNLL stemming: replace the first column of every token line with its stem

use std::io::{self, BufRead, Write};

use crate::Stemmer;

/// Stem the first field of one CoNLL line.
///
/// Blank lines (sentence breaks) come back empty. Surrounding whitespace is
/// trimmed before splitting; the remaining fields are passed through.
pub fn stem_line(stemmer: &Stemmer, line: &str, delimiter: &str) -> String {
    let line = line.trim();
    if line.is_empty() {
        return String::new();
    }
    let mut fields = line.split(delimiter);
    let first = fields.next().unwrap_or_default();
    std::iter::once(stemmer.stem(first))
        .chain(fields.map(str::to_string))
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Stem every line of `input`, writing one line per input line to `output`.
///
/// Returns the number of token lines (non-blank lines) processed.
pub fn stem_conll<R: BufRead, W: Write>(
    stemmer: &Stemmer,
    input: R,
    mut output: W,
    delimiter: &str,
) -> io::Result<usize> {
    let mut tokens = 0;
    for line in input.lines() {
        let line = line?;
        let stemmed = stem_line(stemmer, &line, delimiter);
        if !stemmed.is_empty() {
            tokens += 1;
        }
        writeln!(output, "{stemmed}")?;
    }
    output.flush()?;
    Ok(tokens)
}
