// Lexicon: the set of known forms that ends the rewrite loop

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use hashbrown::HashSet;
use mstem_core::text::{nfd, to_nfd};
use tracing::debug;

/// Default field delimiter for lexicon files.
pub const DEFAULT_DELIMITER: char = '\t';

/// Set of known word forms, stored in NFD.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    forms: HashSet<String>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every record of a delimited source.
    ///
    /// Each line is trimmed and split on `delimiter`; only the first field is
    /// kept. Lines whose first field is empty are skipped. Returns the number
    /// of lines that contributed a form (duplicates included).
    pub fn extend_from_reader<R: BufRead>(
        &mut self,
        reader: R,
        delimiter: char,
    ) -> io::Result<usize> {
        let mut added = 0;
        for line in reader.lines() {
            let line = line?;
            let Some(form) = line.trim().split(delimiter).next() else {
                continue;
            };
            if form.is_empty() {
                continue;
            }
            self.insert(form);
            added += 1;
        }
        Ok(added)
    }

    /// Add every record of a delimited file.
    pub fn extend_from_path(&mut self, path: impl AsRef<Path>, delimiter: char) -> io::Result<usize> {
        let path = path.as_ref();
        let added = self.extend_from_reader(BufReader::new(File::open(path)?), delimiter)?;
        debug!(path = %path.display(), records = added, "read lexicon");
        Ok(added)
    }

    /// Build a lexicon from several delimited files, in order.
    pub fn from_paths<I, P>(paths: I, delimiter: char) -> io::Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut lexicon = Self::new();
        for path in paths {
            lexicon.extend_from_path(path, delimiter)?;
        }
        Ok(lexicon)
    }

    /// Insert a form. It is normalized to NFD first.
    pub fn insert(&mut self, form: &str) -> bool {
        self.forms.insert(to_nfd(form))
    }

    /// Whether `form` is a known word, comparing after NFD normalization.
    pub fn contains(&self, form: &str) -> bool {
        self.forms.contains(&*nfd(form))
    }

    /// Membership test for input that is already in NFD.
    #[inline]
    pub fn contains_nfd(&self, form: &str) -> bool {
        self.forms.contains(form)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.forms.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut lexicon = Self::new();
        for form in iter {
            lexicon.insert(form.as_ref());
        }
        lexicon
    }
}

impl<S: AsRef<str>> Extend<S> for Lexicon {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for form in iter {
            self.insert(form.as_ref());
        }
    }
}
