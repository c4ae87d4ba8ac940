// Rule source resolution
//
// The stemmer never touches the file system itself. A `RuleSource` turns a
// rule set name into a compiled table once, at construction time.

use std::path::{Path, PathBuf};

use mstem_rules::RuleTable;
use tracing::debug;

use crate::StemmerError;
use crate::stemmer::StemmerOptions;

/// Environment variable naming an extra directory of `<name>.tsv` rule files.
pub const RULES_DIR_ENV: &str = "MSTEM_RULES_DIR";

/// File extension of rule sets.
pub const RULES_EXTENSION: &str = "tsv";

/// Something that can produce a compiled rule table from a name.
pub trait RuleSource {
    fn load(&self, name: &str) -> Result<RuleTable, StemmerError>;
}

impl<F> RuleSource for F
where
    F: Fn(&str) -> Result<RuleTable, StemmerError>,
{
    fn load(&self, name: &str) -> Result<RuleTable, StemmerError> {
        self(name)
    }
}

/// Default resolver.
///
/// Search order:
/// 1. `name` itself, if it is an existing file
/// 2. `<dir>/<name>.tsv` for every configured directory
/// 3. `$MSTEM_RULES_DIR/<name>.tsv`
/// 4. a rule set bundled into this library under `name`
#[derive(Debug, Clone)]
pub struct SearchPaths {
    dirs: Vec<PathBuf>,
    bundled: bool,
}

impl SearchPaths {
    pub fn new() -> Self {
        Self {
            dirs: Vec::new(),
            bundled: true,
        }
    }

    pub fn from_options(options: &StemmerOptions) -> Self {
        let mut dirs = options.rule_dirs.clone();
        if options.use_env_rules_dir {
            if let Ok(dir) = std::env::var(RULES_DIR_ENV) {
                dirs.push(PathBuf::from(dir));
            }
        }
        Self {
            dirs,
            bundled: options.use_bundled_rules,
        }
    }

    /// Add a directory to search, after the ones already present.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dirs.push(dir.into());
        self
    }

    /// Enable or disable the bundled rule sets.
    pub fn with_bundled(mut self, bundled: bool) -> Self {
        self.bundled = bundled;
        self
    }

    /// Candidate files for `name`, in search order.
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        let file_name = format!("{name}.{RULES_EXTENSION}");
        std::iter::once(PathBuf::from(name))
            .chain(self.dirs.iter().map(|dir| dir.join(&file_name)))
            .collect()
    }
}

impl Default for SearchPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSource for SearchPaths {
    fn load(&self, name: &str) -> Result<RuleTable, StemmerError> {
        let candidates = self.candidates(name);
        if let Some(path) = candidates.iter().find(|p| p.is_file()) {
            debug!(path = %path.display(), "loading rules");
            return read_rules(path);
        }
        if self.bundled {
            if let Some(source) = bundled::get(name) {
                debug!(name, "loading bundled rules");
                return Ok(RuleTable::from_tsv(source)?);
            }
        }
        Err(StemmerError::RuleSourceNotFound {
            name: name.to_string(),
            searched: candidates,
        })
    }
}

fn read_rules(path: &Path) -> Result<RuleTable, StemmerError> {
    let text = std::fs::read_to_string(path).map_err(|source| StemmerError::RuleIo {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(RuleTable::from_tsv(&text)?)
}

/// Rule sets compiled into the library.
pub mod bundled {
    const SETS: &[(&str, &str)] = &[("tgl-Latn", include_str!("../rules/tgl-Latn.tsv"))];

    /// TSV source of the bundled rule set `name`.
    pub fn get(name: &str) -> Option<&'static str> {
        SETS.iter().find(|(n, _)| *n == name).map(|(_, src)| *src)
    }

    /// Names of all bundled rule sets.
    pub fn names() -> impl Iterator<Item = &'static str> {
        SETS.iter().map(|(n, _)| *n)
    }
}
