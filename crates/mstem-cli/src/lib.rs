// mstem-cli: shared utilities for the command-line tools.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use mstem::{Stemmer, StemmerOptions};

/// Rule set used when `--rules` is not given.
pub const DEFAULT_RULES: &str = "tgl-Latn";

/// Options for building a stemmer, shared by every tool.
#[derive(Debug, Clone, Args)]
pub struct RuleArgs {
    /// Rule set name (e.g. tgl-Latn) or path to a rule TSV file
    #[arg(short, long, default_value = DEFAULT_RULES)]
    pub rules: String,

    /// Lexicon file; may be given more than once
    #[arg(short, long = "lexicon", value_name = "FILE")]
    pub lexicons: Vec<PathBuf>,

    /// Field delimiter of lexicon files
    #[arg(long, value_name = "CHAR", default_value = "\\t", value_parser = parse_delimiter)]
    pub lexicon_delimiter: char,

    /// Extra directory searched for <name>.tsv rule files
    #[arg(long = "rules-dir", value_name = "DIR")]
    pub rules_dirs: Vec<PathBuf>,
}

impl RuleArgs {
    pub fn options(&self) -> StemmerOptions {
        StemmerOptions {
            delimiter: self.lexicon_delimiter,
            rule_dirs: self.rules_dirs.clone(),
            ..StemmerOptions::default()
        }
    }
}

/// Build a stemmer from command-line options.
pub fn load_stemmer(args: &RuleArgs) -> anyhow::Result<Stemmer> {
    Stemmer::builder()
        .options(args.options())
        .rules(args.rules.as_str())
        .lexicons(&args.lexicons)
        .build()
        .with_context(|| format!("failed to load stemmer for rules {:?}", args.rules))
}

/// Accept a single character, or one of the escapes `\t`, `tab`, `\s`.
pub fn parse_delimiter(s: &str) -> Result<char, String> {
    match s {
        "\\t" | "tab" => Ok('\t'),
        "\\s" | "space" => Ok(' '),
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(format!("expected a single character, got {s:?}")),
            }
        }
    }
}

/// Accept any non-empty separator string, with the same escapes as
/// [`parse_delimiter`].
pub fn parse_separator(s: &str) -> Result<String, String> {
    match s {
        "" => Err("separator must not be empty".to_string()),
        "\\t" | "tab" => Ok("\t".to_string()),
        "\\s" | "space" => Ok(" ".to_string()),
        _ => Ok(s.to_string()),
    }
}

/// Install a stderr subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
