// mstem-morph: Morphological annotation of running text.
//
// For every space-separated token prints `w:TOKEN~l:STEM~m:TAGS`, where
// TAGS are the affix glosses joined by `+`. A blank line follows each input
// line.
//
// Usage:
//   mstem-morph [-r RULES] [-l LEXICON]... FILE

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mstem::annotate::annotate_line;
use mstem_cli::RuleArgs;

#[derive(Parser)]
#[command(version, about = "Annotate each token of a text file with its stem and affix glosses")]
struct Cli {
    /// Input text file
    input: PathBuf,

    #[command(flatten)]
    rules: RuleArgs,
}

fn main() -> anyhow::Result<()> {
    mstem_cli::init_tracing();
    let cli = Cli::parse();
    let stemmer = mstem_cli::load_stemmer(&cli.rules)?;

    let file = File::open(&cli.input)
        .with_context(|| format!("failed to open {}", cli.input.display()))?;
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("failed to read {}", cli.input.display()))?;
        for annotation in annotate_line(&stemmer, &line) {
            writeln!(out, "{annotation}")?;
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
