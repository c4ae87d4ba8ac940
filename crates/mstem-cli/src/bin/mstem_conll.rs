// mstem-conll: Stem the token column of a CoNLL file.
//
// Replaces the first field of every non-blank line with its stem and writes
// the result to stdout. Blank lines (sentence breaks) are kept.
//
// Usage:
//   mstem-conll [-r RULES] [-l LEXICON]... [-d DELIM] INPUT

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mstem_cli::RuleArgs;

#[derive(Parser)]
#[command(version, about = "Stem tokens in a CoNLL file, writing the result to stdout")]
struct Cli {
    /// Input file (CoNLL)
    input: PathBuf,

    /// Field delimiter of the CoNLL file; any non-empty string
    #[arg(short, long, value_name = "SEP", default_value = "\\t", value_parser = mstem_cli::parse_separator)]
    delimiter: String,

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
    let out = io::BufWriter::new(stdout.lock());

    let tokens = mstem::conll::stem_conll(&stemmer, BufReader::new(file), out, &cli.delimiter)
        .with_context(|| format!("failed to stem {}", cli.input.display()))?;
    tracing::debug!(tokens, "done");
    Ok(())
}
