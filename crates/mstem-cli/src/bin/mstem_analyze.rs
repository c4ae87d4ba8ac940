// mstem-analyze: Analyse words from the command line or stdin.
//
// Prints one result per word. With --json each result is a JSON object on
// its own line.
//
// Usage:
//   mstem-analyze [-r RULES] [-l LEXICON]... [--mode MODE] [--json] [WORD...]

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use mstem::Stemmer;
use mstem_cli::RuleArgs;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Stem,
    Parse,
    Gloss,
    Segment,
    GlossParse,
}

#[derive(Parser)]
#[command(version, about = "Stem, parse, gloss or segment words")]
struct Cli {
    /// Words to analyse; read from stdin (one per line) when absent
    words: Vec<String>,

    /// What to report for each word
    #[arg(short, long, value_enum, default_value_t = Mode::Parse)]
    mode: Mode,

    /// Emit one JSON object per word
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    rules: RuleArgs,
}

fn render(stemmer: &Stemmer, word: &str, mode: Mode, as_json: bool) -> anyhow::Result<String> {
    let line = match (mode, as_json) {
        (Mode::Stem, false) => format!("{word}\t{}", stemmer.stem(word)),
        (Mode::Stem, true) => json!({ "word": word, "stem": stemmer.stem(word) }).to_string(),
        (Mode::Parse | Mode::Gloss, false) => {
            let morphemes = stemmer.parse(word, mode == Mode::Gloss);
            format!("{word}\t{}", morphemes.join(" "))
        }
        (Mode::Parse | Mode::Gloss, true) => {
            let morphemes = stemmer.parse(word, mode == Mode::Gloss);
            json!({ "word": word, "morphemes": morphemes }).to_string()
        }
        (Mode::Segment, false) => {
            let (pre, stem, suf) = stemmer.segment(word).into_tuple();
            format!("{word}\t{pre}\t{stem}\t{suf}")
        }
        (Mode::Segment, true) => {
            let seg = stemmer.segment(word);
            json!({ "word": word, "segmentation": serde_json::to_value(seg)? }).to_string()
        }
        (Mode::GlossParse, false) => {
            let gp = stemmer.gloss_parse(word);
            let tags = gp.glosses.into_iter().collect::<Vec<_>>().join(" ");
            format!("{word}\t{}\t{tags}", gp.stem)
        }
        (Mode::GlossParse, true) => {
            let gp = stemmer.gloss_parse(word);
            json!({ "word": word, "gloss_parse": serde_json::to_value(gp)? }).to_string()
        }
    };
    Ok(line)
}

fn main() -> anyhow::Result<()> {
    mstem_cli::init_tracing();
    let cli = Cli::parse();
    let stemmer = mstem_cli::load_stemmer(&cli.rules)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if cli.words.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            writeln!(out, "{}", render(&stemmer, word, cli.mode, cli.json)?)?;
        }
    } else {
        for word in &cli.words {
            writeln!(out, "{}", render(&stemmer, word, cli.mode, cli.json)?)?;
        }
    }
    out.flush()?;
    Ok(())
}
