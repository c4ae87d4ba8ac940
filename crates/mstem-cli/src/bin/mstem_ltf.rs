// mstem-ltf: Stem every TOKEN in a directory of LTF documents.
//
// Each `*.ltf.xml` file in IN_DIR is written under the same name to
// OUT_DIR with the text of its TOKEN elements replaced by their stems.
//
// Usage:
//   mstem-ltf [-r RULES] [-l LEXICON]... IN_DIR OUT_DIR

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mstem_cli::RuleArgs;

#[derive(Parser)]
#[command(version, about = "Stem tokens in LTF documents")]
struct Cli {
    /// Directory where input files are located
    input_dir: PathBuf,

    /// Directory for output files
    output_dir: PathBuf,

    #[command(flatten)]
    rules: RuleArgs,
}

fn main() -> anyhow::Result<()> {
    mstem_cli::init_tracing();
    let cli = Cli::parse();
    let stemmer = mstem_cli::load_stemmer(&cli.rules)?;

    std::fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("failed to create {}", cli.output_dir.display()))?;
    let count = mstem::ltf::stem_dir(&stemmer, &cli.input_dir, &cli.output_dir)
        .with_context(|| format!("failed to stem LTF files in {}", cli.input_dir.display()))?;
    if count == 0 {
        tracing::warn!(dir = %cli.input_dir.display(), "no *.ltf.xml files found");
    }
    Ok(())
}
