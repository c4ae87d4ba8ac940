//! Bundled Tagalog rules and file-backed construction.

use std::io::Write;

use mstem::{Stemmer, StemmerError, StemmerOptions};

fn tagalog() -> Stemmer {
    Stemmer::builder().rules("tgl-Latn").build().unwrap()
}

#[test]
fn infix_um() {
    assert_eq!(tagalog().stem("sumulat"), "sulat");
}

#[test]
fn infix_in() {
    assert_eq!(tagalog().stem("tinapos"), "tapos");
}

#[test]
fn prefix_and_suffix_with_lexicon() {
    let s = Stemmer::builder()
        .rules("tgl-Latn")
        .forms(["sulat"])
        .build()
        .unwrap();
    assert_eq!(s.parse("pagsulatan", false), ["pag", "sulat", "an"]);
    assert_eq!(s.gloss("pagsulatan"), ["NMLZ", "sulat", "LV"]);
    let seg = s.segment("pagsulatan");
    assert_eq!(seg.into_tuple(), ("pag".into(), "sulat".into(), "an".into()));
}

#[test]
fn infix_reported_as_prefix_material() {
    let s = Stemmer::builder()
        .rules("tgl-Latn")
        .forms(["sulat"])
        .build()
        .unwrap();
    // The whole match, onset included, is the recorded affix.
    assert_eq!(s.parse("sumulat", false), ["sum", "sulat"]);
    let gp = s.gloss_parse("sumulat");
    assert_eq!(gp.stem, "sulat");
    assert!(gp.glosses.contains("AV"));
}

#[test]
fn multi_tag_prefix_gloss() {
    let s = Stemmer::builder()
        .rules("tgl-Latn")
        .forms(["luto"])
        .build()
        .unwrap();
    assert_eq!(s.gloss("nagluto"), ["AV", "PFV", "luto"]);
}

#[test]
fn lexicon_files_and_delimiter() {
    let mut lex = tempfile::NamedTempFile::new().unwrap();
    writeln!(lex, "sulat,write").unwrap();
    writeln!(lex, "tapos,finish").unwrap();

    let s = Stemmer::builder()
        .rules("tgl-Latn")
        .lexicon(lex.path())
        .delimiter(',')
        .build()
        .unwrap();
    assert!(s.lexicon().contains("sulat"));
    assert_eq!(s.stem("sulatan"), "sulat");
}

#[test]
fn rule_directory_is_searched() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("eng-Latn.tsv"),
        "pattern\treplacement\tgloss\nings$\t\tPROG.PL\ning$\t\tPROG\n",
    )
    .unwrap();

    let s = Stemmer::builder()
        .rule_dir(dir.path())
        .rules("eng-Latn")
        .forms(["build"])
        .build()
        .unwrap();
    assert_eq!(s.gloss("buildings"), ["build", "PROG", "PL"]);
}

#[test]
fn unknown_rule_set_fails() {
    let options = StemmerOptions {
        use_env_rules_dir: false,
        ..StemmerOptions::default()
    };
    let err = Stemmer::builder()
        .options(options)
        .rules("no-such-rules")
        .build()
        .unwrap_err();
    assert!(matches!(err, StemmerError::RuleSourceNotFound { .. }));
    assert!(err.to_string().contains("no-such-rules"));
}
