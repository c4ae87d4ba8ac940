// Criterion benchmarks for the rewrite loop.
//
// Uses the bundled tgl-Latn rules and a small synthetic lexicon, so no
// external data is needed.
//
// Run:
//   cargo bench -p mstem

use criterion::{Criterion, criterion_group, criterion_main};
use mstem::Stemmer;

const WORDS: &[&str] = &[
    "sumulat", "tinapos", "pagsulatan", "nagluto", "kumain", "binasa", "magsulat", "ipagluto",
    "sulatan", "lutuin", "basahin", "tawagan", "sulat", "luto", "kain", "basa",
];

const LEXICON: &[&str] = &["sulat", "tapos", "luto", "kain", "basa", "tawag"];

fn stemmer() -> Stemmer {
    Stemmer::builder()
        .rules("tgl-Latn")
        .forms(LEXICON.iter().copied())
        .build()
        .expect("bundled rules")
}

fn bench_stem(c: &mut Criterion) {
    let s = stemmer();
    c.bench_function("stem_16_words", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(s.stem(word));
            }
        });
    });
}

fn bench_parse(c: &mut Criterion) {
    let s = stemmer();
    c.bench_function("parse_16_words", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(s.parse(word, false));
            }
        });
    });
}

fn bench_gloss_parse(c: &mut Criterion) {
    let s = stemmer();
    c.bench_function("gloss_parse_16_words", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(s.gloss_parse(word));
            }
        });
    });
}

criterion_group!(benches, bench_stem, bench_parse, bench_gloss_parse);
criterion_main!(benches);
