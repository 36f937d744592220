//! Golden-vector tests: exact output strings for a fixed battery of
//! (seed, options) pairs.
//!
//! The vectors live in `tests/golden/vectors.json`. Each entry holds the
//! options document, the raw word before post-processing and the finished
//! word. Output depends on the exact digest byte layout and on the order of
//! state updates, so any drift here means generated identifiers changed.
//!
//! Run: cargo test -p phonetic-gen --test golden

use std::path::PathBuf;

use phonetic_gen::tables::table;
use phonetic_gen::{Generator, Options};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Golden file loading
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GoldenFile {
    vectors: Vec<GoldenVector>,
}

#[derive(Debug, Deserialize)]
struct GoldenVector {
    options: Options,
    raw: String,
    word: String,
}

fn load_golden() -> GoldenFile {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/vectors.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_file_is_seeded() {
    let golden = load_golden();
    assert!(!golden.vectors.is_empty());
    for vector in &golden.vectors {
        assert!(
            vector.options.seed.is_some(),
            "golden vector without a seed: {:?}",
            vector.options
        );
    }
}

#[test]
fn words_match_golden() {
    let generator = Generator::new();
    let mut mismatches = Vec::new();

    for vector in load_golden().vectors {
        let word = generator
            .generate(&vector.options)
            .unwrap_or_else(|e| panic!("generation failed for {:?}: {}", vector.options, e));
        if word != vector.word {
            mismatches.push(format!(
                "{:?}: expected {:?}, got {:?}",
                vector.options, vector.word, word
            ));
        }
    }

    assert!(
        mismatches.is_empty(),
        "{} golden mismatches:\n{}",
        mismatches.len(),
        mismatches.join("\n")
    );
}

#[test]
fn raw_words_match_golden() {
    let generator = Generator::new();

    for vector in load_golden().vectors {
        let traced = generator.trace(&vector.options).unwrap();
        assert_eq!(traced.raw, vector.raw, "raw word for {:?}", vector.options);

        // The raw word is fully explained by table entries.
        let joined: String = traced.fragments.iter().map(|f| f.text).collect();
        assert_eq!(joined, traced.raw);
        for fragment in &traced.fragments {
            assert_eq!(table(fragment.slot).get(fragment.index), Some(fragment.text));
        }
    }
}

#[test]
fn golden_words_via_json_documents() {
    let generator = Generator::new();

    for vector in load_golden().vectors {
        let document = serde_json::to_string(&vector.options).unwrap();
        assert_eq!(generator.generate_json(&document).unwrap(), vector.word);
    }
}
