//! Corpus streaming: lazy line and n-gram iteration over raw text.
//!
//! These helpers feed tokenized lines into downstream n-gram consumers;
//! nothing in the morphology core reads them. Numeric tokens are collapsed
//! to the [NUMBER_TOKEN] sentinel so that "chapter 11" and "chapter 12"
//! produce the same n-gram.
//!
//! # Examples
//!
//! ```
//! use lex_morph::corpus::{stream_ngrams, whitespace_tokenize};
//!
//! let lines = ["the cat sat", "on 2 mats"];
//! let ngrams: Vec<String> = stream_ngrams(lines, 2, whitespace_tokenize).collect();
//! assert_eq!(ngrams, ["the cat", "cat sat", "on *NUM*", "*NUM* mats"]);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// The sentinel substituted for every numeric token.
pub const NUMBER_TOKEN: &str = "*NUM*";

// Runs of word characters (apostrophes included, so "don't" stays whole)
// or single punctuation marks.
static WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w']+|[^\w\s]").expect("Could not parse word regex"));

/// Splits a line on whitespace. The default tokenizer for pre-tokenized
/// corpus files.
pub fn whitespace_tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Splits a line into words and individual punctuation marks, so "Stop."
/// becomes `["Stop", "."]`. A rough stand-in for an external NLP tokenizer
/// on corpora that are not pre-tokenized.
pub fn word_tokenize(line: &str) -> Vec<String> {
    WORD_REGEX
        .find_iter(line)
        .map(|m| m.as_str().to_string())
        .collect()
}

// Anything that parses as a float counts as numeric, so "11", "-4.5", and
// "2e10" all collapse to the sentinel.
fn normalize_number(token: String) -> String {
    if token.parse::<f64>().is_ok() {
        NUMBER_TOKEN.to_string()
    } else {
        token
    }
}

/// Lazily yields the trimmed lines of a text file. Read errors after a
/// successful open surface as `Err` items.
pub fn stream_lines(
    path: impl AsRef<Path>,
) -> io::Result<impl Iterator<Item = io::Result<String>>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(reader
        .lines()
        .map(|line| line.map(|l| l.trim().to_string())))
}

/// Lazily yields every `order`-gram of each line's tokens, joined with
/// single spaces, with numeric tokens collapsed to [NUMBER_TOKEN] first.
/// N-grams never cross a line boundary; a line with fewer than `order`
/// tokens yields nothing, as does an `order` of zero.
pub fn stream_ngrams<I, L, F>(lines: I, order: usize, tokenize: F) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
    F: Fn(&str) -> Vec<String>,
{
    lines.into_iter().flat_map(move |line| {
        let words: Vec<String> = tokenize(line.as_ref())
            .into_iter()
            .map(normalize_number)
            .collect();
        let ngrams: Vec<String> = if order == 0 || words.len() < order {
            vec![]
        } else {
            (0..=words.len() - order)
                .map(|i| words[i..i + order].join(" "))
                .collect()
        };
        ngrams.into_iter()
    })
}
