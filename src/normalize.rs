// File: src/normalize.rs
//! Text cleanup and splitting ahead of syllabification.

use crate::core::alphabet::{
    anunasika, in_alphabet, is_vargiya, ANUSWARA, DANDA, DIGITS, DOUBLE_DANDA,
    GENERAL_PUNCTUATION, HALANTA, PUNCTUATION, SPACES,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which character classes survive [`clean`] besides the alphabet itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    pub punctuation: bool,
    pub digits: bool,
    pub spaces: bool,
    /// Extra characters to keep verbatim.
    pub allow: BTreeSet<char>,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            punctuation: false,
            digits: false,
            spaces: true,
            allow: BTreeSet::new(),
        }
    }
}

impl CleanOptions {
    /// Options for cleaning a single word: nothing but the alphabet.
    pub fn word() -> Self {
        Self {
            spaces: false,
            ..Self::default()
        }
    }

    fn keeps(&self, c: char) -> bool {
        in_alphabet(c)
            || (self.punctuation && (PUNCTUATION.contains(&c) || GENERAL_PUNCTUATION.contains(&c)))
            || (self.digits && DIGITS.contains(&c))
            || (self.spaces && SPACES.contains(&c))
            || self.allow.contains(&c)
    }
}

/// Restricts `text` to the alphabet plus the classes enabled in `options`.
///
/// Whitespace inside a line collapses to a single space, lines are trimmed
/// and empty lines are dropped.
pub fn clean(text: &str, options: &CleanOptions) -> String {
    let kept: String = text.chars().filter(|&c| options.keeps(c)).collect();
    if !options.spaces {
        return kept;
    }
    kept.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits text into lines at dandas and line breaks.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split(|c| matches!(c, DANDA | DOUBLE_DANDA | '\r' | '\n'))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

pub fn split_words(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Cleaned words of `text`, grouped by line. Words that clean to nothing
/// are skipped, as are lines left without words.
pub fn lines_of_words(text: &str) -> Vec<Vec<String>> {
    let options = CleanOptions::word();
    split_lines(text)
        .into_iter()
        .map(|line| {
            split_words(line)
                .into_iter()
                .map(|word| clean(word, &options))
                .filter(|word| !word.is_empty())
                .collect::<Vec<_>>()
        })
        .filter(|words| !words.is_empty())
        .collect()
}

/// Rewrites an anusvara before a stop consonant as the nasal of that
/// consonant's varga, e.g. `कंकि` to `कङ्कि`.
pub fn fix_anuswara(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek().copied()) {
            (ANUSWARA, Some(next)) if is_vargiya(next) => {
                if let Some(nasal) = anunasika(next) {
                    out.push(nasal);
                    out.push(HALANTA);
                }
            }
            _ => out.push(c),
        }
    }
    out
}
