// File: src/core/engine.rs
use crate::core::alphabet::{is_swara, ANUDATTA, SWARITA};
use crate::core::articulation::{ArticulationTables, Dimension, Signature};
use crate::core::converter::split_varna_word;
use crate::core::maheshwara::{MaheshwaraIndex, Pratyahara};
use crate::core::syllable::syllabify;
use crate::core::types::{Nested, Varna};
use crate::error::{RangeError, Result};
use crate::normalize::lines_of_words;
use tracing::debug;

pub use crate::core::converter::join_varna;

/// Syllables of every word of `text`, grouped by line.
pub fn syllables(text: &str, technical: bool) -> Nested<String> {
    lines_of_words(text)
        .iter()
        .map(|line| {
            line.iter()
                .map(|word| {
                    syllabify(word, technical)
                        .into_iter()
                        .map(str::to_string)
                        .collect()
                })
                .collect()
        })
        .collect()
}

/// Varna decomposition of every word of `text`, grouped by line.
pub fn split_varna(text: &str, technical: bool) -> Nested<Varna> {
    lines_of_words(text)
        .iter()
        .map(|line| {
            line.iter()
                .map(|word| split_varna_word(word, technical))
                .collect()
        })
        .collect()
}

/// Varna decomposition of `text` as one token list, with `' '` between
/// words and `'\n'` between lines. [`join_varna`] turns it back into the
/// cleaned text.
pub fn split_varna_flat(text: &str, technical: bool) -> Vec<Varna> {
    flatten(split_varna(text, technical))
}

/// Joins nested per-word tokens into one list with separators.
pub fn flatten(nested: Nested<Varna>) -> Vec<Varna> {
    let mut flat = Vec::new();
    for (i, line) in nested.into_iter().enumerate() {
        if i > 0 {
            flat.push(Varna::Separator('\n'));
        }
        for (j, word) in line.into_iter().enumerate() {
            if j > 0 {
                flat.push(Varna::Separator(' '));
            }
            flat.extend(word);
        }
    }
    flat
}

/// Classifiable letters of a word: the normalized decomposition with fused
/// marks split off and vedic accents reattached to their vowel.
fn letters(word: &str) -> Vec<String> {
    let mut letters: Vec<String> = Vec::new();
    for varna in split_varna_word(word, false).into_iter().flat_map(Varna::unfuse) {
        if let (Varna::Verbatim(text), Some(last)) = (&varna, letters.last_mut()) {
            let mut text_chars = text.chars();
            let accent = matches!(
                (text_chars.next(), text_chars.next()),
                (Some(SWARITA | ANUDATTA), None)
            );
            let mut last_chars = last.chars();
            let on_vowel = matches!(
                (last_chars.next(), last_chars.next()),
                (Some(c), None) if is_swara(c)
            );
            if accent && on_vowel {
                last.push_str(text);
                continue;
            }
        }
        letters.push(varna.to_string());
    }
    letters
}

/// The classifier together with the canonical order index it was built
/// from. Construct once and share; all operations take `&self`.
#[derive(Debug, Clone)]
pub struct VarnaEngine {
    index: MaheshwaraIndex,
    articulation: ArticulationTables,
}

impl VarnaEngine {
    /// Builds the index, then the articulation tables that depend on it.
    pub fn new() -> Result<Self> {
        let index = MaheshwaraIndex::new();
        debug!(positions = index.krama().len(), "Canonical order index built");
        let articulation = ArticulationTables::build(&index)?;
        Ok(Self {
            index,
            articulation,
        })
    }

    pub fn index(&self) -> &MaheshwaraIndex {
        &self.index
    }

    pub fn form_pratyahara(&self, letters: &[char]) -> std::result::Result<Pratyahara, RangeError> {
        self.index.form_pratyahara(letters)
    }

    pub fn resolve_pratyahara(&self, name: &str) -> Vec<Vec<char>> {
        self.index.resolve(name)
    }

    pub fn classify(&self, letter: &str) -> Signature {
        self.articulation.classify(letter)
    }

    pub fn label(&self, letter: &str, dimension: Dimension, abbrev: bool) -> String {
        self.classify(letter).label(dimension, abbrev)
    }

    /// `(letter, label)` for every letter of one word.
    pub fn ucchaarana_word(
        &self,
        word: &str,
        dimension: Dimension,
        abbrev: bool,
    ) -> Vec<(String, String)> {
        letters(word)
            .into_iter()
            .map(|letter| {
                let label = self.label(&letter, dimension, abbrev);
                (letter, label)
            })
            .collect()
    }

    /// `(letter, label)` pairs for the whole text, grouped by line and word.
    pub fn ucchaarana(
        &self,
        text: &str,
        dimension: Dimension,
        abbrev: bool,
    ) -> Nested<(String, String)> {
        lines_of_words(text)
            .iter()
            .map(|line| {
                line.iter()
                    .map(|word| self.ucchaarana_word(word, dimension, abbrev))
                    .collect()
            })
            .collect()
    }

    /// Full three-dimensional signature of every letter of `text`.
    pub fn signature(&self, text: &str) -> Nested<(String, Signature)> {
        lines_of_words(text)
            .iter()
            .map(|line| {
                line.iter()
                    .map(|word| {
                        letters(word)
                            .into_iter()
                            .map(|letter| {
                                let signature = self.classify(&letter);
                                (letter, signature)
                            })
                            .collect()
                    })
                    .collect()
            })
            .collect()
    }

    /// One-hot articulation vectors for every letter of a word.
    pub fn vectors(&self, word: &str, abbrev: bool) -> Vec<(String, Vec<(&'static str, u8)>)> {
        letters(word)
            .into_iter()
            .map(|letter| {
                let vector = self.classify(&letter).vector(abbrev);
                (letter, vector)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::articulation::Sthaana;
    use std::collections::BTreeSet;

    fn engine() -> VarnaEngine {
        VarnaEngine::new().unwrap()
    }

    fn texts(tokens: &[Varna]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn flat_split_and_join() {
        let flat = split_varna_flat("कवि भारतः", true);
        assert_eq!(
            texts(&flat),
            ["क्", "-अ", "व्", "ि", " ", "भ्", "ा", "र्", "-अ", "त्", "-अ", "ः"]
        );
        assert_eq!(join_varna(&flat, true), "कवि भारतः");
    }

    #[test]
    fn flat_split_marks_lines() {
        let flat = split_varna_flat("राम।\nसीता", false);
        assert!(flat.contains(&Varna::Separator('\n')));
        assert_eq!(flat.iter().filter(|t| t.is_separator()).count(), 1);
        assert_eq!(flatten(split_varna("राम।\nसीता", false)), flat);
        assert_eq!(join_varna(&flat, false), "राम\nसीता");
    }

    #[test]
    fn syllables_are_grouped_by_word() {
        assert_eq!(
            syllables("कवि भारतः", false),
            vec![vec![vec!["क", "वि"], vec!["भा", "र", "तः"]]]
        );
        assert!(syllables("", false).is_empty());
        assert!(split_varna("   ", true).is_empty());
    }

    #[test]
    fn fused_visarga_is_classified_alone() {
        let e = engine();
        let letters: Vec<String> = e
            .ucchaarana_word("रामः", Dimension::Sthaana, false)
            .into_iter()
            .map(|(letter, _)| letter)
            .collect();
        assert_eq!(letters, ["र्", "आ", "म्", "अ", "ः"]);
    }

    #[test]
    fn labels_per_letter() {
        let e = engine();
        let labels = e.ucchaarana("अङ्ग", Dimension::Sthaana, true);
        assert_eq!(
            labels,
            vec![vec![vec![
                ("अ".to_string(), "S_K".to_string()),
                ("ङ्".to_string(), "S_K-S_N".to_string()),
                ("ग्".to_string(), "S_K".to_string()),
                ("अ".to_string(), "S_K".to_string()),
            ]]]
        );
    }

    #[test]
    fn accent_stays_with_its_vowel() {
        let e = engine();
        let signature = e.signature("क\u{0952}");
        let word = &signature[0][0];
        assert_eq!(word[1].0, "अ\u{0952}");
        assert!(!word[1].1.baahya.is_empty());
    }

    #[test]
    fn classifier_reports_dual_places() {
        let e = engine();
        assert_eq!(
            e.classify("ङ").sthaana,
            BTreeSet::from([Sthaana::Kantha, Sthaana::Naasika])
        );
        assert_eq!(e.label("क", Dimension::Sthaana, false), "कण्ठः");
    }

    #[test]
    fn vectors_have_one_entry_per_letter() {
        let e = engine();
        let vectors = e.vectors("कः", true);
        assert_eq!(vectors.len(), 3);
        assert!(vectors[2].1.contains(&("B_MP", 1)));
    }

    #[test]
    fn pratyahara_wrappers() {
        let e = engine();
        let name = e.form_pratyahara(&['य', 'व', 'र', 'ल']).unwrap();
        assert_eq!(name.to_string(), "यण्");
        assert!(e
            .resolve_pratyahara("यण्")
            .iter()
            .any(|set| set == &['य', 'व', 'र', 'ल']));
        assert_eq!(e.index().krama().len(), 57);
    }
}
