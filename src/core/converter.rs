// File: src/core/converter.rs
//! Varna decomposition (viccheda) and its inverse.

use crate::core::alphabet::{
    is_ayogavaha, is_ayogavaha_common, is_matra, is_special, is_swara, is_vyanjana,
    matra_to_swara, swara_to_matra, HALANTA, SWARA,
};
use crate::core::syllable::syllabify;
use crate::core::types::Varna;
use tracing::{debug, warn};

const BASE_SWARA: char = SWARA[0];

/// Token for a sign trailing a letter inside one syllable.
fn trailing_sign(c: char) -> Varna {
    if is_matra(c) {
        Varna::Matra(c)
    } else if is_ayogavaha(c) {
        Varna::Ayogavaha(c)
    } else {
        Varna::Verbatim(c.to_string())
    }
}

/// Decomposes a clean word into varna tokens.
///
/// In technical mode vowel signs, the inherent vowel and nasal/visarga marks
/// stay separate tokens. Otherwise signs become independent vowels and
/// candrabindu, anusvara and visarga are fused onto the preceding token.
pub fn split_varna_word(word: &str, technical: bool) -> Vec<Varna> {
    let mut viccheda = Vec::new();

    for syllable in syllabify(word, true) {
        let mut chars = syllable.chars();
        let Some(first) = chars.next() else { continue };
        let second = chars.next();
        let tail = chars.as_str();

        if is_swara(first) {
            viccheda.push(Varna::Swara(first, None));
            if let Some(sign) = second {
                viccheda.push(trailing_sign(sign));
            }
            if !tail.is_empty() {
                warn!(syllable, "Long swara syllable");
                viccheda.push(Varna::Verbatim(tail.to_string()));
            }
        } else if is_vyanjana(first) {
            viccheda.push(Varna::Vyanjana(first));
            match second {
                None => viccheda.push(Varna::ImplicitA),
                Some(HALANTA) => {}
                Some(sign) => {
                    // Anything but a vowel sign rides on the inherent vowel.
                    if !is_matra(sign) {
                        viccheda.push(Varna::ImplicitA);
                    }
                    viccheda.push(trailing_sign(sign));
                }
            }
            if !tail.is_empty() {
                warn!(syllable, "Long vyanjana syllable");
                viccheda.push(Varna::Verbatim(tail.to_string()));
            }
        } else if is_special(first) && second.is_none() {
            viccheda.push(Varna::Special(first, None));
        } else if is_ayogavaha(first) && second.is_none() {
            viccheda.push(Varna::Ayogavaha(first));
        } else {
            viccheda.push(Varna::Verbatim(syllable.to_string()));
        }
    }

    if technical {
        viccheda
    } else {
        normalize_viccheda(viccheda)
    }
}

/// Rewrites signs as independent vowels and fuses trailing marks.
fn normalize_viccheda(viccheda: Vec<Varna>) -> Vec<Varna> {
    let mut normalized: Vec<Varna> = Vec::with_capacity(viccheda.len());
    for varna in viccheda {
        match varna {
            Varna::ImplicitA => normalized.push(Varna::Swara(BASE_SWARA, None)),
            Varna::Matra(m) => match matra_to_swara(m) {
                Some(s) => normalized.push(Varna::Swara(s, None)),
                None => normalized.push(Varna::Matra(m)),
            },
            Varna::Ayogavaha(m) if is_ayogavaha_common(m) => match normalized.last_mut() {
                Some(Varna::Swara(_, mark @ None)) | Some(Varna::Special(_, mark @ None)) => {
                    *mark = Some(m);
                }
                Some(Varna::Verbatim(text)) => text.push(m),
                _ => normalized.push(Varna::Ayogavaha(m)),
            },
            other => normalized.push(other),
        }
    }
    normalized
}

/// Joins varna tokens back into text.
///
/// This is the inverse of [`split_varna_word`] (and of flat text-level
/// decomposition) in the same mode. Consonants take the following vowel
/// sign, implicit vowel or (outside technical mode) independent vowel; a
/// consonant followed by anything else keeps its virama. A mark directly
/// after a consonant token was written after a virama, since marks on a
/// consonant always ride on a vowel token.
pub fn join_varna(viccheda: &[Varna], technical: bool) -> String {
    let mut word = String::new();
    let mut i = 0;

    while i < viccheda.len() {
        let current = &viccheda[i];
        let next = viccheda.get(i + 1);
        i += 1;

        match current {
            Varna::Separator(c) => word.push(*c),
            Varna::Swara(s, mark) | Varna::Special(s, mark) => {
                word.push(*s);
                word.extend(*mark);
            }
            Varna::Vyanjana(c) => match next {
                // Technical viccheda spells attached vowels as signs, so an
                // independent vowel here was written after a virama.
                Some(Varna::Swara(..)) if technical => {
                    word.push(*c);
                    word.push(HALANTA);
                }
                Some(Varna::Swara(s, mark)) if *s == BASE_SWARA => {
                    word.push(*c);
                    word.extend(*mark);
                    i += 1;
                }
                Some(Varna::Swara(s, mark)) => match swara_to_matra(*s) {
                    Some(matra) => {
                        word.push(*c);
                        word.push(matra);
                        word.extend(*mark);
                        i += 1;
                    }
                    None => {
                        word.push(*c);
                        word.push(HALANTA);
                    }
                },
                Some(Varna::Matra(m)) => {
                    word.push(*c);
                    word.push(*m);
                    i += 1;
                }
                Some(Varna::ImplicitA) => {
                    word.push(*c);
                    i += 1;
                }
                _ => {
                    word.push(*c);
                    word.push(HALANTA);
                }
            },
            Varna::Matra(_) | Varna::ImplicitA | Varna::Ayogavaha(_) => {
                if !technical && !matches!(current, Varna::Ayogavaha(_)) {
                    debug!(token = %current, "Standalone sign in non-technical viccheda");
                }
                word.push_str(&current.to_string());
            }
            Varna::Verbatim(text) => word.push_str(text),
        }
    }

    word
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::{ANUSWARA, VISARGA};

    fn texts(viccheda: &[Varna]) -> Vec<String> {
        viccheda.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn technical_split_of_simple_words() {
        assert_eq!(texts(&split_varna_word("कवि", true)), ["क्", "-अ", "व्", "ि"]);
        assert_eq!(
            texts(&split_varna_word("भारतः", true)),
            ["भ्", "ा", "र्", "-अ", "त्", "-अ", "ः"]
        );
    }

    #[test]
    fn normalized_split_fuses_marks() {
        assert_eq!(
            split_varna_word("भारतः", false),
            vec![
                Varna::Vyanjana('भ'),
                Varna::Swara('आ', None),
                Varna::Vyanjana('र'),
                Varna::Swara('अ', None),
                Varna::Vyanjana('त'),
                Varna::Swara('अ', Some(VISARGA)),
            ]
        );
        assert_eq!(texts(&split_varna_word("अहं", false)), ["अ", "ह्", "अं"]);
    }

    #[test]
    fn clusters_and_final_consonants() {
        assert_eq!(
            texts(&split_varna_word("क्षत्रम्", true)),
            ["क्", "ष्", "-अ", "त्", "र्", "-अ", "म्"]
        );
    }

    #[test]
    fn vowel_initial_syllables() {
        assert_eq!(texts(&split_varna_word("इति", true)), ["इ", "त्", "ि"]);
        assert_eq!(texts(&split_varna_word("अंशः", true)), ["अ", "ं", "श्", "-अ", "ः"]);
    }

    #[test]
    fn join_inverts_split_in_both_modes() {
        for word in ["कवि", "भारतः", "संस्कृतम्", "अहं", "क्षत्रियः", "ॐ", "सोऽहम्", "वाक्"] {
            for technical in [true, false] {
                let viccheda = split_varna_word(word, technical);
                assert_eq!(join_varna(&viccheda, technical), word, "{word} {technical}");
            }
        }
    }

    #[test]
    fn join_with_separators() {
        let viccheda = vec![
            Varna::Vyanjana('क'),
            Varna::ImplicitA,
            Varna::Separator(' '),
            Varna::Vyanjana('त'),
            Varna::Separator('\n'),
            Varna::Swara('अ', Some(ANUSWARA)),
        ];
        assert_eq!(join_varna(&viccheda, true), "क त्\nअं");
    }

    #[test]
    fn vedic_mark_rides_on_inherent_vowel() {
        let word = "क\u{0951}";
        let viccheda = split_varna_word(word, true);
        assert_eq!(
            viccheda,
            vec![Varna::Vyanjana('क'), Varna::ImplicitA, Varna::Verbatim("\u{0951}".into())]
        );
        assert_eq!(join_varna(&viccheda, true), word);
    }

    #[test]
    fn vowel_after_virama_survives_technical_round_trip() {
        let word = "वाक्अ";
        let viccheda = split_varna_word(word, true);
        assert_eq!(texts(&viccheda), ["व्", "ा", "क्", "अ"]);
        assert_eq!(join_varna(&viccheda, true), word);
        // the normalized spelling of the same tokens reads as one syllable
        assert_eq!(join_varna(&viccheda[2..], false), "क");
    }

    #[test]
    fn mark_after_virama_keeps_the_virama() {
        for word in ["क्ं", "क्ः", "क्ँ", "सम्ं"] {
            let viccheda = split_varna_word(word, true);
            assert_eq!(join_varna(&viccheda, true), word, "{word}");
        }
        assert_eq!(texts(&split_varna_word("सम्ं", true)), ["स्", "-अ", "म्", "ं"]);
    }

    #[test]
    fn long_consonant_syllable_keeps_its_tail() {
        let word = "कि\u{0951}";
        assert_eq!(
            split_varna_word(word, true),
            vec![Varna::Vyanjana('क'), Varna::Matra('ि'), Varna::Verbatim("\u{0951}".into())]
        );
        for technical in [true, false] {
            assert_eq!(join_varna(&split_varna_word(word, technical), technical), word);
        }
    }

    #[test]
    fn long_vowel_syllable_keeps_its_tail() {
        let word = "इ\u{1cf5}\u{0951}";
        assert_eq!(
            split_varna_word(word, true),
            vec![
                Varna::Swara('इ', None),
                Varna::Ayogavaha('\u{1cf5}'),
                Varna::Verbatim("\u{0951}".into()),
            ]
        );
        for technical in [true, false] {
            assert_eq!(join_varna(&split_varna_word(word, technical), technical), word);
        }
    }

    #[test]
    fn empty_word() {
        assert!(split_varna_word("", true).is_empty());
        assert_eq!(join_varna(&[], true), "");
    }
}
