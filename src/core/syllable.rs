// File: src/core/syllable.rs
use crate::core::alphabet::{
    is_ayogavaha_common, is_special, is_varna, is_vyanjana, LAGHU_MATRA, LAGHU_SWARA, MATRA,
    SWARA, HALANTA,
};

/// Whether `c` may open a new syllable.
fn is_starter(c: char, technical: bool) -> bool {
    is_varna(c) || is_special(c) || (technical && is_ayogavaha_common(c))
}

/// Splits a clean word into orthographic syllables.
///
/// Each syllable opens at a vowel, consonant or special symbol and absorbs
/// the signs that follow it. Outside technical mode a consonant ending in
/// virama stays open and binds to the next unit, so clusters such as `क्ष`
/// form one syllable. In technical mode every syllable carries at most one
/// vowel or consonant, and nasal/visarga marks stand alone.
///
/// The returned slices borrow from `word` and concatenate back to it.
pub fn syllabify(word: &str, technical: bool) -> Vec<&str> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut syllables = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        // The current character always joins the open syllable.
        i += 1;
        while i < chars.len() && !is_starter(chars[i].1, technical) {
            i += 1;
        }
        let end = chars.get(i).map_or(word.len(), |&(offset, _)| offset);
        let closes = chars[i - 1].1 != HALANTA || i == chars.len() || technical;
        if closes {
            syllables.push(&word[start..end]);
            start = end;
        }
    }
    syllables
}

/// A syllable is laghu (metrically light) when it holds only consonants,
/// short vowels, short vowel signs or virama.
pub fn is_laghu(syllable: &str) -> bool {
    syllable.chars().all(|c| {
        is_vyanjana(c) || LAGHU_SWARA.contains(&c) || LAGHU_MATRA.contains(&c) || c == HALANTA
    })
}

/// Swaps a short vowel (or vowel sign) for its long counterpart and vice
/// versa. `None` when the syllable has no such vowel at its end.
pub fn toggle_matra(syllable: &str) -> Option<String> {
    let last = syllable.chars().last()?;
    if let Some(idx) = MATRA.iter().position(|&m| m == last) {
        let toggled = match idx {
            2 | 4 | 6 | 8 => MATRA[idx - 1],
            1 | 3 | 5 | 7 => MATRA[idx + 1],
            _ => return None,
        };
        let mut out: String = syllable.chars().take(syllable.chars().count() - 1).collect();
        out.push(toggled);
        return Some(out);
    }

    let mut chars = syllable.chars();
    match (chars.next(), chars.next()) {
        (Some(s), None) => {
            let idx = SWARA.iter().position(|&x| x == s)?;
            match idx {
                0 | 2 | 4 | 6 | 8 => Some(SWARA[idx + 1].to_string()),
                1 | 3 | 5 | 7 | 9 => Some(SWARA[idx - 1].to_string()),
                _ => None,
            }
        }
        _ => None,
    }
}
