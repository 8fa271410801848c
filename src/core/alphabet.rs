// File: src/core/alphabet.rs
//! The Devanagari alphabet as used for Sanskrit: a closed catalog of
//! character classes and their group memberships.

use serde::{Deserialize, Serialize};

pub const SWARA: [char; 14] = [
    'अ', 'आ', 'इ', 'ई', 'उ', 'ऊ', 'ऋ', 'ॠ', 'ऌ', 'ॡ', 'ए', 'ऐ', 'ओ', 'औ',
];
pub const EXTENDED_SWARA: [char; 5] = ['ऎ', 'ऒ', 'ॲ', 'ऑ', 'ऍ'];

/// `MATRA[i]` is the sign of `SWARA[i + 1]`; the base vowel has no sign.
pub const MATRA: [char; 13] = [
    '\u{093e}', '\u{093f}', '\u{0940}', '\u{0941}', '\u{0942}', '\u{0943}', '\u{0944}',
    '\u{0962}', '\u{0963}', '\u{0947}', '\u{0948}', '\u{094b}', '\u{094c}',
];
/// `EXTENDED_MATRA[i]` is the sign of `EXTENDED_SWARA[i]`. 'ऍ' has none.
pub const EXTENDED_MATRA: [char; 4] = ['\u{0946}', '\u{094a}', '\u{0945}', '\u{0949}'];

pub const KANTHYA: [char; 5] = ['क', 'ख', 'ग', 'घ', 'ङ'];
pub const TALAVYA: [char; 5] = ['च', 'छ', 'ज', 'झ', 'ञ'];
pub const MURDHANYA: [char; 5] = ['ट', 'ठ', 'ड', 'ढ', 'ण'];
pub const DANTYA: [char; 5] = ['त', 'थ', 'द', 'ध', 'न'];
pub const AUSHTHYA: [char; 5] = ['प', 'फ', 'ब', 'भ', 'म'];
pub const ANTAHSTHA: [char; 4] = ['य', 'र', 'ल', 'व'];
pub const USHMA: [char; 4] = ['श', 'ष', 'स', 'ह'];
pub const VISHISHTA: [char; 1] = ['ळ'];
pub const EXTENDED_VYANJANA: [char; 11] = [
    'ऩ', 'ऱ', 'ऴ', '\u{0958}', '\u{0959}', '\u{095a}', '\u{095b}', '\u{095c}', '\u{095d}',
    '\u{095e}', '\u{095f}',
];

/// The five stop groups, in articulatory order.
pub const VARGA: [[char; 5]; 5] = [KANTHYA, TALAVYA, MURDHANYA, DANTYA, AUSHTHYA];

pub const OM: char = 'ॐ';
pub const AVAGRAHA: char = 'ऽ';

pub const SWARITA: char = '\u{0951}';
pub const ANUDATTA: char = '\u{0952}';
pub const DOUBLE_SWARITA: char = '\u{1cda}';
pub const TRIPLE_SWARITA: char = '\u{1cdb}';

pub const CHANDRABINDU: char = '\u{0901}';
pub const CHANDRABINDU_VIRAMA: char = '\u{a8f3}';
pub const CHANDRABINDU_SPACING: char = '\u{a8f2}';
pub const CHANDRABINDU_TWO: char = '\u{a8f5}';
pub const CHANDRABINDU_THREE: char = '\u{a8f6}';

pub const ANUSWARA: char = '\u{0902}';
pub const VISARGA: char = '\u{0903}';
pub const JIHVAAMULIYA: char = '\u{1cf5}';
pub const UPADHMANIYA: char = '\u{1cf6}';

pub const HALANTA: char = '\u{094d}';
pub const ABBREV: char = '॰';
pub const DANDA: char = '।';
pub const DOUBLE_DANDA: char = '॥';

/// Textual form of the inherent-vowel marker.
pub const ARTIFICIAL_MATRA_A: &str = "-अ";

pub const AYOGAVAAHA_COMMON: [char; 3] = [CHANDRABINDU, ANUSWARA, VISARGA];
pub const AYOGAVAAHA: [char; 5] = [CHANDRABINDU, ANUSWARA, VISARGA, JIHVAAMULIYA, UPADHMANIYA];

pub const VEDIC_MARKS: [char; 4] = [SWARITA, ANUDATTA, DOUBLE_SWARITA, TRIPLE_SWARITA];
pub const SPECIAL: [char; 6] = [
    AVAGRAHA,
    OM,
    CHANDRABINDU_VIRAMA,
    CHANDRABINDU_SPACING,
    CHANDRABINDU_TWO,
    CHANDRABINDU_THREE,
];

pub const SPACES: [char; 4] = [' ', '\t', '\n', '\r'];
pub const PUNCTUATION: [char; 3] = [DANDA, DOUBLE_DANDA, ABBREV];
pub const GENERAL_PUNCTUATION: [char; 6] = ['.', ',', ';', '"', '\'', '`'];
pub const DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Short vowels and short vowel signs, for metrical weight.
pub const LAGHU_SWARA: [char; 7] = ['अ', 'इ', 'उ', 'ऋ', 'ऌ', 'ऎ', 'ऒ'];
pub const LAGHU_MATRA: [char; 6] = [
    '\u{093f}', '\u{0941}', '\u{0943}', '\u{0962}', '\u{0946}', '\u{094a}',
];

/// The class a single alphabet character belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhonemeClass {
    Swara,
    Matra,
    Vyanjana,
    Ayogavaha,
    Special,
    Halanta,
    VedicMark,
}

impl PhonemeClass {
    pub fn of(c: char) -> Option<Self> {
        if is_swara(c) {
            Some(Self::Swara)
        } else if is_vyanjana(c) {
            Some(Self::Vyanjana)
        } else if is_matra(c) {
            Some(Self::Matra)
        } else if is_ayogavaha(c) {
            Some(Self::Ayogavaha)
        } else if is_special(c) {
            Some(Self::Special)
        } else if c == HALANTA {
            Some(Self::Halanta)
        } else if is_vedic_mark(c) {
            Some(Self::VedicMark)
        } else {
            None
        }
    }
}

pub fn is_swara(c: char) -> bool {
    SWARA.contains(&c) || EXTENDED_SWARA.contains(&c)
}

pub fn is_matra(c: char) -> bool {
    MATRA.contains(&c) || EXTENDED_MATRA.contains(&c)
}

pub fn is_vargiya(c: char) -> bool {
    varga_of(c).is_some()
}

pub fn is_vyanjana(c: char) -> bool {
    is_vargiya(c)
        || ANTAHSTHA.contains(&c)
        || USHMA.contains(&c)
        || VISHISHTA.contains(&c)
        || EXTENDED_VYANJANA.contains(&c)
}

pub fn is_ayogavaha(c: char) -> bool {
    AYOGAVAAHA.contains(&c)
}

/// Candrabindu, anusvara and visarga: the marks that may trail any vowel.
pub fn is_ayogavaha_common(c: char) -> bool {
    AYOGAVAAHA_COMMON.contains(&c)
}

pub fn is_special(c: char) -> bool {
    SPECIAL.contains(&c)
}

pub fn is_vedic_mark(c: char) -> bool {
    VEDIC_MARKS.contains(&c)
}

/// A vowel or consonant letter.
pub fn is_varna(c: char) -> bool {
    is_swara(c) || is_vyanjana(c)
}

pub fn in_alphabet(c: char) -> bool {
    PhonemeClass::of(c).is_some()
}

/// Index of the varga a stop consonant belongs to.
pub fn varga_of(c: char) -> Option<usize> {
    VARGA.iter().position(|varga| varga.contains(&c))
}

/// The nasal closing the varga of `c`, if `c` is a stop consonant.
pub fn anunasika(c: char) -> Option<char> {
    varga_of(c).map(|idx| VARGA[idx][4])
}

/// Independent vowel for a vowel sign.
pub fn matra_to_swara(m: char) -> Option<char> {
    if let Some(idx) = MATRA.iter().position(|&x| x == m) {
        return Some(SWARA[idx + 1]);
    }
    EXTENDED_MATRA
        .iter()
        .position(|&x| x == m)
        .map(|idx| EXTENDED_SWARA[idx])
}

/// Vowel sign for an independent vowel. `None` for 'अ' (written without a
/// sign) and for vowels that have no sign form.
pub fn swara_to_matra(s: char) -> Option<char> {
    if let Some(idx) = SWARA.iter().position(|&x| x == s) {
        return idx.checked_sub(1).map(|i| MATRA[i]);
    }
    EXTENDED_SWARA
        .iter()
        .position(|&x| x == s)
        .and_then(|idx| EXTENDED_MATRA.get(idx).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matra_and_swara_are_inverse() {
        assert_eq!(matra_to_swara('ा'), Some('आ'));
        assert_eq!(swara_to_matra('आ'), Some('ा'));
        assert_eq!(matra_to_swara('ॆ'), Some('ऎ'));
        assert_eq!(swara_to_matra('ऎ'), Some('ॆ'));
        for &m in MATRA.iter().chain(EXTENDED_MATRA.iter()) {
            let s = matra_to_swara(m).unwrap();
            assert_eq!(swara_to_matra(s), Some(m));
        }
    }

    #[test]
    fn base_vowel_has_no_sign() {
        assert_eq!(swara_to_matra('अ'), None);
        assert_eq!(swara_to_matra('ऍ'), None);
        assert_eq!(swara_to_matra('क'), None);
    }

    #[test]
    fn classes_are_disjoint() {
        assert_eq!(PhonemeClass::of('क'), Some(PhonemeClass::Vyanjana));
        assert_eq!(PhonemeClass::of('अ'), Some(PhonemeClass::Swara));
        assert_eq!(PhonemeClass::of('ि'), Some(PhonemeClass::Matra));
        assert_eq!(PhonemeClass::of(VISARGA), Some(PhonemeClass::Ayogavaha));
        assert_eq!(PhonemeClass::of(OM), Some(PhonemeClass::Special));
        assert_eq!(PhonemeClass::of(HALANTA), Some(PhonemeClass::Halanta));
        assert_eq!(PhonemeClass::of(SWARITA), Some(PhonemeClass::VedicMark));
        assert_eq!(PhonemeClass::of('a'), None);
        assert_eq!(PhonemeClass::of(DANDA), None);
    }

    #[test]
    fn anunasika_follows_varga() {
        assert_eq!(anunasika('क'), Some('ङ'));
        assert_eq!(anunasika('ज'), Some('ञ'));
        assert_eq!(anunasika('ठ'), Some('ण'));
        assert_eq!(anunasika('द'), Some('न'));
        assert_eq!(anunasika('भ'), Some('म'));
        assert_eq!(anunasika('य'), None);
    }
}
