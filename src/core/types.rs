// src/core/types.rs
use crate::core::alphabet::{
    is_ayogavaha, is_matra, is_special, is_swara, is_vyanjana, ARTIFICIAL_MATRA_A, HALANTA,
};
use crate::error::VarnaError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One element of a varna decomposition (viccheda).
///
/// Every token has a canonical textual form (see `Display`), which is also
/// its serialized form: `क्`, `-अ`, `ि`, `अः`, `" "` and so on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Varna {
    /// Independent vowel, possibly carrying a fused nasal/visarga mark.
    Swara(char, Option<char>),
    /// Dependent vowel sign.
    Matra(char),
    /// Consonant with its inherent vowel killed.
    Vyanjana(char),
    /// The inherent 'अ' of a consonant, written without a sign.
    ImplicitA,
    /// Freestanding nasal/visarga mark.
    Ayogavaha(char),
    /// Avagraha, om and friends, possibly carrying a fused mark.
    Special(char, Option<char>),
    /// Word (`' '`) or line (`'\n'`) boundary in flat output.
    Separator(char),
    /// Text outside the modelled syllable shapes, kept as written.
    Verbatim(String),
}

impl Varna {
    pub fn is_separator(&self) -> bool {
        matches!(self, Varna::Separator(_))
    }

    /// Splits a fused vowel+mark token into its two letters.
    pub fn unfuse(self) -> Vec<Varna> {
        match self {
            Varna::Swara(s, Some(m)) => vec![Varna::Swara(s, None), Varna::Ayogavaha(m)],
            Varna::Special(s, Some(m)) => vec![Varna::Special(s, None), Varna::Ayogavaha(m)],
            other => vec![other],
        }
    }
}

impl fmt::Display for Varna {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Varna::Swara(c, mark) | Varna::Special(c, mark) => {
                write!(f, "{c}")?;
                if let Some(m) = mark {
                    write!(f, "{m}")?;
                }
                Ok(())
            }
            Varna::Matra(c) | Varna::Ayogavaha(c) | Varna::Separator(c) => write!(f, "{c}"),
            Varna::Vyanjana(c) => write!(f, "{c}{HALANTA}"),
            Varna::ImplicitA => f.write_str(ARTIFICIAL_MATRA_A),
            Varna::Verbatim(s) => f.write_str(s),
        }
    }
}

impl From<Varna> for String {
    fn from(varna: Varna) -> Self {
        varna.to_string()
    }
}

impl TryFrom<String> for Varna {
    type Error = VarnaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl std::str::FromStr for Varna {
    type Err = VarnaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ARTIFICIAL_MATRA_A {
            return Ok(Varna::ImplicitA);
        }
        let chars: Vec<char> = s.chars().collect();
        let varna = match chars.as_slice() {
            [] => return Err(VarnaError::EmptyToken),
            [c] if matches!(c, ' ' | '\n') => Varna::Separator(*c),
            [c] if is_swara(*c) => Varna::Swara(*c, None),
            [c] if is_matra(*c) => Varna::Matra(*c),
            [c] if is_ayogavaha(*c) => Varna::Ayogavaha(*c),
            [c] if is_special(*c) => Varna::Special(*c, None),
            [c, HALANTA] if is_vyanjana(*c) => Varna::Vyanjana(*c),
            [c, m] if is_swara(*c) && is_ayogavaha(*m) => Varna::Swara(*c, Some(*m)),
            [c, m] if is_special(*c) && is_ayogavaha(*m) => Varna::Special(*c, Some(*m)),
            _ => Varna::Verbatim(s.to_string()),
        };
        Ok(varna)
    }
}

/// Nested per-text output: lines, then words, then items.
pub type Nested<T> = Vec<Vec<Vec<T>>>;
