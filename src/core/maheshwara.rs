// --- File: src/core/maheshwara.rs
//! Index over the fourteen Maheshwara Sutras and the pratyahara
//! (abbreviated range) operations built on it.

use crate::core::alphabet::{is_vyanjana, HALANTA};
use crate::error::RangeError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Each sutra is a run of letters closed by an it-marker consonant.
pub const MAAHESHWARA_SUTRA: [(&[char], char); 14] = [
    (&['अ', 'इ', 'उ'], 'ण'),
    (&['ऋ', 'ऌ'], 'क'),
    (&['ए', 'ओ'], 'ङ'),
    (&['ऐ', 'औ'], 'च'),
    (&['ह', 'य', 'व', 'र'], 'ट'),
    (&['ल'], 'ण'),
    (&['ञ', 'म', 'ङ', 'ण', 'न'], 'म'),
    (&['झ', 'भ'], 'ञ'),
    (&['घ', 'ढ', 'ध'], 'ष'),
    (&['ज', 'ब', 'ग', 'ड', 'द'], 'श'),
    (&['ख', 'फ', 'छ', 'ठ', 'थ', 'च', 'ट', 'त'], 'व'),
    (&['क', 'प'], 'य'),
    (&['श', 'ष', 'स'], 'र'),
    (&['ह'], 'ल'),
];

/// One cell of the sutra table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KramaEntry {
    pub letter: char,
    /// Index of the sutra.
    pub sutra: usize,
    /// Offset within the sutra.
    pub offset: usize,
    /// Running position among letters; `None` for it-markers.
    pub position: Option<usize>,
}

impl KramaEntry {
    pub fn is_marker(&self) -> bool {
        self.position.is_none()
    }
}

impl fmt::Display for KramaEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_marker() {
            write!(f, "{}{HALANTA}", self.letter)
        } else {
            write!(f, "{}", self.letter)
        }
    }
}

/// A pratyahara: a first letter and a closing it-marker, e.g. `अच्`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Pratyahara {
    pub aadi: char,
    pub antya: char,
}

impl fmt::Display for Pratyahara {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{HALANTA}", self.aadi, self.antya)
    }
}

impl FromStr for Pratyahara {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        match chars.as_slice() {
            [aadi, antya, HALANTA] if is_vyanjana(*antya) => Ok(Self {
                aadi: *aadi,
                antya: *antya,
            }),
            _ => Err(RangeError::MalformedName(s.to_string())),
        }
    }
}

impl From<Pratyahara> for String {
    fn from(p: Pratyahara) -> Self {
        p.to_string()
    }
}

impl TryFrom<String> for Pratyahara {
    type Error = RangeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Position index over the Maheshwara Sutras.
///
/// Letters may occur more than once in the table ('ह' opens both the
/// fifth and the last sutra, 'ण्' closes two sutras); every occurrence is
/// kept.
#[derive(Debug, Clone)]
pub struct MaheshwaraIndex {
    krama: Vec<KramaEntry>,
    letters: HashMap<char, Vec<usize>>,
    markers: HashMap<char, Vec<usize>>,
}

impl MaheshwaraIndex {
    pub fn new() -> Self {
        let mut krama = Vec::new();
        let mut letters: HashMap<char, Vec<usize>> = HashMap::new();
        let mut markers: HashMap<char, Vec<usize>> = HashMap::new();
        let mut position = 0;

        for (sutra, (varnas, marker)) in MAAHESHWARA_SUTRA.iter().enumerate() {
            for (offset, &letter) in varnas.iter().enumerate() {
                letters.entry(letter).or_default().push(krama.len());
                krama.push(KramaEntry {
                    letter,
                    sutra,
                    offset,
                    position: Some(position),
                });
                position += 1;
            }
            markers.entry(*marker).or_default().push(krama.len());
            krama.push(KramaEntry {
                letter: *marker,
                sutra,
                offset: varnas.len(),
                position: None,
            });
        }

        Self { krama, letters, markers }
    }

    /// The flattened table, markers included, in sutra order.
    pub fn krama(&self) -> &[KramaEntry] {
        &self.krama
    }

    /// Every occurrence of `letter` as a (non-marker) table entry.
    pub fn occurrences(&self, letter: char) -> Vec<KramaEntry> {
        self.letters
            .get(&letter)
            .map(|idxs| idxs.iter().map(|&i| self.krama[i]).collect())
            .unwrap_or_default()
    }

    /// Names the contiguous run covered by `letters`.
    ///
    /// Every choice of one occurrence per letter is tried, iterating letters
    /// in the given order and occurrences in table order (the last letter
    /// varying fastest). The first choice whose positions are contiguous and
    /// are followed directly by an it-marker wins. Letters outside the table
    /// are ignored; repeated letters count once.
    pub fn form_pratyahara(&self, letters: &[char]) -> Result<Pratyahara, RangeError> {
        let mut chosen: Vec<char> = Vec::new();
        let mut ignored: Vec<char> = Vec::new();
        for &letter in letters {
            if chosen.contains(&letter) {
                continue;
            }
            if self.letters.contains_key(&letter) {
                chosen.push(letter);
            } else {
                ignored.push(letter);
            }
        }
        if !ignored.is_empty() {
            info!(?ignored, "Ignored letters");
        }

        let lists: Vec<&[usize]> = chosen
            .iter()
            .filter_map(|letter| self.letters.get(letter).map(Vec::as_slice))
            .collect();
        if lists.is_empty() {
            return Err(RangeError::Empty);
        }

        let mut cursor = vec![0; lists.len()];
        let mut contiguous_seen = false;
        'search: loop {
            let mut picks: Vec<usize> = cursor
                .iter()
                .zip(&lists)
                .map(|(&c, list)| list[c])
                .collect();
            // Table order and position order agree for letters.
            picks.sort_unstable();

            if self.is_contiguous(&picks) {
                contiguous_seen = true;
                let last = picks[picks.len() - 1];
                if let Some(closing) = self.krama.get(last + 1).filter(|e| e.is_marker()) {
                    return Ok(Pratyahara {
                        aadi: self.krama[picks[0]].letter,
                        antya: closing.letter,
                    });
                }
            }

            let mut digit = lists.len();
            loop {
                if digit == 0 {
                    break 'search;
                }
                digit -= 1;
                cursor[digit] += 1;
                if cursor[digit] < lists[digit].len() {
                    break;
                }
                cursor[digit] = 0;
            }
        }

        let err = if contiguous_seen {
            RangeError::NotClosed
        } else {
            RangeError::Discontiguous
        };
        warn!(letters = ?chosen, "{err}");
        Err(err)
    }

    fn is_contiguous(&self, picks: &[usize]) -> bool {
        let positions: Vec<usize> = picks.iter().filter_map(|&i| self.krama[i].position).collect();
        positions.len() == picks.len()
            && positions
                .iter()
                .enumerate()
                .all(|(i, &p)| p == positions[0] + i)
    }

    /// Every letter set `pratyahara` may denote, one per (start, end) pair
    /// of occurrences with the start before the end. Sets are in table
    /// order without repeats. Candidates are not ranked.
    pub fn resolve_pratyahara(&self, pratyahara: &Pratyahara) -> Vec<Vec<char>> {
        let starts = self.letters.get(&pratyahara.aadi).map(Vec::as_slice).unwrap_or_default();
        let ends = self.markers.get(&pratyahara.antya).map(Vec::as_slice).unwrap_or_default();

        let mut resolutions = Vec::new();
        for &start in starts {
            for &end in ends.iter().filter(|&&end| start < end) {
                let mut letters: Vec<char> = Vec::new();
                for entry in self.krama[start..end].iter().filter(|e| !e.is_marker()) {
                    if !letters.contains(&entry.letter) {
                        letters.push(entry.letter);
                    }
                }
                resolutions.push(letters);
            }
        }
        resolutions
    }

    /// Resolves a pratyahara given by name; a malformed name resolves to
    /// nothing.
    pub fn resolve(&self, name: &str) -> Vec<Vec<char>> {
        match name.parse::<Pratyahara>() {
            Ok(pratyahara) => self.resolve_pratyahara(&pratyahara),
            Err(err) => {
                debug!(%err, "Unresolvable pratyahara");
                Vec::new()
            }
        }
    }
}

impl Default for MaheshwaraIndex {
    fn default() -> Self {
        Self::new()
    }
}
