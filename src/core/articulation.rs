// File: src/core/articulation.rs
//! Place of articulation (sthaana) and articulatory effort (prayatna).

use crate::core::alphabet::{
    ANTAHSTHA, ANUDATTA, ANUSWARA, AUSHTHYA, CHANDRABINDU, DANTYA, HALANTA, JIHVAAMULIYA,
    KANTHYA, MURDHANYA, SWARA, SWARITA, TALAVYA, UPADHMANIYA, USHMA, VARGA, VISARGA,
};
use crate::core::maheshwara::MaheshwaraIndex;
use crate::error::{Result, VarnaError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// A category within one classification dimension.
pub trait Category: Copy + Ord + 'static {
    const ALL: &'static [Self];

    /// Short ASCII tag, e.g. `S_K`.
    fn abbrev(self) -> &'static str;

    /// Sanskrit name, e.g. `कण्ठः`.
    fn name(self) -> &'static str;
}

macro_rules! category {
    ($(#[$meta:meta])* $ty:ident { $($variant:ident => $abbrev:literal, $name:literal;)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $ty {
            $($variant,)+
        }

        impl Category for $ty {
            const ALL: &'static [Self] = &[$(Self::$variant,)+];

            fn abbrev(self) -> &'static str {
                match self {
                    $(Self::$variant => $abbrev,)+
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }
    };
}

category! {
    /// Place of articulation.
    Sthaana {
        Kantha => "S_K", "कण्ठः";
        Taalu => "S_T", "तालु";
        Murdha => "S_M", "मूर्धा";
        Danta => "S_D", "दन्ताः";
        Oshtha => "S_O", "ओष्ठौ";
        Naasika => "S_N", "नासिका";
        KanthaTaalu => "S_KT", "कण्ठतालु";
        KanthaOshtha => "S_KO", "कण्ठौष्ठम्";
        DantaOshtha => "S_DO", "दन्तौष्ठम्";
        Jihvaamula => "S_JM", "जिह्वामूलम्";
    }
}

category! {
    /// Internal effort.
    Aabhyantara {
        Sprshta => "A_SP", "स्पृष्टः";
        IshatSprshta => "A_ISP", "ईषत्स्पृष्टः";
        IshadVivrta => "A_IVVT", "ईषद्विवृतः";
        Vivrta => "A_VVT", "विवृतः";
        Samvrta => "A_SVT", "संवृतः";
    }
}

category! {
    /// External effort.
    Baahya {
        Vivaara => "B_VVR", "विवारः";
        Samvaara => "B_SVR", "संवारः";
        Shvaasa => "B_SW", "श्वासः";
        Naada => "B_ND", "नादः";
        Ghosha => "B_GH", "घोषः";
        Aghosha => "B_AGH", "अघोषः";
        Alpapraana => "B_AP", "अल्पप्राणः";
        Mahaapraana => "B_MP", "महाप्राणः";
        Udaatta => "B_U", "उदात्तः";
        Anudaatta => "B_ANU", "अनुदात्तः";
        Swarita => "B_SWA", "स्वरितः";
    }
}

/// The three classification dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Sthaana,
    Aabhyantara,
    Baahya,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Sthaana, Dimension::Aabhyantara, Dimension::Baahya];
}

/// A letter as looked up in the tables: a base character and an optional
/// vedic accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    pub base: char,
    pub accent: Option<char>,
}

impl Letter {
    pub fn plain(base: char) -> Self {
        Self { base, accent: None }
    }

    /// Parses a letter, dropping the virama of a consonant.
    pub fn parse(letter: &str) -> Option<Self> {
        let mut chars = letter.strip_suffix(HALANTA).unwrap_or(letter).chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(base), None, _) => Some(Self::plain(base)),
            (Some(base), Some(accent), None) if matches!(accent, SWARITA | ANUDATTA) => Some(Self {
                base,
                accent: Some(accent),
            }),
            _ => None,
        }
    }
}

/// Category memberships of one letter across the three dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Signature {
    pub sthaana: BTreeSet<Sthaana>,
    pub aabhyantara: BTreeSet<Aabhyantara>,
    pub baahya: BTreeSet<Baahya>,
}

/// Human-readable form of a [`Signature`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureLabels {
    pub sthaana: String,
    pub aabhyantara: String,
    pub baahya: String,
}

fn label_of<C: Category>(set: &BTreeSet<C>, abbrev: bool) -> String {
    if abbrev {
        return set.iter().map(|c| c.abbrev()).collect::<Vec<_>>().join("-");
    }
    let mut names: Vec<&str> = set.iter().map(|c| c.name()).collect();
    if names.len() > 1 {
        names.push("च");
    }
    names.join(" ")
}

fn vector_of<C: Category>(set: &BTreeSet<C>, abbrev: bool, out: &mut Vec<(&'static str, u8)>) {
    for &c in C::ALL {
        let key = if abbrev { c.abbrev() } else { c.name() };
        out.push((key, u8::from(set.contains(&c))));
    }
}

impl Signature {
    pub fn label(&self, dimension: Dimension, abbrev: bool) -> String {
        match dimension {
            Dimension::Sthaana => label_of(&self.sthaana, abbrev),
            Dimension::Aabhyantara => label_of(&self.aabhyantara, abbrev),
            Dimension::Baahya => label_of(&self.baahya, abbrev),
        }
    }

    pub fn labels(&self, abbrev: bool) -> SignatureLabels {
        SignatureLabels {
            sthaana: self.label(Dimension::Sthaana, abbrev),
            aabhyantara: self.label(Dimension::Aabhyantara, abbrev),
            baahya: self.label(Dimension::Baahya, abbrev),
        }
    }

    /// One-hot membership over every category of every dimension, in a
    /// fixed order.
    pub fn vector(&self, abbrev: bool) -> Vec<(&'static str, u8)> {
        let mut out = Vec::new();
        vector_of(&self.sthaana, abbrev, &mut out);
        vector_of(&self.aabhyantara, abbrev, &mut out);
        vector_of(&self.baahya, abbrev, &mut out);
        out
    }
}

type Table<C> = Vec<(C, HashSet<Letter>)>;

fn plain(chars: impl IntoIterator<Item = char>) -> HashSet<Letter> {
    chars.into_iter().map(Letter::plain).collect()
}

fn varga_column(column: usize) -> impl Iterator<Item = char> {
    VARGA.into_iter().map(move |varga| varga[column])
}

/// Picks the first resolution of a pratyahara.
fn first_resolution(index: &MaheshwaraIndex, name: &str) -> Result<Vec<char>> {
    let mut resolutions = index.resolve(name).into_iter();
    let count = resolutions.len();
    let first = resolutions
        .next()
        .ok_or_else(|| VarnaError::UnresolvedPratyahara(name.to_string()))?;
    debug!(pratyahara = name, candidates = count, "Using first resolution");
    Ok(first)
}

/// Category tables for all three dimensions.
#[derive(Debug, Clone)]
pub struct ArticulationTables {
    sthaana: Table<Sthaana>,
    aabhyantara: Table<Aabhyantara>,
    baahya: Table<Baahya>,
}

impl ArticulationTables {
    /// Builds the tables. Several external-effort categories are defined by
    /// pratyaharas and are resolved through `index`.
    pub fn build(index: &MaheshwaraIndex) -> Result<Self> {
        let khar = first_resolution(index, "खर्")?;
        let hash = first_resolution(index, "हश्")?;
        let yan = first_resolution(index, "यण्")?;
        let shal = first_resolution(index, "शल्")?;

        let with_swara = |letters: &[char]| plain(letters.iter().copied().chain(SWARA));

        let sthaana = vec![
            (Sthaana::Kantha, plain(['अ', 'आ'].into_iter().chain(KANTHYA).chain(['ह', VISARGA]))),
            (Sthaana::Taalu, plain(['इ', 'ई'].into_iter().chain(TALAVYA).chain(['य', 'श']))),
            (Sthaana::Murdha, plain(['ऋ', 'ॠ'].into_iter().chain(MURDHANYA).chain(['र', 'ष']))),
            (Sthaana::Danta, plain(['ऌ', 'ॡ'].into_iter().chain(DANTYA).chain(['ल', 'स']))),
            (Sthaana::Oshtha, plain(['उ', 'ऊ'].into_iter().chain(AUSHTHYA).chain([UPADHMANIYA]))),
            (Sthaana::Naasika, plain(varga_column(4).chain([ANUSWARA]))),
            (Sthaana::KanthaTaalu, plain(['ए', 'ऐ'])),
            (Sthaana::KanthaOshtha, plain(['ओ', 'औ'])),
            (Sthaana::DantaOshtha, plain(['व'])),
            (Sthaana::Jihvaamula, plain([JIHVAAMULIYA])),
        ];

        let aabhyantara = vec![
            (Aabhyantara::Sprshta, plain(VARGA.into_iter().flatten())),
            (Aabhyantara::IshatSprshta, plain(ANTAHSTHA)),
            (Aabhyantara::IshadVivrta, plain(USHMA.into_iter().chain([JIHVAAMULIYA, UPADHMANIYA]))),
            (
                Aabhyantara::Vivrta,
                plain(SWARA[1..].iter().copied().chain([CHANDRABINDU, ANUSWARA, VISARGA])),
            ),
            (Aabhyantara::Samvrta, plain([SWARA[0]])),
        ];

        let alpapraana = varga_column(0)
            .chain(varga_column(2))
            .chain(varga_column(4))
            .chain(yan)
            .chain(SWARA)
            .chain([CHANDRABINDU, ANUSWARA]);
        let mahaapraana = varga_column(1)
            .chain(varga_column(3))
            .chain(shal)
            .chain([VISARGA, JIHVAAMULIYA, UPADHMANIYA]);
        let accented = |accent: char| -> HashSet<Letter> {
            SWARA
                .into_iter()
                .map(|base| Letter { base, accent: Some(accent) })
                .collect()
        };

        let baahya = vec![
            (Baahya::Vivaara, plain(khar.iter().copied())),
            (Baahya::Samvaara, with_swara(&hash)),
            (Baahya::Shvaasa, plain(khar.iter().copied())),
            (Baahya::Naada, with_swara(&hash)),
            (Baahya::Ghosha, with_swara(&hash)),
            (Baahya::Aghosha, plain(khar.iter().copied())),
            (Baahya::Alpapraana, plain(alpapraana)),
            (Baahya::Mahaapraana, plain(mahaapraana)),
            (Baahya::Udaatta, plain(SWARA)),
            (Baahya::Anudaatta, accented(ANUDATTA)),
            (Baahya::Swarita, accented(SWARITA)),
        ];

        Ok(Self {
            sthaana,
            aabhyantara,
            baahya,
        })
    }

    /// Classifies a single letter. Consonants may be given with or without
    /// virama. Unknown letters belong to no category.
    pub fn classify(&self, letter: &str) -> Signature {
        let Some(letter) = Letter::parse(letter) else {
            return Signature::default();
        };
        fn members<C: Category>(table: &Table<C>, letter: &Letter) -> BTreeSet<C> {
            table
                .iter()
                .filter(|(_, letters)| letters.contains(letter))
                .map(|(category, _)| *category)
                .collect()
        }
        Signature {
            sthaana: members(&self.sthaana, &letter),
            aabhyantara: members(&self.aabhyantara, &letter),
            baahya: members(&self.baahya, &letter),
        }
    }

    /// Letters of one category, for inspection.
    pub fn members(&self, dimension: Dimension, abbrev: &str) -> Vec<Letter> {
        fn find<C: Category>(table: &Table<C>, abbrev: &str) -> Vec<Letter> {
            table
                .iter()
                .find(|(category, _)| category.abbrev() == abbrev)
                .map(|(_, letters)| letters.iter().copied().collect())
                .unwrap_or_default()
        }
        match dimension {
            Dimension::Sthaana => find(&self.sthaana, abbrev),
            Dimension::Aabhyantara => find(&self.aabhyantara, abbrev),
            Dimension::Baahya => find(&self.baahya, abbrev),
        }
    }
}
