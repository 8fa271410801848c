use proptest::prelude::*;
use proptest::sample::select;
use varna_core::core::alphabet::{
    ANTAHSTHA, AVAGRAHA, AYOGAVAAHA, AYOGAVAAHA_COMMON, HALANTA, MATRA, OM, SWARA, USHMA, VARGA,
    VEDIC_MARKS,
};
use varna_core::{join_varna, split_varna_flat, split_varna_word, syllabify, MaheshwaraIndex};

fn consonants() -> Vec<char> {
    VARGA
        .iter()
        .flatten()
        .chain(ANTAHSTHA.iter())
        .chain(USHMA.iter())
        .copied()
        .collect()
}

/// One written syllable: a vowel, a consonant cluster with an optional sign,
/// a dead consonant or a special symbol, each optionally followed by a mark.
fn syllable() -> impl Strategy<Value = String> {
    let vowel = (
        select(SWARA.to_vec()),
        proptest::option::of(select(AYOGAVAAHA_COMMON.to_vec())),
    )
        .prop_map(|(v, mark)| v.to_string() + &mark.map(String::from).unwrap_or_default());
    let cluster = (
        proptest::collection::vec(select(consonants()), 1..4),
        proptest::option::of(select(MATRA.to_vec())),
        proptest::option::of(select(AYOGAVAAHA_COMMON.to_vec())),
    )
        .prop_map(|(cs, matra, mark)| {
            let mut s = cs
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(&HALANTA.to_string());
            s.extend(matra);
            s.extend(mark);
            s
        });
    let dead = select(consonants()).prop_map(|c| format!("{c}{HALANTA}"));
    let special = select(vec![AVAGRAHA, OM]).prop_map(String::from);
    prop_oneof![4 => cluster, 2 => vowel, 1 => dead, 1 => special]
}

fn word() -> impl Strategy<Value = String> {
    proptest::collection::vec(syllable(), 1..6).prop_map(|parts| parts.concat())
}

/// Any mix of alphabet characters, well-formed or not.
fn alphabet_soup() -> impl Strategy<Value = String> {
    let mut chars = consonants();
    chars.extend(SWARA);
    chars.extend(MATRA);
    chars.extend(AYOGAVAAHA);
    chars.extend(VEDIC_MARKS);
    chars.extend([HALANTA, AVAGRAHA, OM]);
    proptest::collection::vec(select(chars), 0..12)
        .prop_map(|cs| cs.into_iter().collect::<String>())
}

proptest! {
    #[test]
    fn technical_split_joins_back(text in word()) {
        let viccheda = split_varna_word(&text, true);
        prop_assert_eq!(join_varna(&viccheda, true), text);
    }

    #[test]
    fn technical_split_joins_back_on_any_word(text in alphabet_soup()) {
        let viccheda = split_varna_word(&text, true);
        prop_assert_eq!(join_varna(&viccheda, true), text);
    }

    #[test]
    fn flat_text_split_joins_back(words in proptest::collection::vec(word(), 1..5)) {
        let text = words.join(" ");
        let flat = split_varna_flat(&text, true);
        prop_assert_eq!(join_varna(&flat, true), text);
    }

    #[test]
    fn syllables_cover_any_word(word in alphabet_soup(), technical in any::<bool>()) {
        prop_assert_eq!(syllabify(&word, technical).concat(), word);
    }

    #[test]
    fn formed_pratyahara_resolves_to_its_letters(start in 0usize..43, len in 1usize..9) {
        let index = MaheshwaraIndex::new();
        let positioned: Vec<char> = index
            .krama()
            .iter()
            .filter(|entry| entry.position.is_some())
            .map(|entry| entry.letter)
            .collect();
        let end = (start + len).min(positioned.len());
        let letters = &positioned[start..end];
        // 'ह' sits at two positions; a run holding both collapses on dedup
        prop_assume!(letters.iter().filter(|&&c| c == 'ह').count() < 2);

        if let Ok(name) = index.form_pratyahara(letters) {
            let sets = index.resolve_pratyahara(&name);
            for letter in letters {
                prop_assert!(sets.iter().any(|set| set.contains(letter)), "{letter} not in {name}");
            }
        }
    }

    #[test]
    fn runs_closed_by_a_marker_always_form(start in 0usize..43, len in 1usize..9) {
        let index = MaheshwaraIndex::new();
        let krama = index.krama();
        let slots: Vec<usize> = (0..krama.len()).filter(|&i| krama[i].position.is_some()).collect();
        let end = (start + len).min(slots.len());
        let run = &slots[start..end];
        let letters: Vec<char> = run.iter().map(|&i| krama[i].letter).collect();
        prop_assume!(letters.iter().filter(|&&c| c == 'ह').count() < 2);

        let last = run[run.len() - 1];
        if krama.get(last + 1).is_some_and(|entry| entry.is_marker()) {
            prop_assert!(index.form_pratyahara(&letters).is_ok());
        }
    }
}
