use std::collections::BTreeSet;
use varna_core::core::articulation::Sthaana;
use varna_core::{
    fix_anuswara, join_varna, split_varna_flat, syllabify, syllables, Dimension, RangeError,
    VarnaEngine,
};

#[test]
fn two_words_split_and_join() {
    let flat = split_varna_flat("कवि भारतः", true);
    let tokens: Vec<String> = flat.iter().map(ToString::to_string).collect();
    assert_eq!(
        tokens,
        ["क्", "-अ", "व्", "ि", " ", "भ्", "ा", "र्", "-अ", "त्", "-अ", "ः"]
    );
    assert_eq!(join_varna(&flat, true), "कवि भारतः");
}

#[test]
fn syllables_of_a_line() {
    assert_eq!(syllabify("कवि", false), ["क", "वि"]);
    assert_eq!(
        syllables("कवि भारतः", false),
        vec![vec![vec!["क", "वि"], vec!["भा", "र", "तः"]]]
    );
}

#[test]
fn anusvara_before_first_varga() {
    assert_eq!(fix_anuswara("\u{0902}क"), "ङ्क");
    assert_eq!(fix_anuswara("शंकर"), "शङ्कर");
}

#[test]
fn first_consonant_is_velar() {
    let engine = VarnaEngine::new().unwrap();
    assert_eq!(engine.classify("क").sthaana, BTreeSet::from([Sthaana::Kantha]));
    assert_eq!(engine.label("क्", Dimension::Sthaana, false), "कण्ठः");
}

#[test]
fn some_letter_has_two_places() {
    let engine = VarnaEngine::new().unwrap();
    let dual: Vec<&str> = ["क्", "ङ्", "ञ्", "ए", "ण्", "न्", "म्"]
        .into_iter()
        .filter(|letter| engine.classify(letter).sthaana.len() > 1)
        .collect();
    assert_eq!(dual, ["ङ्", "ञ्", "ण्", "न्", "म्"]);
}

#[test]
fn contiguous_run_forms_and_resolves() {
    let engine = VarnaEngine::new().unwrap();
    let letters = ['श', 'ष', 'स'];
    let name = engine.form_pratyahara(&letters).unwrap();
    assert_eq!(name.to_string(), "शर्");
    assert!(engine
        .resolve_pratyahara("शर्")
        .iter()
        .any(|set| set.iter().copied().collect::<BTreeSet<_>>() == BTreeSet::from(letters)));
}

#[test]
fn open_run_is_reported() {
    let engine = VarnaEngine::new().unwrap();
    assert_eq!(engine.form_pratyahara(&['क']), Err(RangeError::NotClosed));
    assert!(engine.resolve_pratyahara("garbage").is_empty());
}
