use super::*;

fn syl(c: Consonant, v: Vowel) -> Syllable {
    Syllable::new(c, v)
}

#[test]
fn test_syllable_display() {
    assert_eq!(syl(Consonant::T, Vowel::A).to_string(), "TA");
    assert_eq!(syl(Consonant::W, Vowel::U).to_string(), "WU");
}

#[test]
fn test_syllable_index_covers_grid() {
    let mut seen = vec![false; Syllable::COUNT];
    for s in Syllable::all() {
        assert!(!seen[s.index()], "duplicate index for {s}");
        seen[s.index()] = true;
    }
    assert!(seen.iter().all(|&b| b));
    assert_eq!(Syllable::all().count(), 50);
}

#[test]
fn test_word_rejects_empty() {
    assert_eq!(Word::new(std::iter::empty()), None);
}

#[test]
fn test_word_display_concatenates() {
    let word = Word::new([syl(Consonant::W, Vowel::A), syl(Consonant::K, Vowel::A)]).unwrap();
    assert_eq!(word.to_string(), "WAKA");
    assert_eq!(word.len(), 2);
}

#[test]
fn test_word_phonemes() {
    let word = Word::single(syl(Consonant::P, Vowel::A));
    let phonemes: Vec<Phoneme> = word.phonemes().collect();
    assert_eq!(
        phonemes,
        vec![Phoneme::Consonant(Consonant::P), Phoneme::Vowel(Vowel::A)]
    );
}

#[test]
fn test_proper_prefix() {
    let wa = Word::single(syl(Consonant::W, Vowel::A));
    let waka = Word::new([syl(Consonant::W, Vowel::A), syl(Consonant::K, Vowel::A)]).unwrap();
    let wake = Word::new([syl(Consonant::W, Vowel::A), syl(Consonant::K, Vowel::E)]).unwrap();

    assert!(wa.is_proper_prefix_of(&waka));
    assert!(!waka.is_proper_prefix_of(&wa));
    assert!(!waka.is_proper_prefix_of(&waka));
    assert!(!waka.is_proper_prefix_of(&wake));
}

#[cfg(feature = "serde")]
#[test]
fn test_word_survives_serialization() {
    let word = Word::new([syl(Consonant::W, Vowel::A), syl(Consonant::K, Vowel::I)]).unwrap();
    let bytes = bincode::serialize(&word).unwrap_or_else(|e| panic!("serialize failed: {e}"));
    let restored: Word =
        bincode::deserialize(&bytes).unwrap_or_else(|e| panic!("deserialize failed: {e}"));
    assert_eq!(restored, word);
    assert_eq!(restored.to_string(), "WAKI");
}
