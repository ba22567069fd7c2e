//! Lexing phase: text to words.

use eidos_ir::{Axis, FieldId, Literal, Operation, Phoneme, PhonemeClass};
use eidos_lexer::{tokenize, LexErrorKind, PhonemeStream, Syllables, WordTable};
use pretty_assertions::assert_eq;

use crate::common::spell_text;

fn operations(text: &str) -> Vec<Operation> {
    tokenize(text)
        .unwrap()
        .into_iter()
        .map(|token| token.operation)
        .collect()
}

#[test]
fn test_separators_and_case() {
    assert_eq!(operations("ta pa"), operations("TA-PA"));
    assert_eq!(operations("Ta'Pa"), operations("TAPA"));
    assert_eq!(operations("  \tTA\nPA  "), operations("TAPA"));
}

#[test]
fn test_mixed_single_and_compound_words() {
    assert_eq!(
        operations("RIWAKITIWIRA"),
        vec![
            Operation::ReadField(FieldId::Position),
            Operation::Axis(Axis::Z),
            Operation::Literal(Literal::Two),
            Operation::ReadField(FieldId::Force),
        ]
    );
}

#[test]
fn test_every_word_round_trips_alone() {
    for (word, operation) in WordTable::global().entries() {
        assert_eq!(operations(&word.to_string()), vec![operation], "{word}");
    }
}

#[test]
fn test_error_offsets_point_into_text() {
    let err = tokenize("TA PA QA").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::InvalidPhoneme { symbol: 'Q' });
    assert_eq!(err.offset, 6);

    let err = tokenize("TA PK").unwrap_err();
    assert_eq!(
        err.kind,
        LexErrorKind::MalformedSyllable {
            expected: PhonemeClass::Vowel,
            found: Some(Phoneme::from_char('k').unwrap()),
        }
    );
    assert_eq!(err.offset, 4);

    let err = tokenize("TA WO").unwrap_err();
    assert!(matches!(err.kind, LexErrorKind::UnknownWord { .. }));
    assert_eq!(err.offset, 3);
}

#[test]
fn test_syllables_stage_alone() {
    let syllables: Vec<String> = Syllables::new(PhonemeStream::new("wa-ka ri"))
        .map(|s| s.unwrap().1.to_string())
        .collect();
    assert_eq!(syllables, vec!["WA", "KA", "RI"]);
}

#[test]
fn test_rendered_text_is_canonical() {
    let text = spell_text(&[
        Operation::Literal(Literal::Pi),
        Operation::Clear,
        Operation::Slot,
    ]);
    assert_eq!(text, "KO WOLA WESA");
}
