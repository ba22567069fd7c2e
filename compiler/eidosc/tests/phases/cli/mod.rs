//! Command handlers.

use eidos_eval::Outcome;
use eidos_lexer::WordTable;
use eidosc::commands::{cast_spell, lex_spell, list_words};
use eidosc::diagnostic::render_lex_error;
use eidosc::{parse_cast_options, CliError};
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

fn output(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_words_lists_whole_table() {
    let mut out = Vec::new();
    list_words(&mut out).unwrap();
    let text = output(out);
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("Old Language v1"));
    assert_eq!(lines.len(), WordTable::global().len() + 1);
    assert!(text.contains("WAKA"));
}

#[test]
fn test_lex_prints_words() {
    let mut out = Vec::new();
    lex_spell("ta pa", &mut out).unwrap();
    assert_eq!(
        output(out),
        "2 word(s)\n    0  TA     Five\n    3  PA     Sign\n"
    );
}

#[test]
fn test_lex_error_is_reported() {
    let mut out = Vec::new();
    let err = lex_spell("TA XI", &mut out).unwrap_err();
    let CliError::Lex(lex) = err else {
        panic!("expected a lex error, got {err:?}");
    };
    assert_eq!(lex.offset, 3);
    assert!(render_lex_error("TA XI", &lex).contains("invalid phoneme 'X'"));
}

#[test]
fn test_cast_seeds_and_reports() {
    let options = parse_cast_options(&args(&["--set", "Gravity=0,-9.8,0"])).unwrap();
    let mut out = Vec::new();
    let execution = cast_spell("RU PE VU", &options, &mut out).unwrap();
    assert!(execution.outcome.is_completed());

    let text = output(out);
    assert!(text.starts_with("completed\n"), "{text}");
    assert!(text.contains("writes:\n  [2] Gravity = "), "{text}");
    assert!(text.contains("stack: []"), "{text}");
    assert!(text.contains("  Heat = -"), "{text}");
}

#[test]
fn test_cast_failure_is_an_outcome() {
    let options = parse_cast_options(&args(&["--max-stack", "1"])).unwrap();
    let mut out = Vec::new();
    let execution = cast_spell("TA TE", &options, &mut out).unwrap();
    assert!(matches!(
        execution.outcome,
        Outcome::Failed { word_index: 1, .. }
    ));
    assert!(output(out).starts_with("failed at word 1 (One): stack overflow"));
}

#[test]
fn test_cast_failure_names_operand() {
    let mut out = Vec::new();
    // Unit X, Unit Y, Multiply
    cast_spell("KA KE NI", &parse_cast_options(&[]).unwrap(), &mut out).unwrap();
    assert!(output(out).starts_with(
        "failed at word 2 (Multiply): type mismatch: expected scalar, found vector (operand 1)"
    ));
}

#[test]
fn test_cast_rejects_bad_seed() {
    let options = parse_cast_options(&args(&["--set", "Heat=1,2,3"])).unwrap();
    let mut out = Vec::new();
    let err = cast_spell("TA", &options, &mut out).unwrap_err();
    assert!(matches!(err, CliError::Field(_)), "{err:?}");

    let options = parse_cast_options(&args(&["--set", "Mana=1"])).unwrap();
    let err = cast_spell("TA", &options, &mut Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "cannot seed world: unknown field `Mana`");
}
