use super::*;
use crate::errors::EvalError;
use crate::registry::WorldFields;
use eidos_ir::{Consonant, FieldId, Literal, Operation, Syllable, Vector, Vowel};
use eidos_lexer::{ConduitStone, LexErrorKind};
use pretty_assertions::assert_eq;

#[test]
fn test_defaults() {
    let interpreter = Interpreter::default();
    assert_eq!(interpreter.limits(), Limits::default());
    assert_eq!(interpreter.limits().max_stack_depth, 64);
    assert_eq!(interpreter.limits().max_variables, 16);
    assert!(std::ptr::eq(interpreter.table(), WordTable::global()));
}

#[test]
fn test_cast_five_sign() {
    let world = WorldFields::new();
    let execution = Interpreter::default().cast("TA PA", &world).unwrap();
    assert!(execution.outcome.is_completed());
    assert_eq!(execution.stack, vec![Value::Scalar(1.0)]);
}

#[test]
fn test_cast_lex_error_runs_nothing() {
    let world = WorldFields::new();
    let err = Interpreter::default().cast("TA VE VI", &world).unwrap_err();
    assert!(matches!(err.kind, LexErrorKind::UnknownWord { .. }));
    assert_eq!(world.get(FieldId::Heat), None);
}

#[test]
fn test_elevation_cannot_be_written() {
    let world = WorldFields::new();
    world.set("Elevation", Value::Scalar(12.0)).unwrap();
    let interpreter = Interpreter::default();
    let elevation = interpreter
        .table()
        .word_for(Operation::ReadField(FieldId::Elevation))
        .cloned()
        .unwrap();
    let execution = interpreter.replay([elevation], &world);
    assert_eq!(execution.stack, vec![Value::Scalar(12.0)]);

    let value = execution.stack[0];
    assert_eq!(
        world.write("Elevation", value).map_err(EvalError::from),
        Err(EvalError::AccessDenied {
            name: "Elevation".to_string()
        })
    );
}

#[test]
fn test_builder_overrides() {
    let world = WorldFields::new();
    let interpreter = Interpreter::builder()
        .max_stack_depth(1)
        .max_variables(0)
        .build();
    let execution = interpreter.cast("TA TE", &world).unwrap();
    assert_eq!(
        execution.outcome,
        Outcome::Failed {
            error: EvalError::StackOverflow { limit: 1 },
            word_index: 1,
            operation: Some(Operation::Literal(Literal::One)),
        }
    );
    assert_eq!(execution.stack, vec![Value::Scalar(5.0)]);

    let execution = interpreter.cast("SU", &world).unwrap();
    assert_eq!(
        execution.outcome.error(),
        Some(&EvalError::VariableLimit { limit: 0 })
    );
}

#[test]
fn test_custom_table() {
    let ta = Word::single(Syllable::new(Consonant::T, Vowel::A));
    let table = WordTable::from_entries([(ta, Operation::Literal(eidos_ir::Literal::Ten))]);
    let world = WorldFields::new();
    let execution = Interpreter::builder().table(&table).build().cast("TA", &world).unwrap();
    assert_eq!(execution.stack, vec![Value::Scalar(10.0)]);
}

#[test]
fn test_conduit_replay() {
    let world = WorldFields::new();
    world.set("Gravity", Value::Vector(Vector::new(0.0, -9.8, 0.0))).unwrap();
    let interpreter = Interpreter::default();

    // Gravity, Negate, Clear, Gravity, Negate, write Gravity
    let words: Vec<Word> = eidos_lexer::tokenize("RU PE WOLA RU PE VU")
        .unwrap()
        .into_iter()
        .map(|token| token.word)
        .collect();
    let mut stone = ConduitStone::new();
    stone.etch(interpreter.table(), &words);
    assert_eq!(stone.words().len(), 5);

    let execution = interpreter.replay(stone.words().iter().cloned(), &world);
    // without Clear the first reading stays on the stack
    assert!(execution.outcome.is_completed());
    assert_eq!(execution.stack, vec![Value::Vector(Vector::new(0.0, 9.8, 0.0))]);
    assert_eq!(execution.writes.len(), 1);
    assert_eq!(
        world.get(FieldId::Gravity),
        Some(Value::Vector(Vector::new(0.0, 9.8, 0.0)))
    );
}
