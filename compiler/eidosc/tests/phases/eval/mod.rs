//! Evaluation phase: words against a world.

use eidos_eval::{
    Domain, EvalError, ExecState, FieldRegistry, FieldWrite, Interpreter, Outcome, WorldFields,
};
use eidos_ir::{FieldId, Literal, Operation};
use eidos_lexer::ConduitStone;
use pretty_assertions::assert_eq;

use crate::common::{cast, scalar, spell, spell_text, vector};

#[test]
fn test_five_sign() {
    let world = WorldFields::new();
    let execution = cast("TA PA", &world);
    assert_eq!(execution.outcome, Outcome::Completed { writes: vec![] });
    assert_eq!(execution.stack, vec![scalar(1.0)]);
}

#[test]
fn test_vector_var_then_gravity_underflows() {
    let world = WorldFields::new();
    let text = spell_text(&[Operation::VectorVar, Operation::WriteField(FieldId::Gravity)]);
    let execution = cast(&text, &world);
    assert_eq!(
        execution.outcome,
        Outcome::Failed {
            error: EvalError::StackUnderflow {
                needed: 1,
                available: 0
            },
            word_index: 1,
            operation: Some(Operation::WriteField(FieldId::Gravity)),
        }
    );
    assert_eq!(world.get(FieldId::Gravity), None);
}

#[test]
fn test_elevation_is_read_only() {
    let world = WorldFields::new();
    world.set("Elevation", scalar(300.0)).unwrap();
    let execution = cast("RA", &world);
    assert_eq!(execution.stack, vec![scalar(300.0)]);
    assert_eq!(
        world.write("Elevation", execution.stack[0]).map_err(EvalError::from),
        Err(EvalError::AccessDenied {
            name: "Elevation".to_string()
        })
    );
}

#[test]
fn test_write_through_then_failure() {
    let world = WorldFields::new();
    let text = spell_text(&[
        Operation::Literal(Literal::Ten),
        Operation::WriteField(FieldId::Heat),
        Operation::Literal(Literal::Origin),
        Operation::Normalize,
    ]);
    let execution = cast(&text, &world);
    assert_eq!(
        execution.outcome,
        Outcome::Failed {
            error: EvalError::DomainError(Domain::ZeroVector),
            word_index: 3,
            operation: Some(Operation::Normalize),
        }
    );
    assert_eq!(
        execution.writes,
        vec![FieldWrite {
            field: FieldId::Heat,
            value: scalar(10.0),
            word_index: 1,
        }]
    );
    assert_eq!(world.read("Heat"), Ok(scalar(10.0)));
}

#[test]
fn test_gravity_flip() {
    let world = WorldFields::new();
    world.set("Gravity", vector(0.0, -9.8, 0.0)).unwrap();
    let execution = cast("RU PE VU", &world);
    assert!(execution.outcome.is_completed());
    assert_eq!(world.read("Gravity"), Ok(vector(0.0, 9.8, 0.0)));
}

#[test]
fn test_push_along_position() {
    let world = WorldFields::new();
    world.set("Position", vector(3.0, 0.0, 4.0)).unwrap();
    // Position, Normalize, Ten, Multiply, write Force
    let execution = cast("RI ME TU NI VA", &world);
    assert!(execution.outcome.is_completed());
    assert_eq!(world.read("Force"), Ok(vector(6.0, 0.0, 8.0)));
}

#[test]
fn test_heat_rate_over_an_interval() {
    let world = WorldFields::new();
    world.set("Heat", scalar(26.0)).unwrap();
    // Ten, Ten, Add, Heat, Two, Derivative, write Heat
    let execution = cast("TU TU NA RO TI WUTA VE", &world);
    assert!(execution.outcome.is_completed(), "{:?}", execution.outcome);
    assert_eq!(world.read("Heat"), Ok(scalar(3.0)));
}

#[test]
fn test_reading_unseeded_field() {
    let world = WorldFields::new();
    let execution = cast("RO", &world);
    assert_eq!(
        execution.outcome.error(),
        Some(&EvalError::DomainError(Domain::Unavailable {
            field: "Heat".to_string()
        }))
    );
}

#[test]
fn test_conduit_replay_matches_live_cast() {
    let live_world = WorldFields::new();
    let replay_world = WorldFields::new();
    for world in [&live_world, &replay_world] {
        world.set("Density", scalar(4.0)).unwrap();
    }

    let operations = [
        Operation::ReadField(FieldId::Density),
        Operation::Sqrt,
        Operation::WriteField(FieldId::Heat),
    ];
    let live = cast(&spell_text(&operations), &live_world);

    let mut stone = ConduitStone::new();
    stone.etch(Interpreter::default().table(), &spell(&operations));
    let replay = Interpreter::default().replay(stone.words().to_vec(), &replay_world);

    assert_eq!(live, replay);
    assert_eq!(replay_world.read("Heat"), Ok(scalar(2.0)));
}

#[test]
fn test_stepping_by_hand() {
    let world = WorldFields::new();
    let interpreter = Interpreter::default();
    let mut executor = interpreter.executor(&world);
    executor.load(spell(&[
        Operation::Literal(Literal::One),
        Operation::Literal(Literal::Two),
        Operation::Add,
    ]));
    let mut states = Vec::new();
    while executor.state() == ExecState::Executing {
        states.push(executor.step());
    }
    assert_eq!(
        states,
        vec![ExecState::Executing, ExecState::Executing, ExecState::Terminal]
    );
    assert_eq!(executor.stack(), &[scalar(3.0)]);
}

#[test]
fn test_parallel_casts_share_world() {
    let world = WorldFields::new();
    world.set("Heat", scalar(0.0)).unwrap();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..25 {
                    // Heat, One, Add, write Heat
                    let execution = cast("RO TE NA VE", &world);
                    assert!(execution.outcome.is_completed());
                }
            });
        }
    });
    let heat = world.read("Heat").unwrap().as_scalar().unwrap();
    assert!((1.0..=100.0).contains(&heat));
}
