use super::*;
use eidos_ir::{Kind, Operation, Vector};
use pretty_assertions::assert_eq;

fn stack_of(values: &[Value]) -> OperandStack {
    let mut stack = OperandStack::new(8);
    for &v in values {
        stack.push(v).unwrap();
    }
    stack
}

#[test]
fn test_push_pop() {
    let mut stack = OperandStack::new(4);
    stack.push(Value::Scalar(1.0)).unwrap();
    stack.push(Value::Vector(Vector::X)).unwrap();
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.pop(KindConstraint::Vector), Ok(Value::Vector(Vector::X)));
    assert_eq!(stack.pop(KindConstraint::Either), Ok(Value::Scalar(1.0)));
    assert!(stack.is_empty());
}

#[test]
fn test_pop_empty_underflows() {
    let mut stack = OperandStack::new(4);
    assert_eq!(
        stack.pop(KindConstraint::Scalar),
        Err(EvalError::StackUnderflow {
            needed: 1,
            available: 0
        })
    );
}

#[test]
fn test_pop_wrong_kind_leaves_value() {
    let mut stack = stack_of(&[Value::Scalar(2.0)]);
    assert_eq!(
        stack.pop(KindConstraint::Vector),
        Err(EvalError::TypeMismatch {
            expected: KindConstraint::Vector,
            found: Kind::Scalar,
            position: None,
        })
    );
    assert_eq!(stack.as_slice(), &[Value::Scalar(2.0)]);
}

#[test]
fn test_push_past_limit_overflows() {
    let mut stack = OperandStack::new(1);
    stack.push(Value::Scalar(1.0)).unwrap();
    assert_eq!(
        stack.push(Value::Scalar(2.0)),
        Err(EvalError::StackOverflow { limit: 1 })
    );
    assert_eq!(stack.len(), 1);
}

#[test]
fn test_check_matches_top_against_last_constraint() {
    // Write Gravity wants a vector on top
    let signature = Operation::WriteField(eidos_ir::FieldId::Gravity).signature();
    let stack = stack_of(&[Value::Vector(Vector::Y), Value::Scalar(1.0)]);
    assert_eq!(
        stack.check(&signature),
        Err(EvalError::TypeMismatch {
            expected: KindConstraint::Vector,
            found: Kind::Scalar,
            position: Some(0),
        })
    );

    let compose = Operation::Compose.signature();
    let stack = stack_of(&[Value::Vector(Vector::Y), Value::Scalar(1.0), Value::Scalar(1.0)]);
    assert!(matches!(
        stack.check(&compose),
        Err(EvalError::TypeMismatch {
            found: Kind::Vector,
            position: Some(0),
            ..
        })
    ));
}

#[test]
fn test_pop_operands_is_all_or_nothing() {
    let cross = Operation::Cross.signature();
    let mut stack = stack_of(&[Value::Scalar(3.0), Value::Vector(Vector::X)]);
    let before = stack.clone();
    assert!(stack.pop_operands(&cross).is_err());
    assert_eq!(stack, before);

    let mut stack = stack_of(&[Value::Vector(Vector::X)]);
    assert_eq!(
        stack.pop_operands(&cross),
        Err(EvalError::StackUnderflow {
            needed: 2,
            available: 1
        })
    );
    assert_eq!(stack.len(), 1);

    let mut stack = stack_of(&[Value::Vector(Vector::X), Value::Vector(Vector::Y)]);
    let operands = stack.pop_operands(&cross).unwrap();
    assert_eq!(
        operands.as_slice(),
        &[Value::Vector(Vector::X), Value::Vector(Vector::Y)]
    );
    assert!(stack.is_empty());
}

#[test]
fn test_replace_top_respects_limit() {
    let mut stack = OperandStack::new(2);
    stack.push(Value::Scalar(1.0)).unwrap();
    let dup = [Value::Scalar(1.0), Value::Scalar(1.0)];
    stack.replace_top(1, &dup).unwrap();
    assert_eq!(stack.len(), 2);
    assert_eq!(
        stack.replace_top(1, &dup),
        Err(EvalError::StackOverflow { limit: 2 })
    );
    assert_eq!(stack.len(), 2);
}
