//! Operation semantics.
//!
//! Direct enum dispatch over [`Operation`]. The effect of a word is computed
//! from a copy of its operands before the stack changes, so every failure
//! leaves the stack exactly as it was.

use eidos_ir::{FieldId, Kind, KindConstraint, Operation, Value, Vector};
use smallvec::smallvec;

use crate::errors::{
    division_by_zero, domain, operand_mismatch, type_mismatch, Domain, EvalError, EvalResult,
};
use crate::registry::FieldRegistry;
use crate::stack::{OperandStack, Operands};
use crate::variables::Variables;

/// Side effect of a successfully applied word beyond the stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    None,
    Wrote(FieldId, Value),
}

/// Apply one operation to the stack, variables and fields.
///
/// Arity and operand kinds are checked before anything is consumed.
pub fn apply(
    operation: Operation,
    stack: &mut OperandStack,
    variables: &mut Variables,
    fields: &dyn FieldRegistry,
) -> EvalResult<Effect> {
    let signature = operation.signature();
    stack.check(&signature)?;
    let operands = stack.peek_top(signature.arity())?;
    let mut effect = Effect::None;

    let results: Operands = match operation {
        Operation::Literal(literal) => smallvec![literal.value()],
        Operation::Sign
        | Operation::Negate
        | Operation::Reciprocal
        | Operation::Abs
        | Operation::Sqrt
        | Operation::Magnitude
        | Operation::Normalize
        | Operation::Axis(_) => smallvec![evaluate_unary(operation, operands[0])?],
        Operation::Dot
        | Operation::Cross
        | Operation::Add
        | Operation::Subtract
        | Operation::Multiply
        | Operation::Divide
        | Operation::Max => smallvec![evaluate_binary(operation, operands[0], operands[1])?],
        Operation::Compose => smallvec![compose(&operands)?],
        Operation::Derivative => smallvec![derivative(&operands)?],

        Operation::Dup => smallvec![operands[0], operands[0]],
        Operation::Drop => smallvec![],
        Operation::Swap => smallvec![operands[1], operands[0]],
        Operation::Over => smallvec![operands[0], operands[1], operands[0]],
        Operation::Rotate => smallvec![operands[1], operands[2], operands[0]],
        Operation::Clear => {
            stack.clear();
            return Ok(Effect::None);
        }

        Operation::ScalarVar => {
            variables.declare(Kind::Scalar)?;
            smallvec![]
        }
        Operation::VectorVar => {
            variables.declare(Kind::Vector)?;
            smallvec![]
        }
        Operation::Store => {
            variables.store(operands[0])?;
            smallvec![]
        }
        Operation::LoadScalar => smallvec![variables.load(Kind::Scalar)?],
        Operation::LoadVector => smallvec![variables.load(Kind::Vector)?],
        Operation::Slot => smallvec![variables.load_slot(slot_index(operands[0])?)?],

        Operation::ReadField(field) => smallvec![read_field(fields, field)?],
        Operation::WriteField(field) => {
            let value = operands[0];
            fields.write(field.name(), value)?;
            effect = Effect::Wrote(field, value);
            smallvec![]
        }
    };

    stack.replace_top(operands.len(), &results)?;
    Ok(effect)
}

/// Evaluate a one-operand numeric operation.
pub fn evaluate_unary(operation: Operation, operand: Value) -> EvalResult<Value> {
    let result = match (operation, operand) {
        (Operation::Negate, Value::Scalar(n)) => Value::Scalar(-n),
        (Operation::Negate, Value::Vector(v)) => Value::Vector(-v),
        (Operation::Sign, Value::Scalar(n)) => Value::Scalar(sign(n)),
        (Operation::Abs, Value::Scalar(n)) => Value::Scalar(n.abs()),
        (Operation::Reciprocal, Value::Scalar(n)) => {
            if n == 0.0 {
                return Err(division_by_zero());
            }
            Value::Scalar(n.recip())
        }
        (Operation::Sqrt, Value::Scalar(n)) => {
            if n < 0.0 {
                return Err(domain(Domain::NegativeSqrt));
            }
            Value::Scalar(n.sqrt())
        }
        (Operation::Magnitude, Value::Vector(v)) => Value::Scalar(v.magnitude()),
        (Operation::Normalize, Value::Vector(v)) => match v.normalized() {
            Some(unit) => Value::Vector(unit),
            None if v.is_finite() => return Err(domain(Domain::ZeroVector)),
            None => return Err(domain(Domain::NonFinite)),
        },
        (Operation::Axis(axis), Value::Vector(v)) => Value::Scalar(v.component(axis)),
        (_, value) => {
            return Err(mismatch(operation, 0, value));
        }
    };
    finite(result)
}

/// Evaluate a two-operand numeric operation. `left` is the deeper operand.
pub fn evaluate_binary(operation: Operation, left: Value, right: Value) -> EvalResult<Value> {
    use Value::{Scalar as S, Vector as V};

    let result = match (operation, left, right) {
        (Operation::Add, S(a), S(b)) => S(a + b),
        (Operation::Add, V(a), V(b)) => V(a + b),
        (Operation::Subtract, S(a), S(b)) => S(a - b),
        (Operation::Subtract, V(a), V(b)) => V(a - b),
        (Operation::Add | Operation::Subtract, a, b) => {
            return Err(operand_mismatch(1, a.kind(), b.kind()));
        }

        (Operation::Multiply, S(a), S(b)) => S(a * b),
        (Operation::Multiply, V(v), S(n)) | (Operation::Multiply, S(n), V(v)) => V(v * n),
        (Operation::Multiply, V(_), V(_)) => {
            return Err(operand_mismatch(1, KindConstraint::Scalar, Kind::Vector));
        }

        (Operation::Divide, S(a), S(b)) => S(a / nonzero(b)?),
        (Operation::Divide, V(v), S(n)) => V(v / nonzero(n)?),
        (Operation::Divide, _, V(_)) => {
            return Err(operand_mismatch(1, KindConstraint::Scalar, Kind::Vector));
        }

        (Operation::Max, S(a), S(b)) => S(a.max(b)),
        (Operation::Dot, V(a), V(b)) => S(a.dot(b)),
        (Operation::Cross, V(a), V(b)) => V(a.cross(b)),

        (_, left, right) => {
            let position = usize::from(left_admitted(operation, left));
            let value = if position == 0 { left } else { right };
            return Err(mismatch(operation, position, value));
        }
    };
    finite(result)
}

fn compose(operands: &[Value]) -> EvalResult<Value> {
    match operands {
        [Value::Scalar(x), Value::Scalar(y), Value::Scalar(z)] => {
            finite(Value::Vector(Vector::new(*x, *y, *z)))
        }
        _ => {
            let position = operands
                .iter()
                .position(|value| value.kind() != Kind::Scalar)
                .unwrap_or_default();
            Err(operand_mismatch(position, KindConstraint::Scalar, Kind::Vector))
        }
    }
}

/// Finite difference of two readings over `interval`.
fn derivative(operands: &[Value]) -> EvalResult<Value> {
    let [earlier, later, Value::Scalar(interval)] = *operands else {
        return Err(operand_mismatch(2, KindConstraint::Scalar, Kind::Vector));
    };
    if earlier.kind() != later.kind() {
        return Err(operand_mismatch(1, earlier.kind(), later.kind()));
    }
    let change = evaluate_binary(Operation::Subtract, later, earlier)?;
    evaluate_binary(Operation::Divide, change, Value::Scalar(interval))
}

fn nonzero(divisor: f64) -> EvalResult<f64> {
    if divisor == 0.0 {
        Err(division_by_zero())
    } else {
        Ok(divisor)
    }
}

/// Sign with `sign(0) == 0`.
fn sign(n: f64) -> f64 {
    if n > 0.0 {
        1.0
    } else if n < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "index is checked to be a non-negative whole number first"
)]
fn slot_index(value: Value) -> EvalResult<usize> {
    match value {
        Value::Scalar(n) if n >= 0.0 && n.fract() == 0.0 => Ok(n as usize),
        Value::Scalar(n) => Err(domain(Domain::InvalidSlotIndex(n))),
        Value::Vector(_) => Err(operand_mismatch(0, KindConstraint::Scalar, Kind::Vector)),
    }
}

fn read_field(fields: &dyn FieldRegistry, field: FieldId) -> EvalResult<Value> {
    let value = fields.read(field.name())?;
    if value.kind() != field.kind() {
        return Err(type_mismatch(field.kind(), value.kind()));
    }
    finite(value)
}

fn finite(value: Value) -> EvalResult<Value> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(domain(Domain::NonFinite))
    }
}

/// Whether the deeper operand already satisfies its constraint.
fn left_admitted(operation: Operation, left: Value) -> bool {
    operation
        .signature()
        .operands
        .first()
        .is_some_and(|constraint| constraint.admits(left.kind()))
}

fn mismatch(operation: Operation, position: usize, value: Value) -> EvalError {
    let expected = operation
        .signature()
        .operands
        .get(position)
        .copied()
        .unwrap_or(KindConstraint::Either);
    operand_mismatch(position, expected, value.kind())
}
