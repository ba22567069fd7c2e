//! Stack operations and their signatures.
//!
//! Every word resolves to exactly one `Operation`. The signature fixes the
//! arity and the accepted kind at each operand position; positions are
//! listed bottom-to-top, so the last constraint applies to the top of the
//! stack.

use std::fmt;

use crate::field::FieldId;
use crate::value::{Axis, Kind, KindConstraint, Value, Vector};

/// A constant pushed by a literal word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Literal {
    Zero,
    One,
    Two,
    Five,
    Ten,
    Pi,
    Origin,
    UnitX,
    UnitY,
    UnitZ,
}

impl Literal {
    pub fn value(self) -> Value {
        match self {
            Literal::Zero => Value::Scalar(0.0),
            Literal::One => Value::Scalar(1.0),
            Literal::Two => Value::Scalar(2.0),
            Literal::Five => Value::Scalar(5.0),
            Literal::Ten => Value::Scalar(10.0),
            Literal::Pi => Value::Scalar(std::f64::consts::PI),
            Literal::Origin => Value::Vector(Vector::ZERO),
            Literal::UnitX => Value::Vector(Vector::X),
            Literal::UnitY => Value::Vector(Vector::Y),
            Literal::UnitZ => Value::Vector(Vector::Z),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Literal::Zero => "Zero",
            Literal::One => "One",
            Literal::Two => "Two",
            Literal::Five => "Five",
            Literal::Ten => "Ten",
            Literal::Pi => "Pi",
            Literal::Origin => "Origin",
            Literal::UnitX => "Unit X",
            Literal::UnitY => "Unit Y",
            Literal::UnitZ => "Unit Z",
        }
    }
}

/// What an operation leaves on the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultKind {
    /// Nothing is pushed (drops, declarations, field writes).
    None,
    Scalar,
    Vector,
    /// One value whose kind follows the operands (`Negate`, `Add`, ...).
    Operand,
    /// The operands come back in a new order, possibly duplicated.
    Shuffle,
}

/// Arity, operand constraints and result of an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    /// Bottom-to-top operand constraints.
    pub operands: &'static [KindConstraint],
    pub result: ResultKind,
}

impl Signature {
    const fn new(operands: &'static [KindConstraint], result: ResultKind) -> Self {
        Signature { operands, result }
    }

    #[inline]
    pub const fn arity(&self) -> usize {
        self.operands.len()
    }
}

const NONE: &[KindConstraint] = &[];
const S: &[KindConstraint] = &[KindConstraint::Scalar];
const V: &[KindConstraint] = &[KindConstraint::Vector];
const E: &[KindConstraint] = &[KindConstraint::Either];
const SS: &[KindConstraint] = &[KindConstraint::Scalar, KindConstraint::Scalar];
const VV: &[KindConstraint] = &[KindConstraint::Vector, KindConstraint::Vector];
const EE: &[KindConstraint] = &[KindConstraint::Either, KindConstraint::Either];
const SSS: &[KindConstraint] = &[
    KindConstraint::Scalar,
    KindConstraint::Scalar,
    KindConstraint::Scalar,
];
const EES: &[KindConstraint] = &[
    KindConstraint::Either,
    KindConstraint::Either,
    KindConstraint::Scalar,
];
const EEE: &[KindConstraint] = &[
    KindConstraint::Either,
    KindConstraint::Either,
    KindConstraint::Either,
];

/// A stack operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    Literal(Literal),

    // Scalar unary
    Sign,
    Negate,
    Reciprocal,
    Abs,
    Sqrt,

    // Vector
    Magnitude,
    Normalize,
    Dot,
    Cross,
    Compose,
    Axis(Axis),
    /// `earlier later interval -> (later - earlier) / interval`, the finite
    /// difference of two readings of the same kind.
    Derivative,

    // Binary arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Max,

    // Combinators
    Dup,
    Drop,
    Swap,
    Over,
    Rotate,
    Clear,

    // Variables
    ScalarVar,
    VectorVar,
    Store,
    LoadScalar,
    LoadVector,
    Slot,

    // Fields
    ReadField(FieldId),
    WriteField(FieldId),
}

impl Operation {
    pub fn signature(self) -> Signature {
        use ResultKind as R;
        match self {
            Operation::Literal(lit) => match lit.value().kind() {
                Kind::Scalar => Signature::new(NONE, R::Scalar),
                Kind::Vector => Signature::new(NONE, R::Vector),
            },
            Operation::Sign | Operation::Reciprocal | Operation::Abs | Operation::Sqrt => {
                Signature::new(S, R::Scalar)
            }
            Operation::Negate => Signature::new(E, R::Operand),
            Operation::Magnitude | Operation::Axis(_) => Signature::new(V, R::Scalar),
            Operation::Normalize => Signature::new(V, R::Vector),
            Operation::Dot => Signature::new(VV, R::Scalar),
            Operation::Cross => Signature::new(VV, R::Vector),
            Operation::Compose => Signature::new(SSS, R::Vector),
            Operation::Derivative => Signature::new(EES, R::Operand),
            Operation::Add | Operation::Subtract | Operation::Multiply | Operation::Divide => {
                Signature::new(EE, R::Operand)
            }
            Operation::Max => Signature::new(SS, R::Scalar),
            Operation::Dup => Signature::new(E, R::Shuffle),
            Operation::Drop => Signature::new(E, R::None),
            Operation::Swap | Operation::Over => Signature::new(EE, R::Shuffle),
            Operation::Rotate => Signature::new(EEE, R::Shuffle),
            Operation::Clear | Operation::ScalarVar | Operation::VectorVar => {
                Signature::new(NONE, R::None)
            }
            Operation::Store => Signature::new(E, R::None),
            Operation::LoadScalar => Signature::new(NONE, R::Scalar),
            Operation::LoadVector => Signature::new(NONE, R::Vector),
            Operation::Slot => Signature::new(S, R::Operand),
            Operation::ReadField(field) => match field.kind() {
                Kind::Scalar => Signature::new(NONE, R::Scalar),
                Kind::Vector => Signature::new(NONE, R::Vector),
            },
            Operation::WriteField(field) => match field.kind() {
                Kind::Scalar => Signature::new(S, R::None),
                Kind::Vector => Signature::new(V, R::None),
            },
        }
    }

    #[inline]
    pub fn arity(self) -> usize {
        self.signature().arity()
    }

    /// The field this operation reads or writes, if any.
    pub const fn field(self) -> Option<FieldId> {
        match self {
            Operation::ReadField(field) | Operation::WriteField(field) => Some(field),
            _ => None,
        }
    }

    /// Whether this operation is kept when a spell is etched into a conduit.
    ///
    /// Clearing only makes sense while speaking a spell live.
    pub const fn is_etchable(self) -> bool {
        !matches!(self, Operation::Clear)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Literal(lit) => lit.name(),
            Operation::Sign => "Sign",
            Operation::Negate => "Negate",
            Operation::Reciprocal => "Reciprocal",
            Operation::Abs => "Abs",
            Operation::Sqrt => "Sqrt",
            Operation::Magnitude => "Magnitude",
            Operation::Normalize => "Normalize",
            Operation::Dot => "Dot",
            Operation::Cross => "Cross",
            Operation::Compose => "Compose",
            Operation::Axis(axis) => return write!(f, "Axis {axis}"),
            Operation::Derivative => "Derivative",
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
            Operation::Multiply => "Multiply",
            Operation::Divide => "Divide",
            Operation::Max => "Max",
            Operation::Dup => "Dup",
            Operation::Drop => "Drop",
            Operation::Swap => "Swap",
            Operation::Over => "Over",
            Operation::Rotate => "Rotate",
            Operation::Clear => "Clear",
            Operation::ScalarVar => "Scalar Var",
            Operation::VectorVar => "Vector Var",
            Operation::Store => "Store",
            Operation::LoadScalar => "Load Scalar",
            Operation::LoadVector => "Load Vector",
            Operation::Slot => "Slot",
            Operation::ReadField(field) => return write!(f, "Read {field}"),
            Operation::WriteField(field) => return write!(f, "Write {field}"),
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests;
