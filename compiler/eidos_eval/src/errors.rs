//! Evaluation errors and their constructors.
//!
//! Every failure a word can produce while executing is an [`EvalError`].
//! Registry failures arrive as [`FieldError`] and convert losslessly.

use std::fmt;

use eidos_ir::{Kind, KindConstraint, Word};
use thiserror::Error;

use crate::registry::FieldError;

pub type EvalResult<T> = Result<T, EvalError>;

/// Why a numerically well-typed operation has no result.
#[derive(Clone, Debug, PartialEq)]
pub enum Domain {
    DivisionByZero,
    NegativeSqrt,
    ZeroVector,
    NonFinite,
    /// A slot index that is negative or not a whole number.
    InvalidSlotIndex(f64),
    /// A field read before the world gave it a value.
    Unavailable { field: String },
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::DivisionByZero => f.write_str("division by zero"),
            Domain::NegativeSqrt => f.write_str("square root of a negative number"),
            Domain::ZeroVector => f.write_str("cannot normalize the zero vector"),
            Domain::NonFinite => f.write_str("result is not finite"),
            Domain::InvalidSlotIndex(index) => write!(f, "{index} is not a slot index"),
            Domain::Unavailable { field } => write!(f, "field `{field}` has no value yet"),
        }
    }
}

/// A variable that could not be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariableRef {
    /// The most recently declared slot of a kind.
    Latest(Kind),
    /// A slot by declaration position.
    Slot(usize),
}

impl fmt::Display for VariableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableRef::Latest(kind) => write!(f, "{kind} variable"),
            VariableRef::Slot(index) => write!(f, "slot {index}"),
        }
    }
}

/// An error raised while executing a word.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EvalError {
    #[error("stack underflow: needed {needed} operand(s), found {available}")]
    StackUnderflow { needed: usize, available: usize },

    #[error(
        "type mismatch: expected {expected}, found {found}{}",
        .position.map(|p| format!(" (operand {p})")).unwrap_or_default()
    )]
    TypeMismatch {
        expected: KindConstraint,
        found: Kind,
        /// Operand of the word, counted from the deepest; `None` when the
        /// value did not come from the stack.
        position: Option<usize>,
    },

    #[error("domain error: {0}")]
    DomainError(Domain),

    #[error("undefined {0}")]
    UndefinedVariable(VariableRef),

    #[error("unknown field `{name}`")]
    UnknownField { name: String },

    #[error("field `{name}` cannot be written")]
    AccessDenied { name: String },

    #[error("unknown word {word}")]
    UnknownWord { word: Word },

    #[error("stack overflow: depth limit is {limit}")]
    StackOverflow { limit: usize },

    #[error("too many variables: limit is {limit}")]
    VariableLimit { limit: usize },
}

impl From<FieldError> for EvalError {
    fn from(error: FieldError) -> Self {
        match error {
            FieldError::UnknownField { name } => EvalError::UnknownField { name },
            FieldError::AccessDenied { name } => EvalError::AccessDenied { name },
            FieldError::TypeMismatch {
                expected, found, ..
            } => type_mismatch(expected, found),
            FieldError::Unavailable { name } => domain(Domain::Unavailable { field: name }),
        }
    }
}

// Constructors

#[cold]
pub fn stack_underflow(needed: usize, available: usize) -> EvalError {
    EvalError::StackUnderflow { needed, available }
}

#[cold]
pub fn type_mismatch(expected: impl Into<KindConstraint>, found: Kind) -> EvalError {
    EvalError::TypeMismatch {
        expected: expected.into(),
        found,
        position: None,
    }
}

#[cold]
pub fn operand_mismatch(
    position: usize,
    expected: impl Into<KindConstraint>,
    found: Kind,
) -> EvalError {
    EvalError::TypeMismatch {
        expected: expected.into(),
        found,
        position: Some(position),
    }
}

#[cold]
pub fn domain(reason: Domain) -> EvalError {
    EvalError::DomainError(reason)
}

#[cold]
pub fn division_by_zero() -> EvalError {
    domain(Domain::DivisionByZero)
}

#[cold]
pub fn undefined_variable(variable: VariableRef) -> EvalError {
    EvalError::UndefinedVariable(variable)
}
