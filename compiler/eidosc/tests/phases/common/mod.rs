//! Shared helpers for phase tests.

use eidos_eval::{Execution, Interpreter, WorldFields};
use eidos_ir::{Operation, Value, Vector, Word};
use eidos_lexer::WordTable;

/// Canonical words for a list of operations.
pub fn spell(operations: &[Operation]) -> Vec<Word> {
    eidos_lexer::encode(WordTable::global(), operations).unwrap()
}

/// Canonical text for a list of operations.
pub fn spell_text(operations: &[Operation]) -> String {
    eidos_lexer::render(&spell(operations))
}

/// Cast text into `world` with the default interpreter.
pub fn cast(text: &str, world: &WorldFields) -> Execution {
    Interpreter::default().cast(text, world).unwrap()
}

pub fn scalar(n: f64) -> Value {
    Value::Scalar(n)
}

pub fn vector(x: f64, y: f64, z: f64) -> Value {
    Value::Vector(Vector::new(x, y, z))
}
