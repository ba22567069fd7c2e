//! Eidos Eval - stack machine and spell executor.
//!
//! # Architecture
//!
//! - `OperandStack`: bounded value stack with all-or-nothing operand checks
//! - `apply`: direct enum dispatch over `Operation`
//! - `Variables`: spell-local typed slots
//! - `FieldRegistry`: the world surface; `WorldFields` is the in-memory one
//! - `SpellExecutor`: `Ready -> Executing -> Terminal` state machine
//! - `Interpreter`: configured entry point built with `InterpreterBuilder`

pub mod errors;
mod executor;
mod interpreter;
mod operators;
mod registry;
mod stack;
mod variables;

pub use errors::{Domain, EvalError, EvalResult, VariableRef};
pub use executor::{ExecState, FieldWrite, Limits, Outcome, SpellExecutor};
pub use interpreter::{Execution, Interpreter, InterpreterBuilder};
pub use operators::{apply, evaluate_binary, evaluate_unary, Effect};
pub use registry::{FieldError, FieldRegistry, WorldFields};
pub use stack::{OperandStack, Operands};
pub use variables::Variables;

#[cfg(test)]
mod tests;
