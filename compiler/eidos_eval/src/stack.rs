//! The operand stack.
//!
//! Operations never consume operands partially: [`OperandStack::check`]
//! validates arity and kinds against a signature while the stack is still
//! untouched, and [`OperandStack::replace_top`] swaps operands for results
//! in one step once the effect has been computed.

use eidos_ir::{KindConstraint, Signature, Value};
use smallvec::SmallVec;

use crate::errors::{operand_mismatch, stack_underflow, type_mismatch, EvalError, EvalResult};

/// Operand or result buffer for a single operation.
pub type Operands = SmallVec<[Value; 3]>;

/// Bounded LIFO of [`Value`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct OperandStack {
    values: Vec<Value>,
    limit: usize,
}

impl OperandStack {
    pub fn new(limit: usize) -> Self {
        OperandStack {
            values: Vec::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bottom-to-top view.
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    pub fn top(&self) -> Option<&Value> {
        self.values.last()
    }

    pub fn push(&mut self, value: Value) -> EvalResult<()> {
        if self.values.len() >= self.limit {
            return Err(EvalError::StackOverflow { limit: self.limit });
        }
        self.values.push(value);
        Ok(())
    }

    /// Pop the top value if it satisfies `constraint`.
    pub fn pop(&mut self, constraint: KindConstraint) -> EvalResult<Value> {
        let top = *self.values.last().ok_or_else(|| stack_underflow(1, 0))?;
        if !constraint.admits(top.kind()) {
            return Err(type_mismatch(constraint, top.kind()));
        }
        self.values.pop();
        Ok(top)
    }

    /// Check arity and operand kinds without touching the stack.
    ///
    /// The top of the stack is matched against the last constraint.
    pub fn check(&self, signature: &Signature) -> EvalResult<()> {
        let arity = signature.arity();
        let available = self.values.len();
        if available < arity {
            return Err(stack_underflow(arity, available));
        }
        let operands = &self.values[available - arity..];
        let pairs = signature.operands.iter().zip(operands).enumerate();
        for (position, (constraint, value)) in pairs.rev() {
            if !constraint.admits(value.kind()) {
                return Err(operand_mismatch(position, *constraint, value.kind()));
            }
        }
        Ok(())
    }

    /// Copy the top `count` values, bottom-to-top.
    ///
    /// Callers run [`check`](Self::check) first.
    pub fn peek_top(&self, count: usize) -> EvalResult<Operands> {
        let available = self.values.len();
        if available < count {
            return Err(stack_underflow(count, available));
        }
        Ok(self.values[available - count..].iter().copied().collect())
    }

    /// Check, then pop, the operands of `signature` as one unit.
    pub fn pop_operands(&mut self, signature: &Signature) -> EvalResult<Operands> {
        self.check(signature)?;
        let operands = self.peek_top(signature.arity())?;
        self.values.truncate(self.values.len() - operands.len());
        Ok(operands)
    }

    /// Replace the top `count` values with `results`.
    ///
    /// Fails without changing the stack if the results would not fit.
    pub fn replace_top(&mut self, count: usize, results: &[Value]) -> EvalResult<()> {
        let available = self.values.len();
        if available < count {
            return Err(stack_underflow(count, available));
        }
        if available - count + results.len() > self.limit {
            return Err(EvalError::StackOverflow { limit: self.limit });
        }
        self.values.truncate(available - count);
        self.values.extend_from_slice(results);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests;
