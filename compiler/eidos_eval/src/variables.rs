//! Spell-local variable slots.
//!
//! Slots are addressed by declaration order and typed at declaration.
//! `Store` and the `Load` words always target the most recently declared
//! slot of the matching kind; `Slot` reads any slot by position.

use eidos_ir::{Kind, Value};

use crate::errors::{undefined_variable, EvalError, EvalResult, VariableRef};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Slot {
    kind: Kind,
    value: Option<Value>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Variables {
    slots: Vec<Slot>,
    limit: usize,
}

impl Variables {
    pub fn new(limit: usize) -> Self {
        Variables {
            slots: Vec::new(),
            limit,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Declare a new slot of `kind`, returning its position.
    pub fn declare(&mut self, kind: Kind) -> EvalResult<usize> {
        if self.slots.len() >= self.limit {
            return Err(EvalError::VariableLimit { limit: self.limit });
        }
        self.slots.push(Slot { kind, value: None });
        Ok(self.slots.len() - 1)
    }

    fn latest(&self, kind: Kind) -> Option<usize> {
        self.slots.iter().rposition(|slot| slot.kind == kind)
    }

    /// Store into the most recent slot of the value's kind.
    pub fn store(&mut self, value: Value) -> EvalResult<()> {
        let kind = value.kind();
        let index = self
            .latest(kind)
            .ok_or_else(|| undefined_variable(VariableRef::Latest(kind)))?;
        self.slots[index].value = Some(value);
        Ok(())
    }

    /// Read the most recent slot of `kind`.
    pub fn load(&self, kind: Kind) -> EvalResult<Value> {
        self.latest(kind)
            .and_then(|index| self.slots[index].value)
            .ok_or_else(|| undefined_variable(VariableRef::Latest(kind)))
    }

    /// Read a slot by declaration position.
    pub fn load_slot(&self, index: usize) -> EvalResult<Value> {
        self.slots
            .get(index)
            .and_then(|slot| slot.value)
            .ok_or_else(|| undefined_variable(VariableRef::Slot(index)))
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
