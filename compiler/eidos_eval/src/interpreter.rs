//! `Interpreter` and `InterpreterBuilder`: the configured entry point.

use eidos_ir::{Value, Word};
use eidos_lexer::{LexError, WordTable};

use crate::executor::{FieldWrite, Limits, Outcome, SpellExecutor};
use crate::registry::FieldRegistry;

/// Builder for [`Interpreter`].
///
/// Defaults: the global word table, a stack depth of 64 and 16 variable
/// slots.
#[derive(Clone, Copy, Debug)]
pub struct InterpreterBuilder<'t> {
    table: &'t WordTable,
    limits: Limits,
}

impl Default for InterpreterBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> InterpreterBuilder<'t> {
    pub fn new() -> Self {
        InterpreterBuilder {
            table: WordTable::global(),
            limits: Limits::default(),
        }
    }

    /// Use a different word table.
    #[must_use]
    pub fn table(mut self, table: &'t WordTable) -> Self {
        self.table = table;
        self
    }

    #[must_use]
    pub fn max_stack_depth(mut self, depth: usize) -> Self {
        self.limits.max_stack_depth = depth;
        self
    }

    #[must_use]
    pub fn max_variables(mut self, count: usize) -> Self {
        self.limits.max_variables = count;
        self
    }

    pub fn build(self) -> Interpreter<'t> {
        Interpreter {
            table: self.table,
            limits: self.limits,
        }
    }
}

/// The result of running one spell to the end.
#[derive(Clone, Debug, PartialEq)]
pub struct Execution {
    pub outcome: Outcome,
    /// Writes committed before execution ended, in order.
    pub writes: Vec<FieldWrite>,
    /// Final stack, bottom to top.
    pub stack: Vec<Value>,
}

/// Casts spells against a field registry.
#[derive(Clone, Copy, Debug)]
pub struct Interpreter<'t> {
    table: &'t WordTable,
    limits: Limits,
}

impl Default for Interpreter<'static> {
    fn default() -> Self {
        InterpreterBuilder::new().build()
    }
}

impl<'t> Interpreter<'t> {
    pub fn builder() -> InterpreterBuilder<'t> {
        InterpreterBuilder::new()
    }

    pub fn table(&self) -> &'t WordTable {
        self.table
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// A fresh executor sharing this interpreter's configuration.
    pub fn executor<'a>(&self, registry: &'a dyn FieldRegistry) -> SpellExecutor<'a>
    where
        't: 'a,
    {
        SpellExecutor::new(self.table, registry, self.limits)
    }

    /// Tokenize and execute spell text.
    ///
    /// Lexing errors abort before any word runs.
    pub fn cast(&self, text: &str, registry: &dyn FieldRegistry) -> Result<Execution, LexError> {
        let tokens = eidos_lexer::tokenize_with(self.table, text)?;
        Ok(self.replay(tokens.into_iter().map(|token| token.word), registry))
    }

    /// Execute an already tokenized word sequence, such as a conduit stone.
    pub fn replay(
        &self,
        words: impl IntoIterator<Item = Word>,
        registry: &dyn FieldRegistry,
    ) -> Execution {
        let mut executor = self.executor(registry);
        executor.load(words);
        let outcome = executor.run().cloned().unwrap_or(Outcome::Completed { writes: Vec::new() });
        Execution {
            outcome,
            writes: executor.writes().to_vec(),
            stack: executor.stack().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests;
