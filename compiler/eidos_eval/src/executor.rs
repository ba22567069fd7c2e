//! The spell executor.
//!
//! A state machine over a loaded word sequence:
//!
//! ```text
//! Ready --load--> Executing --step*--> Terminal(Completed | Failed | Abandoned)
//!   ^                                          |
//!   +------------------reset-------------------+
//! ```
//!
//! Each [`step`](SpellExecutor::step) resolves one word against the table
//! and applies it. Field writes reach the registry immediately and are never
//! rolled back; a later failure leaves them committed.

use eidos_ir::{FieldId, Operation, Value, Word};
use eidos_lexer::WordTable;

use crate::errors::EvalError;
use crate::operators::{apply, Effect};
use crate::registry::FieldRegistry;
use crate::stack::OperandStack;
use crate::variables::Variables;

/// Resource limits for a single execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub max_stack_depth: usize,
    pub max_variables: usize,
}

impl Limits {
    pub const DEFAULT_STACK_DEPTH: usize = 64;
    pub const DEFAULT_VARIABLES: usize = 16;
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_stack_depth: Self::DEFAULT_STACK_DEPTH,
            max_variables: Self::DEFAULT_VARIABLES,
        }
    }
}

/// Coarse executor state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecState {
    Ready,
    Executing,
    Terminal,
}

/// A field write committed during execution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldWrite {
    pub field: FieldId,
    pub value: Value,
    /// Index of the word that performed the write.
    pub word_index: usize,
}

/// How an execution ended.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Every word applied.
    Completed { writes: Vec<FieldWrite> },
    /// The word at `word_index` failed; later words never ran.
    Failed {
        error: EvalError,
        word_index: usize,
        /// What the failing word means, `None` if the table does not know it.
        operation: Option<Operation>,
    },
    /// The caller stopped execution before the word at `word_index`.
    Abandoned {
        writes: Vec<FieldWrite>,
        word_index: usize,
    },
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed { .. })
    }

    pub fn error(&self) -> Option<&EvalError> {
        match self {
            Outcome::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug)]
enum Phase {
    Ready,
    Executing,
    Terminal(Outcome),
}

/// Executes one spell at a time against a field registry.
pub struct SpellExecutor<'a> {
    table: &'a WordTable,
    registry: &'a dyn FieldRegistry,
    stack: OperandStack,
    variables: Variables,
    words: Vec<Word>,
    cursor: usize,
    writes: Vec<FieldWrite>,
    phase: Phase,
}

impl<'a> SpellExecutor<'a> {
    pub fn new(table: &'a WordTable, registry: &'a dyn FieldRegistry, limits: Limits) -> Self {
        SpellExecutor {
            table,
            registry,
            stack: OperandStack::new(limits.max_stack_depth),
            variables: Variables::new(limits.max_variables),
            words: Vec::new(),
            cursor: 0,
            writes: Vec::new(),
            phase: Phase::Ready,
        }
    }

    pub fn state(&self) -> ExecState {
        match self.phase {
            Phase::Ready => ExecState::Ready,
            Phase::Executing => ExecState::Executing,
            Phase::Terminal(_) => ExecState::Terminal,
        }
    }

    /// Load a spell and start executing it.
    ///
    /// Any previous execution is discarded first, as if by [`reset`](Self::reset).
    pub fn load(&mut self, words: impl IntoIterator<Item = Word>) {
        self.reset();
        self.words.extend(words);
        self.phase = Phase::Executing;
        tracing::debug!(words = self.words.len(), "spell loaded");
    }

    /// Apply the next word. Does nothing unless executing.
    #[tracing::instrument(level = "trace", skip(self), fields(index = self.cursor))]
    pub fn step(&mut self) -> ExecState {
        if !matches!(self.phase, Phase::Executing) {
            return self.state();
        }
        let Some(word) = self.words.get(self.cursor) else {
            self.finish();
            return self.state();
        };
        let index = self.cursor;

        let operation = self.table.resolve(word);
        let result = match operation {
            Some(operation) => {
                tracing::trace!(%word, %operation, "apply");
                apply(operation, &mut self.stack, &mut self.variables, self.registry)
            }
            None => Err(EvalError::UnknownWord { word: word.clone() }),
        };

        match result {
            Ok(Effect::None) => {}
            Ok(Effect::Wrote(field, value)) => {
                tracing::debug!(%field, %value, word_index = index, "field written");
                self.writes.push(FieldWrite {
                    field,
                    value,
                    word_index: index,
                });
            }
            Err(error) => {
                tracing::warn!(%error, word_index = index, "spell failed");
                self.phase = Phase::Terminal(Outcome::Failed {
                    error,
                    word_index: index,
                    operation,
                });
                return ExecState::Terminal;
            }
        }

        self.cursor += 1;
        if self.cursor == self.words.len() {
            self.finish();
        }
        self.state()
    }

    fn finish(&mut self) {
        tracing::debug!(writes = self.writes.len(), "spell completed");
        self.phase = Phase::Terminal(Outcome::Completed {
            writes: self.writes.clone(),
        });
    }

    /// Step until terminal. `None` if nothing is loaded.
    #[tracing::instrument(level = "debug", skip(self), fields(words = self.words.len()))]
    pub fn run(&mut self) -> Option<&Outcome> {
        while matches!(self.phase, Phase::Executing) {
            self.step();
        }
        self.outcome()
    }

    /// Stop before the next word. Only meaningful while executing.
    pub fn abandon(&mut self) {
        if matches!(self.phase, Phase::Executing) {
            tracing::debug!(word_index = self.cursor, "spell abandoned");
            self.phase = Phase::Terminal(Outcome::Abandoned {
                writes: self.writes.clone(),
                word_index: self.cursor,
            });
        }
    }

    /// Back to Ready with an empty stack and no variables.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.variables.clear();
        self.words.clear();
        self.writes.clear();
        self.cursor = 0;
        self.phase = Phase::Ready;
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.phase {
            Phase::Terminal(outcome) => Some(outcome),
            Phase::Ready | Phase::Executing => None,
        }
    }

    /// Bottom-to-top stack contents.
    pub fn stack(&self) -> &[Value] {
        self.stack.as_slice()
    }

    /// Writes committed so far.
    pub fn writes(&self) -> &[FieldWrite] {
        &self.writes
    }

    /// Index of the next word to apply.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
