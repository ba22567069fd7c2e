//! Conduit encoding: operations back to canonical words and spell text.

use eidos_ir::{Operation, Word};
use thiserror::Error;

use crate::table::WordTable;

/// An operation no word in the table speaks.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("no word speaks `{operation}` (operation {index})")]
pub struct EncodeError {
    pub operation: Operation,
    pub index: usize,
}

/// Map each operation to its canonical word.
pub fn encode(table: &WordTable, operations: &[Operation]) -> Result<Vec<Word>, EncodeError> {
    operations
        .iter()
        .enumerate()
        .map(|(index, &operation)| {
            table
                .word_for(operation)
                .cloned()
                .ok_or(EncodeError { operation, index })
        })
        .collect()
}

/// Canonical spell text: words separated by single spaces.
pub fn render(words: &[Word]) -> String {
    words
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A stored word sequence, replayed later through the executor.
///
/// Etching drops words that only clear the stack; words the table does not
/// know are kept so replay reports them at their position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConduitStone {
    words: Vec<Word>,
}

impl ConduitStone {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored sequence with `words`.
    pub fn etch<'w>(&mut self, table: &WordTable, words: impl IntoIterator<Item = &'w Word>) {
        self.words = words
            .into_iter()
            .filter(|word| !matches!(table.resolve(word), Some(op) if !op.is_etchable()))
            .cloned()
            .collect();
        tracing::debug!(words = self.words.len(), "conduit etched");
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
