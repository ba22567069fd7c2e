//! Word boundary resolution.
//!
//! A single forward scan over syllables, walking the word table's prefix
//! tree with one syllable of lookahead. Because no word is a prefix of
//! another, the longest match at each position is unique and the scan
//! never backtracks.

use std::iter::Peekable;

use eidos_ir::{Operation, Phoneme, Syllable, Word};
use smallvec::SmallVec;

use crate::lex_error::{LexError, LexErrorKind};
use crate::stream::PhonemeStream;
use crate::syllable::Syllables;
use crate::table::WordTable;

/// A recognized word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub word: Word,
    pub operation: Operation,
    /// Offset of the word's first phoneme.
    pub offset: usize,
}

/// Lazy, restartable iterator of [`Token`]s.
///
/// Stops after the first error.
#[derive(Clone, Debug)]
pub struct Tokenizer<'t, 'a> {
    table: &'t WordTable,
    stream: PhonemeStream<'a>,
    syllables: Peekable<Syllables<PhonemeStream<'a>>>,
    failed: bool,
}

impl<'t, 'a> Tokenizer<'t, 'a> {
    pub fn new(table: &'t WordTable, stream: PhonemeStream<'a>) -> Self {
        Tokenizer {
            table,
            syllables: Syllables::new(stream.restart()).peekable(),
            stream,
            failed: false,
        }
    }

    /// Tokenize spell text.
    pub fn from_text(table: &'t WordTable, text: &'a str) -> Self {
        Self::new(table, PhonemeStream::new(text))
    }

    /// Tokenize pre-classified phonemes.
    pub fn from_phonemes(table: &'t WordTable, phonemes: &'a [Phoneme]) -> Self {
        Self::new(table, PhonemeStream::from_phonemes(phonemes))
    }

    /// A fresh tokenizer over the same input.
    #[must_use]
    pub fn restart(&self) -> Self {
        Self::new(self.table, self.stream.restart())
    }

    fn fail(&mut self, error: LexError) -> Option<Result<Token, LexError>> {
        tracing::debug!(%error, "tokenization failed");
        self.failed = true;
        Some(Err(error))
    }
}

impl Iterator for Tokenizer<'_, '_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let (offset, first) = match self.syllables.next()? {
            Ok(item) => item,
            Err(e) => return self.fail(e),
        };

        let table = self.table;
        let mut consumed: SmallVec<[Syllable; 2]> = SmallVec::new();
        let mut current = first;
        let mut node = table.root();
        loop {
            consumed.push(current);
            let Some(child) = table.child(node, current) else {
                return self.fail(unknown_word(consumed, offset));
            };
            node = child;

            let extends = matches!(
                self.syllables.peek(),
                Some(Ok((_, next))) if table.child(node, *next).is_some()
            );
            if !extends {
                break;
            }
            match self.syllables.next() {
                Some(Ok((_, next))) => current = next,
                _ => break,
            }
        }

        let Some(operation) = table.operation_at(node) else {
            // An unfinished compound cut short by bad input reports the input.
            if let Some(Err(error)) = self.syllables.next_if(Result::is_err) {
                return self.fail(error);
            }
            return self.fail(unknown_word(consumed, offset));
        };
        let word = Word::new(consumed)?;
        tracing::trace!(%word, %operation, offset, "word");
        Some(Ok(Token {
            word,
            operation,
            offset,
        }))
    }
}

fn unknown_word(syllables: SmallVec<[Syllable; 2]>, offset: usize) -> LexError {
    LexError::new(LexErrorKind::UnknownWord { syllables }, offset)
}
