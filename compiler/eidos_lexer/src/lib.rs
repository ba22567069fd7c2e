//! Lexer for the Old Language.
//!
//! Turns spell text (or pre-classified phonemes) into a sequence of
//! [`Token`]s in three lazy stages:
//!
//! 1. [`PhonemeStream`] classifies symbols and skips separators.
//! 2. [`Syllables`] pairs each consonant with its vowel.
//! 3. [`Tokenizer`] resolves word boundaries against the [`WordTable`].
//!
//! Every stage stops at its first error; a spell that fails to lex is
//! never executed.

mod conduit;
mod lex_error;
mod stream;
mod syllable;
mod table;
mod tokenizer;

pub use conduit::{encode, render, ConduitStone, EncodeError};
pub use lex_error::{LexError, LexErrorKind};
pub use stream::PhonemeStream;
pub use syllable::Syllables;
pub use table::{TableError, WordTable, LANGUAGE_VERSION};
pub use tokenizer::{Token, Tokenizer};

/// Tokenize spell text against the global word table.
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with(WordTable::global(), text)
}

/// Tokenize spell text against `table`.
#[tracing::instrument(level = "debug", skip_all, fields(chars = text.chars().count()))]
pub fn tokenize_with(table: &WordTable, text: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::from_text(table, text).collect()
}
