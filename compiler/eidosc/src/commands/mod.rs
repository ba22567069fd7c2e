//! Command handlers for the `eidos` CLI.
//!
//! Handlers write their report to any `io::Write` so the phase tests can
//! capture it; `main` passes stdout.

use std::io;

use eidos_eval::FieldError;
use eidos_lexer::LexError;
use thiserror::Error;

mod cast;
mod lex;
mod words;

pub use cast::cast_spell;
pub use lex::lex_spell;
pub use words::list_words;

/// A command that could not run to the end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("`{0}` is not a scalar or an x,y,z vector")]
    InvalidValue(String),

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("cannot seed world: {0}")]
    Field(#[from] FieldError),

    #[error(transparent)]
    Io(#[from] io::Error),
}
