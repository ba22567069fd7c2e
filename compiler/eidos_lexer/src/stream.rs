//! Phoneme stream over spell text or pre-classified phonemes.
//!
//! Text input is case-insensitive. ASCII whitespace, `-` and `'` separate
//! syllables visually and are skipped. Offsets count characters of the
//! source text (separators included), so they line up with the text shown
//! to the caster.

use std::slice;
use std::str::Chars;

use eidos_ir::Phoneme;

use crate::lex_error::{LexError, LexErrorKind};

#[derive(Clone, Debug)]
enum Source<'a> {
    Text(Chars<'a>),
    Phonemes(slice::Iter<'a, Phoneme>),
}

/// Lazy, finite, restartable stream of `(offset, Phoneme)`.
///
/// The stream stops after the first invalid symbol.
#[derive(Clone, Debug)]
pub struct PhonemeStream<'a> {
    origin: Source<'a>,
    cursor: Source<'a>,
    offset: usize,
    failed: bool,
}

impl<'a> PhonemeStream<'a> {
    /// Stream over spell text.
    pub fn new(text: &'a str) -> Self {
        Self::from_source(Source::Text(text.chars()))
    }

    /// Stream over phonemes an external recognizer already classified.
    pub fn from_phonemes(phonemes: &'a [Phoneme]) -> Self {
        Self::from_source(Source::Phonemes(phonemes.iter()))
    }

    fn from_source(source: Source<'a>) -> Self {
        PhonemeStream {
            origin: source.clone(),
            cursor: source,
            offset: 0,
            failed: false,
        }
    }

    /// A fresh stream positioned at the start of the same input.
    #[must_use]
    pub fn restart(&self) -> Self {
        Self::from_source(self.origin.clone())
    }
}

#[inline]
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '-' || c == '\''
}

impl Iterator for PhonemeStream<'_> {
    type Item = Result<(usize, Phoneme), LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match &mut self.cursor {
            Source::Phonemes(iter) => {
                let phoneme = *iter.next()?;
                let offset = self.offset;
                self.offset += 1;
                Some(Ok((offset, phoneme)))
            }
            Source::Text(chars) => loop {
                let c = chars.next()?;
                let offset = self.offset;
                self.offset += 1;
                if is_separator(c) {
                    continue;
                }
                return match Phoneme::from_char(c) {
                    Some(phoneme) => Some(Ok((offset, phoneme))),
                    None => {
                        self.failed = true;
                        Some(Err(LexError::new(
                            LexErrorKind::InvalidPhoneme { symbol: c },
                            offset,
                        )))
                    }
                };
            },
        }
    }
}
