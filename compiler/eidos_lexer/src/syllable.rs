//! Syllabification: pair each consonant with the vowel that follows it.

use eidos_ir::{Phoneme, PhonemeClass, Syllable};

use crate::lex_error::{LexError, LexErrorKind};

/// Groups a phoneme stream into `(offset, Syllable)`.
///
/// The offset is that of the syllable's consonant. Stops after the first
/// error.
#[derive(Clone, Debug)]
pub struct Syllables<I> {
    phonemes: I,
    failed: bool,
}

impl<I> Syllables<I>
where
    I: Iterator<Item = Result<(usize, Phoneme), LexError>>,
{
    pub fn new(phonemes: I) -> Self {
        Syllables {
            phonemes,
            failed: false,
        }
    }

    fn fail(&mut self, error: LexError) -> Option<Result<(usize, Syllable), LexError>> {
        self.failed = true;
        Some(Err(error))
    }
}

fn malformed(expected: PhonemeClass, found: Option<Phoneme>, offset: usize) -> LexError {
    LexError::new(LexErrorKind::MalformedSyllable { expected, found }, offset)
}

impl<I> Iterator for Syllables<I>
where
    I: Iterator<Item = Result<(usize, Phoneme), LexError>>,
{
    type Item = Result<(usize, Syllable), LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let (offset, consonant) = match self.phonemes.next()? {
            Ok((offset, Phoneme::Consonant(c))) => (offset, c),
            Ok((offset, vowel @ Phoneme::Vowel(_))) => {
                return self.fail(malformed(PhonemeClass::Consonant, Some(vowel), offset));
            }
            Err(e) => return self.fail(e),
        };
        match self.phonemes.next() {
            Some(Ok((_, Phoneme::Vowel(v)))) => Some(Ok((offset, Syllable::new(consonant, v)))),
            Some(Ok((at, found @ Phoneme::Consonant(_)))) => {
                self.fail(malformed(PhonemeClass::Vowel, Some(found), at))
            }
            Some(Err(e)) => self.fail(e),
            None => self.fail(malformed(PhonemeClass::Vowel, None, offset)),
        }
    }
}
