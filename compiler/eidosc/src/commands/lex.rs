//! `eidos lex`: show how a spell splits into words.

use std::io::Write;

use super::CliError;

/// Tokenize `text` and print one line per word.
pub fn lex_spell(text: &str, out: &mut impl Write) -> Result<(), CliError> {
    let tokens = eidos_lexer::tokenize(text)?;
    writeln!(out, "{} word(s)", tokens.len())?;
    for token in &tokens {
        writeln!(
            out,
            "  {:>3}  {:<6} {}",
            token.offset,
            token.word.to_string(),
            token.operation
        )?;
    }
    Ok(())
}
