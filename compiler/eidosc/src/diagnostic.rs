//! Lex error rendering.

use std::io;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use eidos_lexer::{LexError, LexErrorKind};

fn report(error: &LexError, color: bool) -> Report<'static, std::ops::Range<usize>> {
    let label = match &error.kind {
        LexErrorKind::InvalidPhoneme { .. } => "not one of the fifteen phonemes",
        LexErrorKind::MalformedSyllable { .. } => "syllable breaks here",
        LexErrorKind::UnknownWord { .. } => "no word starts like this",
    };
    Report::build(ReportKind::Error, (), error.offset)
        .with_config(Config::default().with_color(color))
        .with_message(&error.kind)
        .with_label(
            Label::new(error.offset..error.offset + 1)
                .with_message(label)
                .with_color(Color::Red),
        )
        .finish()
}

/// Print a lex error against its spell text to stderr.
pub fn emit_lex_error(text: &str, error: &LexError) -> io::Result<()> {
    report(error, true).eprint(Source::from(text))
}

/// Render a lex error without color.
pub fn render_lex_error(text: &str, error: &LexError) -> String {
    let mut buffer = Vec::new();
    if report(error, false)
        .write(Source::from(text), &mut buffer)
        .is_err()
    {
        return error.to_string();
    }
    String::from_utf8_lossy(&buffer).into_owned()
}
