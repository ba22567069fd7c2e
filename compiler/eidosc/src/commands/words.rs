//! `eidos words`: print the word table.

use std::io::{self, Write};

use eidos_ir::{KindConstraint, CATALOG_VERSION};
use eidos_lexer::{WordTable, LANGUAGE_VERSION};

/// Print every word with its operation and signature.
pub fn list_words(out: &mut impl Write) -> io::Result<()> {
    let table = WordTable::global();
    writeln!(
        out,
        "Old Language v{LANGUAGE_VERSION} (catalog v{CATALOG_VERSION}), {} words",
        table.len()
    )?;
    for (word, operation) in table.entries() {
        let signature = operation.signature();
        let operands: Vec<&str> = signature
            .operands
            .iter()
            .map(|constraint| match constraint {
                KindConstraint::Scalar => "S",
                KindConstraint::Vector => "V",
                KindConstraint::Either => "E",
            })
            .collect();
        writeln!(
            out,
            "  {:<6} {:<14} ({})",
            word.to_string(),
            operation.to_string(),
            operands.join(" ")
        )?;
    }
    Ok(())
}
