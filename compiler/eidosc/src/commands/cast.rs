//! `eidos cast`: run a spell against an in-memory world.

use std::io::Write;

use eidos_eval::{Execution, Interpreter, Outcome, WorldFields};

use super::CliError;
use crate::options::CastOptions;

/// Seed a world, cast `text` into it, and print the outcome, the writes,
/// the final stack and the world afterwards.
pub fn cast_spell(
    text: &str,
    options: &CastOptions,
    out: &mut impl Write,
) -> Result<Execution, CliError> {
    let world = WorldFields::new();
    for (name, value) in &options.settings {
        tracing::debug!(field = %name, %value, "seeding");
        world.set(name, *value)?;
    }

    let mut builder = Interpreter::builder();
    if let Some(depth) = options.max_stack {
        builder = builder.max_stack_depth(depth);
    }
    if let Some(count) = options.max_vars {
        builder = builder.max_variables(count);
    }
    let execution = builder.build().cast(text, &world)?;

    match &execution.outcome {
        Outcome::Completed { .. } => writeln!(out, "completed")?,
        Outcome::Failed {
            error,
            word_index,
            operation: Some(operation),
        } => {
            writeln!(out, "failed at word {word_index} ({operation}): {error}")?;
        }
        Outcome::Failed {
            error,
            word_index,
            operation: None,
        } => {
            writeln!(out, "failed at word {word_index}: {error}")?;
        }
        Outcome::Abandoned { word_index, .. } => {
            writeln!(out, "abandoned before word {word_index}")?;
        }
    }

    if !execution.writes.is_empty() {
        writeln!(out, "writes:")?;
        for write in &execution.writes {
            writeln!(out, "  [{}] {} = {}", write.word_index, write.field, write.value)?;
        }
    }

    let stack: Vec<String> = execution.stack.iter().map(ToString::to_string).collect();
    writeln!(out, "stack: [{}]", stack.join(", "))?;

    writeln!(out, "world:")?;
    for (field, value) in world.snapshot() {
        match value {
            Some(value) => writeln!(out, "  {field} = {value}")?,
            None => writeln!(out, "  {field} = -")?,
        }
    }
    Ok(execution)
}
