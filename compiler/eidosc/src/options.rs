//! Argument parsing for `eidos cast`.

use eidos_ir::{Value, Vector};

use crate::commands::CliError;

/// Options for casting a spell against the in-memory world.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CastOptions {
    /// Fields seeded before the cast, in command line order.
    pub settings: Vec<(String, Value)>,
    pub max_stack: Option<usize>,
    pub max_vars: Option<usize>,
}

/// Parse a scalar (`3.5`) or a vector (`0,-9.8,0`).
pub fn parse_value(text: &str) -> Result<Value, CliError> {
    let invalid = || CliError::InvalidValue(text.to_string());
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    let numbers = parts
        .iter()
        .map(|part| part.parse::<f64>().ok().filter(|n| n.is_finite()))
        .collect::<Option<Vec<f64>>>()
        .ok_or_else(invalid)?;
    match numbers.as_slice() {
        [n] => Ok(Value::Scalar(*n)),
        [x, y, z] => Ok(Value::Vector(Vector::new(*x, *y, *z))),
        _ => Err(invalid()),
    }
}

fn parse_setting(text: &str) -> Result<(String, Value), CliError> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| CliError::Usage(format!("expected Field=value, found `{text}`")))?;
    Ok((name.trim().to_string(), parse_value(value)?))
}

fn parse_limit(flag: &str, text: &str) -> Result<usize, CliError> {
    text.parse()
        .map_err(|_| CliError::Usage(format!("{flag} expects a count, found `{text}`")))
}

/// Parse everything after the spell in `eidos cast <spell> ...`.
///
/// Flags accept both `--flag value` and `--flag=value`.
pub fn parse_cast_options(args: &[String]) -> Result<CastOptions, CliError> {
    let mut options = CastOptions::default();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value)),
            _ => (arg, None),
        };
        let value = match inline {
            Some(value) => value,
            None => {
                i += 1;
                args.get(i)
                    .map(String::as_str)
                    .ok_or_else(|| CliError::Usage(format!("{flag} needs a value")))?
            }
        };
        match flag {
            "--set" => options.settings.push(parse_setting(value)?),
            "--max-stack" => options.max_stack = Some(parse_limit(flag, value)?),
            "--max-vars" => options.max_vars = Some(parse_limit(flag, value)?),
            _ => return Err(CliError::Usage(format!("unknown option `{arg}`"))),
        }
        i += 1;
    }
    Ok(options)
}
