//! Eidos - command line front end for the spell interpreter.
//!
//! ```text
//! spell text
//!     │
//!     ▼
//! eidos_lexer::tokenize ──► Vec<Token>      (lex errors rendered with ariadne)
//!     │
//!     ▼
//! Interpreter::replay ──► Execution         (against an in-memory world)
//! ```

use std::sync::Once;

pub mod commands;
pub mod diagnostic;
pub mod options;

pub use commands::CliError;
pub use options::{parse_cast_options, parse_value, CastOptions};

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical tracing subscriber.
///
/// The filter comes from `EIDOS_LOG`, or `RUST_LOG` when that is unset.
/// Nothing is installed when neither is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let Ok(filter) =
            EnvFilter::try_from_env("EIDOS_LOG").or_else(|_| EnvFilter::try_from_default_env())
        else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_targets(true)
                    .with_bracketed_fields(true),
            )
            .with(filter)
            .init();
    });
}
