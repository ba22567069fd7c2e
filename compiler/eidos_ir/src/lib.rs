//! Eidos IR - core types shared by the spell lexer and evaluator.
//!
//! # Architecture
//!
//! ```text
//! Phoneme ──► Syllable ──► Word ──► Operation ──► Value / FieldId
//! ```
//!
//! - `Phoneme`: one symbol of the fixed 15-symbol alphabet
//! - `Syllable`: a consonant-vowel pair, the only legal syllable shape
//! - `Word`: non-empty syllable sequence, the unit the word table maps
//! - `Operation`: what a word does to the operand stack
//! - `Value`: scalar or 3-component vector operand
//! - `FieldId` / `CATALOG`: the versioned world-field catalog
//!
//! Everything here is a plain value type. Nothing in this crate allocates
//! per-cast state or touches the world.

mod field;
mod operation;
mod phoneme;
mod syllable;
mod value;

pub use field::{Access, FieldDef, FieldId, CATALOG, CATALOG_VERSION};
pub use operation::{Literal, Operation, ResultKind, Signature};
pub use phoneme::{Consonant, Phoneme, PhonemeClass, Vowel};
pub use syllable::{Syllable, Word};
pub use value::{Axis, Kind, KindConstraint, Value, Vector};
