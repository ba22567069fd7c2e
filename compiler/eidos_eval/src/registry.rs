//! Field registry: the world-state surface a spell reads and writes.
//!
//! The executor only sees the [`FieldRegistry`] trait. [`WorldFields`] is
//! the in-memory implementation over the catalog; each field sits behind
//! its own lock, so spells on different threads can share one world.

use eidos_ir::{FieldDef, FieldId, Kind, Value, CATALOG};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// A rejected field access.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("unknown field `{name}`")]
    UnknownField { name: String },

    #[error("field `{name}` is immutable")]
    AccessDenied { name: String },

    #[error("field `{name}` holds a {expected}, not a {found}")]
    TypeMismatch {
        name: String,
        expected: Kind,
        found: Kind,
    },

    #[error("field `{name}` has no value yet")]
    Unavailable { name: String },
}

/// Read and write access to named world fields.
///
/// Both methods take `&self`; implementations synchronize internally.
pub trait FieldRegistry {
    /// Current value of a field. Reads never fail with `AccessDenied`.
    fn read(&self, name: &str) -> Result<Value, FieldError>;

    /// Request a write. Applied immediately; there is no rollback.
    fn write(&self, name: &str, value: Value) -> Result<(), FieldError>;
}

impl<R: FieldRegistry + ?Sized> FieldRegistry for &R {
    fn read(&self, name: &str) -> Result<Value, FieldError> {
        (**self).read(name)
    }

    fn write(&self, name: &str, value: Value) -> Result<(), FieldError> {
        (**self).write(name, value)
    }
}

#[derive(Debug)]
struct FieldCell {
    def: &'static FieldDef,
    value: RwLock<Option<Value>>,
}

/// In-memory world fields for every catalog entry.
#[derive(Debug)]
pub struct WorldFields {
    cells: FxHashMap<&'static str, FieldCell>,
}

impl Default for WorldFields {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldFields {
    /// All catalog fields, none of them holding a value yet.
    pub fn new() -> Self {
        let cells = CATALOG
            .iter()
            .map(|def| {
                (
                    def.name,
                    FieldCell {
                        def,
                        value: RwLock::new(None),
                    },
                )
            })
            .collect();
        WorldFields { cells }
    }

    fn cell(&self, name: &str) -> Result<&FieldCell, FieldError> {
        self.cells.get(name).ok_or_else(|| FieldError::UnknownField {
            name: name.to_string(),
        })
    }

    fn check_kind(def: &FieldDef, value: Value) -> Result<(), FieldError> {
        if value.kind() == def.kind {
            Ok(())
        } else {
            Err(FieldError::TypeMismatch {
                name: def.name.to_string(),
                expected: def.kind,
                found: value.kind(),
            })
        }
    }

    /// Seed a field from the world side, ignoring access.
    pub fn set(&self, name: &str, value: Value) -> Result<(), FieldError> {
        let cell = self.cell(name)?;
        Self::check_kind(cell.def, value)?;
        *cell.value.write() = Some(value);
        Ok(())
    }

    /// Current value of a field, if it has one.
    pub fn get(&self, field: FieldId) -> Option<Value> {
        self.cells.get(field.name()).and_then(|cell| *cell.value.read())
    }

    /// Every catalog field with its current value, in catalog order.
    pub fn snapshot(&self) -> Vec<(FieldId, Option<Value>)> {
        FieldId::ALL.iter().map(|&id| (id, self.get(id))).collect()
    }
}

impl FieldRegistry for WorldFields {
    fn read(&self, name: &str) -> Result<Value, FieldError> {
        let cell = self.cell(name)?;
        let value = *cell.value.read();
        value.ok_or_else(|| FieldError::Unavailable {
            name: name.to_string(),
        })
    }

    fn write(&self, name: &str, value: Value) -> Result<(), FieldError> {
        let cell = self.cell(name)?;
        if !cell.def.access.is_writable() {
            return Err(FieldError::AccessDenied {
                name: name.to_string(),
            });
        }
        Self::check_kind(cell.def, value)?;
        *cell.value.write() = Some(value);
        Ok(())
    }
}
