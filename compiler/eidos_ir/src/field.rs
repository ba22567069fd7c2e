//! The world-field catalog.
//!
//! Field names, kinds and access tags are the contract between the word
//! table and whatever registry the world simulation provides. Changing any
//! entry is a catalog version change.

use std::fmt;

use crate::value::Kind;

/// Catalog revision. Bump on any change to `CATALOG`.
pub const CATALOG_VERSION: u32 = 1;

/// Whether spells may write a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Access {
    Immutable,
    Mutable,
}

impl Access {
    #[inline]
    pub const fn is_writable(self) -> bool {
        matches!(self, Access::Mutable)
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Immutable => f.write_str("immutable"),
            Access::Mutable => f.write_str("mutable"),
        }
    }
}

/// Identifies a catalog field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Elevation,
    Density,
    Position,
    Heat,
    Gravity,
    Force,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::Elevation,
        FieldId::Density,
        FieldId::Position,
        FieldId::Heat,
        FieldId::Gravity,
        FieldId::Force,
    ];

    /// Catalog entry for this field.
    #[inline]
    pub fn def(self) -> &'static FieldDef {
        &CATALOG[self as usize]
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.def().name
    }

    #[inline]
    pub fn kind(self) -> Kind {
        self.def().kind
    }

    #[inline]
    pub fn access(self) -> Access {
        self.def().access
    }

    /// Look up a field by its exact catalog name.
    pub fn from_name(name: &str) -> Option<FieldId> {
        CATALOG.iter().find(|def| def.name == name).map(|def| def.id)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDef {
    pub id: FieldId,
    pub name: &'static str,
    pub kind: Kind,
    pub access: Access,
}

/// The field catalog, indexed by `FieldId as usize`.
pub static CATALOG: [FieldDef; 6] = [
    FieldDef {
        id: FieldId::Elevation,
        name: "Elevation",
        kind: Kind::Scalar,
        access: Access::Immutable,
    },
    FieldDef {
        id: FieldId::Density,
        name: "Density",
        kind: Kind::Scalar,
        access: Access::Immutable,
    },
    FieldDef {
        id: FieldId::Position,
        name: "Position",
        kind: Kind::Vector,
        access: Access::Immutable,
    },
    FieldDef {
        id: FieldId::Heat,
        name: "Heat",
        kind: Kind::Scalar,
        access: Access::Mutable,
    },
    FieldDef {
        id: FieldId::Gravity,
        name: "Gravity",
        kind: Kind::Vector,
        access: Access::Mutable,
    },
    FieldDef {
        id: FieldId::Force,
        name: "Force",
        kind: Kind::Vector,
        access: Access::Mutable,
    },
];
