//! The word table: the compiled grammar of the Old Language.
//!
//! Words are stored in a prefix tree over syllables, built once per process
//! from the static grid. The table is constructed so that no word is a
//! proper prefix of another; [`WordTable::validate`] checks that property
//! and is run from tests, not on the lexing path.
//!
//! # Language version 1
//!
//! ```text
//!       A           E          I           O            U
//! T  Five        One        Two         Zero         Ten
//! K  Unit X      Unit Y     Unit Z      Pi           Origin
//! P  Sign        Negate     Reciprocal  Abs          Sqrt
//! M  Magnitude   Normalize  Dot         Cross        Compose
//! N  Add         Subtract   Multiply    Divide       Max
//! L  Dup         Drop       Swap        Over         Rotate
//! S  Vector Var  Store      Load Scalar Load Vector  Scalar Var
//! R  Elevation   Density    Position    Heat         Gravity     (read)
//! V  Force       Heat       -           -            Gravity     (write)
//! ```
//!
//! `W` syllables never stand alone; they open two-syllable compounds:
//! `WAKA`/`WAKE`/`WAKI` (Axis X/Y/Z), `WESA` (Slot), `WIRA` (read Force),
//! `WOLA` (Clear), `WUTA` (Derivative).

use std::sync::LazyLock;

use eidos_ir::{Axis, Consonant, FieldId, Literal, Operation, Syllable, Vowel, Word};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Revision of the word grid. Any change to `LANGUAGE` bumps it.
pub const LANGUAGE_VERSION: u32 = 1;

macro_rules! entries {
    ($( [$($c:ident $v:ident)+] => $op:expr ),* $(,)?) => {
        &[ $( (&[$(Syllable::new(Consonant::$c, Vowel::$v)),+], $op) ),* ]
    };
}

type Entry = (&'static [Syllable], Operation);

static LANGUAGE: &[Entry] = entries![
    [T A] => Operation::Literal(Literal::Five),
    [T E] => Operation::Literal(Literal::One),
    [T I] => Operation::Literal(Literal::Two),
    [T O] => Operation::Literal(Literal::Zero),
    [T U] => Operation::Literal(Literal::Ten),

    [K A] => Operation::Literal(Literal::UnitX),
    [K E] => Operation::Literal(Literal::UnitY),
    [K I] => Operation::Literal(Literal::UnitZ),
    [K O] => Operation::Literal(Literal::Pi),
    [K U] => Operation::Literal(Literal::Origin),

    [P A] => Operation::Sign,
    [P E] => Operation::Negate,
    [P I] => Operation::Reciprocal,
    [P O] => Operation::Abs,
    [P U] => Operation::Sqrt,

    [M A] => Operation::Magnitude,
    [M E] => Operation::Normalize,
    [M I] => Operation::Dot,
    [M O] => Operation::Cross,
    [M U] => Operation::Compose,

    [N A] => Operation::Add,
    [N E] => Operation::Subtract,
    [N I] => Operation::Multiply,
    [N O] => Operation::Divide,
    [N U] => Operation::Max,

    [L A] => Operation::Dup,
    [L E] => Operation::Drop,
    [L I] => Operation::Swap,
    [L O] => Operation::Over,
    [L U] => Operation::Rotate,

    [S A] => Operation::VectorVar,
    [S E] => Operation::Store,
    [S I] => Operation::LoadScalar,
    [S O] => Operation::LoadVector,
    [S U] => Operation::ScalarVar,

    [R A] => Operation::ReadField(FieldId::Elevation),
    [R E] => Operation::ReadField(FieldId::Density),
    [R I] => Operation::ReadField(FieldId::Position),
    [R O] => Operation::ReadField(FieldId::Heat),
    [R U] => Operation::ReadField(FieldId::Gravity),

    [V A] => Operation::WriteField(FieldId::Force),
    [V E] => Operation::WriteField(FieldId::Heat),
    [V U] => Operation::WriteField(FieldId::Gravity),

    [W A K A] => Operation::Axis(Axis::X),
    [W A K E] => Operation::Axis(Axis::Y),
    [W A K I] => Operation::Axis(Axis::Z),
    [W E S A] => Operation::Slot,
    [W I R A] => Operation::ReadField(FieldId::Force),
    [W O L A] => Operation::Clear,
    [W U T A] => Operation::Derivative,
];

static GLOBAL: LazyLock<WordTable> = LazyLock::new(|| {
    WordTable::from_entries(
        LANGUAGE
            .iter()
            .filter_map(|(syllables, op)| Word::new(syllables.iter().copied()).map(|w| (w, *op))),
    )
});

/// Index of a node in the prefix tree.
pub(crate) type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Default)]
struct Node {
    operation: Option<Operation>,
    children: FxHashMap<Syllable, NodeId>,
}

/// A table invariant violated by a word grid.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("word {shorter} is a prefix of {longer}")]
    AmbiguousPrefix { shorter: Word, longer: Word },
    #[error("word {word} is defined twice")]
    DuplicateWord { word: Word },
    #[error("`{operation}` is spoken by both {first} and {second}")]
    DuplicateOperation {
        operation: Operation,
        first: Word,
        second: Word,
    },
    #[error("word {word} writes immutable field {field}")]
    ImmutableWrite { word: Word, field: FieldId },
}

/// Immutable `Word -> Operation` mapping compiled into a prefix tree.
#[derive(Debug)]
pub struct WordTable {
    nodes: Vec<Node>,
    entries: Vec<(Word, Operation)>,
    words: FxHashMap<Operation, Word>,
}

impl WordTable {
    /// The process-wide table for the current language version.
    pub fn global() -> &'static WordTable {
        &GLOBAL
    }

    /// Compile a table from `(word, operation)` pairs.
    ///
    /// Later duplicates overwrite earlier ones; [`validate`](Self::validate)
    /// reports them.
    pub fn from_entries(entries: impl IntoIterator<Item = (Word, Operation)>) -> Self {
        let mut table = WordTable {
            nodes: vec![Node::default()],
            entries: Vec::new(),
            words: FxHashMap::default(),
        };
        for (word, operation) in entries {
            table.insert(&word, operation);
            table.words.entry(operation).or_insert_with(|| word.clone());
            table.entries.push((word, operation));
        }
        table
    }

    fn insert(&mut self, word: &Word, operation: Operation) {
        let mut node = ROOT;
        for &syllable in word.syllables() {
            let existing = self.nodes[node].children.get(&syllable).copied();
            node = match existing {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children.insert(syllable, child);
                    child
                }
            };
        }
        self.nodes[node].operation = Some(operation);
    }

    #[inline]
    pub(crate) fn root(&self) -> NodeId {
        ROOT
    }

    /// Follow one syllable edge from `node`.
    #[inline]
    pub(crate) fn child(&self, node: NodeId, syllable: Syllable) -> Option<NodeId> {
        self.nodes[node].children.get(&syllable).copied()
    }

    #[inline]
    pub(crate) fn operation_at(&self, node: NodeId) -> Option<Operation> {
        self.nodes[node].operation
    }

    /// Exact lookup of a syllable sequence.
    pub fn lookup(&self, syllables: &[Syllable]) -> Option<Operation> {
        let mut node = self.root();
        for &syllable in syllables {
            node = self.child(node, syllable)?;
        }
        self.operation_at(node)
    }

    /// The operation a word means, if it is in the table.
    #[inline]
    pub fn resolve(&self, word: &Word) -> Option<Operation> {
        self.lookup(word.syllables())
    }

    /// The canonical word for an operation.
    pub fn word_for(&self, operation: Operation) -> Option<&Word> {
        self.words.get(&operation)
    }

    /// Entries in definition order.
    pub fn entries(&self) -> impl Iterator<Item = (&Word, Operation)> {
        self.entries.iter().map(|(w, op)| (w, *op))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check the grid invariants: no word is a proper prefix of another, no
    /// word is defined twice, every operation has a single word, and write
    /// words only target fields the catalog marks mutable.
    pub fn validate(&self) -> Result<(), TableError> {
        let mut spoken: FxHashMap<Operation, &Word> = FxHashMap::default();
        for (i, (word, operation)) in self.entries.iter().enumerate() {
            if let Operation::WriteField(field) = operation {
                if !field.access().is_writable() {
                    return Err(TableError::ImmutableWrite {
                        word: word.clone(),
                        field: *field,
                    });
                }
            }
            for (other, _) in &self.entries[i + 1..] {
                if word == other {
                    return Err(TableError::DuplicateWord { word: word.clone() });
                }
                if word.is_proper_prefix_of(other) {
                    return Err(TableError::AmbiguousPrefix {
                        shorter: word.clone(),
                        longer: other.clone(),
                    });
                }
                if other.is_proper_prefix_of(word) {
                    return Err(TableError::AmbiguousPrefix {
                        shorter: other.clone(),
                        longer: word.clone(),
                    });
                }
            }
            if let Some(first) = spoken.insert(*operation, word) {
                return Err(TableError::DuplicateOperation {
                    operation: *operation,
                    first: first.clone(),
                    second: word.clone(),
                });
            }
        }
        Ok(())
    }
}
