//! Interned identifiers used as property and binding names.
//!
//! An `Identifier` is a shared `Rc<str>`. The `Interner` trait is the seam to
//! whatever interning table the embedding interpreter owns; `IdentifierTable`
//! is the stock implementation, so identical names share one allocation and
//! compare by pointer on the fast path.

use crate::prelude::*;
use crate::value::CheapClone;

/// An interned property or binding name.
#[derive(Clone, Eq)]
pub struct Identifier(Rc<str>);

impl CheapClone for Identifier {}

impl Identifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether two identifiers share the same interned allocation.
    pub fn ptr_eq(a: &Identifier, b: &Identifier) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    /// Parse this identifier as a canonical array index ("0", "17", never "017").
    pub fn as_index(&self) -> Option<u32> {
        parse_canonical_index(self.as_str())
    }
}

/// Parse a canonical decimal array index.
///
/// Leading zeros are rejected except for "0" itself, so the result always
/// round-trips through its decimal rendering.
pub fn parse_canonical_index(s: &str) -> Option<u32> {
    let first = s.bytes().next()?;
    if !first.is_ascii_digit() || (first == b'0' && s.len() > 1) {
        return None;
    }
    s.parse::<u32>().ok()
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::borrow::Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Identifier(Rc::from(s))
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Identifier(Rc::from(s))
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &*self.0)
    }
}

/// Access to the interpreter's identifier table.
pub trait Interner {
    /// Get the shared identifier for `s`, inserting it if needed.
    fn intern(&mut self, s: &str) -> Identifier;

    /// Get the identifier for the decimal rendering of `index`.
    fn intern_index(&mut self, index: u32) -> Identifier {
        let s = format!("{}", index);
        self.intern(&s)
    }
}

/// Interning table for identifiers.
///
/// Names inserted into the table are stored once and subsequent requests for
/// the same name return a cheap clone of the existing instance.
pub struct IdentifierTable {
    /// Using Box<str> as key to avoid double-indirection through Rc.
    names: FxHashMap<Box<str>, Identifier>,
}

impl IdentifierTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            names: fx_map_new(),
        }
    }

    /// Create a table pre-populated with common identifiers.
    pub fn with_common_identifiers() -> Self {
        let mut table = Self::new();
        for s in COMMON_IDENTIFIERS {
            table.intern(s);
        }
        table
    }

    /// Get an existing identifier without inserting.
    pub fn get(&self, s: &str) -> Option<Identifier> {
        self.names.get(s).map(|id| id.cheap_clone())
    }

    /// Number of unique identifiers in the table.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Interner for IdentifierTable {
    fn intern(&mut self, s: &str) -> Identifier {
        if let Some(existing) = self.names.get(s) {
            return existing.cheap_clone();
        }
        let id = Identifier::from(s);
        self.names.insert(s.into(), id.cheap_clone());
        id
    }
}

impl Default for IdentifierTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Names that show up on almost every script's hot path.
const COMMON_IDENTIFIERS: &[&str] = &[
    "length",
    "prototype",
    "constructor",
    "__proto__",
    "name",
    "message",
    "value",
    "toString",
    "valueOf",
    "hasOwnProperty",
    "undefined",
    "arguments",
    "callee",
    "caller",
    "this",
    "window",
    "document",
    "location",
    "self",
    "parent",
    "top",
    "frames",
    "opener",
    "i",
    "j",
    "k",
    "x",
    "y",
    "key",
];
