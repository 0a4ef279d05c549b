//! Script values, object handles and property keys.
//!
//! These are the shapes the reference core hands to and receives from the
//! object model. The object model itself lives behind [`PropertyHost`].

use crate::host::PropertyHost;
use crate::identifier::{Identifier, Interner, parse_canonical_index};
use crate::prelude::*;

/// Trait for types that have cheap (O(1), reference-counted) clones.
///
/// Makes it explicit when a clone only bumps a reference count, as opposed to
/// copying data.
pub trait CheapClone: Clone {
    /// Semantically identical to `clone()`, but documents that the operation is O(1).
    fn cheap_clone(&self) -> Self {
        self.clone()
    }
}

impl<T: ?Sized> CheapClone for Rc<T> {}

/// A script value
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(Rc<str>),
    Object(ObjectRef),
}

impl CheapClone for Value {}

impl Value {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null_or_undefined(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// The object handle, if this value is an object.
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Object(_) => "object",
        }
    }

    /// Strict equality (`===`). Objects compare by identity.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => ObjectRef::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{:?}", &**s),
            Value::Object(obj) => write!(f, "{:?}", obj),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_equals(other)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Rc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Rc::from(s))
    }
}

impl From<Identifier> for Value {
    fn from(id: Identifier) -> Self {
        Value::String(Rc::from(id.as_str()))
    }
}

impl From<ObjectRef> for Value {
    fn from(obj: ObjectRef) -> Self {
        Value::Object(obj)
    }
}

/// Handle to a host object.
///
/// The handle does not decide the object's lifetime; that belongs to the
/// collector, which learns about extra roots through
/// [`RootRegistry`](crate::protect::RootRegistry).
#[derive(Clone)]
pub struct ObjectRef(Rc<dyn PropertyHost>);

impl CheapClone for ObjectRef {}

impl ObjectRef {
    pub fn new<H: PropertyHost + 'static>(host: H) -> Self {
        ObjectRef(Rc::new(host))
    }

    /// Wrap an already shared host, keeping the caller's typed handle usable.
    pub fn from_rc<H: PropertyHost + 'static>(host: Rc<H>) -> Self {
        ObjectRef(host)
    }

    /// Identity of the object, stable for its lifetime.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }

    /// Check if two handles point to the same object
    pub fn ptr_eq(a: &ObjectRef, b: &ObjectRef) -> bool {
        a.id() == b.id()
    }
}

impl Deref for ObjectRef {
    type Target = dyn PropertyHost;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        ObjectRef::ptr_eq(self, other)
    }
}

impl Eq for ObjectRef {}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[object {}]#{:x}", self.0.class_name(), self.id())
    }
}

/// Property key: either an array index or an interned name.
///
/// The index form is what the hot element-access path carries; a name is only
/// produced for it when somebody asks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Index(u32),
    Name(Identifier),
}

impl PropertyKey {
    /// Normalise a name: canonical array indices become `Index`.
    pub fn from_name(name: &Identifier) -> Self {
        match name.as_index() {
            Some(index) => PropertyKey::Index(index),
            None => PropertyKey::Name(name.cheap_clone()),
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, PropertyKey::Index(_))
    }

    pub fn as_index(&self) -> Option<u32> {
        match self {
            PropertyKey::Index(i) => Some(*i),
            PropertyKey::Name(_) => None,
        }
    }

    /// Render as an identifier, interning the decimal form of an index.
    pub fn to_identifier(&self, interner: &mut dyn Interner) -> Identifier {
        match self {
            PropertyKey::Index(i) => interner.intern_index(*i),
            PropertyKey::Name(name) => name.cheap_clone(),
        }
    }

    /// Check if this key equals a string literal (avoids allocation)
    #[inline]
    pub fn eq_str(&self, s: &str) -> bool {
        match self {
            PropertyKey::Name(name) => name.as_str() == s,
            PropertyKey::Index(i) => parse_canonical_index(s) == Some(*i),
        }
    }
}

impl From<&str> for PropertyKey {
    #[inline]
    fn from(s: &str) -> Self {
        match parse_canonical_index(s) {
            Some(index) => PropertyKey::Index(index),
            None => PropertyKey::Name(Identifier::from(s)),
        }
    }
}

impl From<Identifier> for PropertyKey {
    #[inline]
    fn from(name: Identifier) -> Self {
        match name.as_index() {
            Some(index) => PropertyKey::Index(index),
            None => PropertyKey::Name(name),
        }
    }
}

impl From<u32> for PropertyKey {
    fn from(index: u32) -> Self {
        PropertyKey::Index(index)
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Index(i) => write!(f, "{}", i),
            PropertyKey::Name(name) => write!(f, "{}", name),
        }
    }
}
