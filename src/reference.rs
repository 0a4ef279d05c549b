//! References: the evaluator's handle on an assignable location.
//!
//! Evaluating an identifier, `obj.name` or `obj[i]` produces a [`Reference`]
//! rather than a value. Reading, writing and `delete` then go through
//! [`Reference::get_value`], [`Reference::put_value`] and
//! [`Reference::delete_value`]. Expressions that are not locations are wrapped
//! with [`Reference::value`] so the evaluator can treat every result alike.
//!
//! Index-named references keep the `u32` and only intern its decimal name on
//! the first [`Reference::property_name`] call. Element reads in a loop never
//! touch the identifier table.

use log::{debug, trace};

use crate::config::UnresolvedWrites;
use crate::context::ExecState;
use crate::error::{RefError, Result};
use crate::host::{delete_key, get_key, has_key, put_key};
use crate::identifier::{Identifier, Interner};
use crate::prelude::*;
use crate::value::{CheapClone, ObjectRef, PropertyKey, Value};

/// Property name with a lazily interned identifier for the index form.
///
/// Materializing keeps `key` as it was, so later reads still take the
/// index path.
#[derive(Debug, Clone)]
struct PropertyName {
    key: PropertyKey,
    materialized: OnceCell<Identifier>,
}

impl PropertyName {
    fn new(key: PropertyKey) -> Self {
        Self {
            key,
            materialized: OnceCell::new(),
        }
    }

    fn identifier(&self, interner: &mut dyn Interner) -> Identifier {
        match &self.key {
            PropertyKey::Name(name) => name.cheap_clone(),
            PropertyKey::Index(index) => self
                .materialized
                .get_or_init(|| {
                    trace!("materializing property name for index {}", index);
                    interner.intern_index(*index)
                })
                .cheap_clone(),
        }
    }
}

#[derive(Debug, Clone)]
enum Target {
    /// Free identifier that no scope binds; only the ambient host can back it.
    Unresolved(PropertyName),
    Property(ObjectRef, PropertyName),
    /// Not a location: an already computed value.
    Value(Value),
}

/// A resolved property location, an unresolved name, or a wrapped value.
#[derive(Debug, Clone)]
pub struct Reference {
    target: Target,
}

impl Reference {
    /// Reference to `host[name]`.
    pub fn new(host: ObjectRef, name: Identifier) -> Self {
        Self::with_key(host, PropertyKey::Name(name))
    }

    /// Reference to `host[index]`, kept in index form.
    pub fn indexed(host: ObjectRef, index: u32) -> Self {
        Self::with_key(host, PropertyKey::Index(index))
    }

    /// Reference to `host[key]` for an already classified key.
    pub fn with_key(host: ObjectRef, key: PropertyKey) -> Self {
        Reference {
            target: Target::Property(host, PropertyName::new(key)),
        }
    }

    /// Reference to a free identifier no scope binds.
    pub fn unresolved(name: Identifier) -> Self {
        Reference {
            target: Target::Unresolved(PropertyName::new(PropertyKey::Name(name))),
        }
    }

    pub fn unresolved_index(index: u32) -> Self {
        Reference {
            target: Target::Unresolved(PropertyName::new(PropertyKey::Index(index))),
        }
    }

    /// Wrap an already computed value.
    pub fn value(value: Value) -> Self {
        Reference {
            target: Target::Value(value),
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self.target, Target::Unresolved(_))
    }

    pub fn is_property(&self) -> bool {
        matches!(self.target, Target::Property(..))
    }

    pub fn is_value(&self) -> bool {
        matches!(self.target, Target::Value(_))
    }

    /// The authoritative name form. `None` for a wrapped value.
    pub fn key(&self) -> Option<&PropertyKey> {
        self.name().map(|name| &name.key)
    }

    /// GetBase: the host object, `Null` when unresolved, or the wrapped value.
    pub fn base(&self) -> Value {
        match &self.target {
            Target::Property(host, _) => Value::Object(host.cheap_clone()),
            Target::Unresolved(_) => Value::Null,
            Target::Value(value) => value.cheap_clone(),
        }
    }

    /// GetPropertyName. The identifier for an index is interned once and
    /// memoized, so repeated calls return the same allocation.
    pub fn property_name(&self, exec: &mut dyn ExecState) -> Option<Identifier> {
        self.name().map(|name| name.identifier(exec.identifiers()))
    }

    /// GetValue.
    ///
    /// Unresolved references read from the ambient host if it has the name and
    /// fail with a reference error otherwise. Properties missing on a real host
    /// read as whatever the host says (normally `Undefined`).
    pub fn get_value(&self, exec: &mut dyn ExecState) -> Result<Value> {
        match &self.target {
            Target::Value(value) => Ok(value.cheap_clone()),
            Target::Property(host, name) => get_key(&**host, exec, &name.key),
            Target::Unresolved(name) => {
                if let Some(ambient) = exec.ambient_host() {
                    if has_key(&*ambient, exec, &name.key) {
                        return get_key(&*ambient, exec, &name.key);
                    }
                }
                debug!("unresolved read of '{}'", name.key);
                Err(RefError::reference_error(name.key.to_string()))
            }
        }
    }

    /// PutValue.
    ///
    /// Writing through a wrapped value is an invalid assignment. An unresolved
    /// name the ambient host already has is updated there; a missing one is
    /// created or refused according to the context's [`UnresolvedWrites`].
    pub fn put_value(&self, exec: &mut dyn ExecState, value: Value) -> Result<()> {
        match &self.target {
            Target::Value(_) => Err(RefError::invalid_assignment(self.to_string())),
            Target::Property(host, name) => put_key(&**host, exec, &name.key, value),
            Target::Unresolved(name) => {
                let ambient = match exec.unresolved_writes() {
                    UnresolvedWrites::CreateOnAmbient => exec.ambient_host(),
                    UnresolvedWrites::Throw => exec
                        .ambient_host()
                        .filter(|ambient| has_key(&**ambient, exec, &name.key)),
                };
                match ambient {
                    Some(ambient) => {
                        debug!("binding unresolved '{}' on {:?}", name.key, ambient);
                        put_key(&*ambient, exec, &name.key, value)
                    }
                    None => {
                        debug!("unresolved write of '{}'", name.key);
                        Err(RefError::reference_error(name.key.to_string()))
                    }
                }
            }
        }
    }

    /// DeleteValue. Only a real property can refuse; deleting an unresolved
    /// name or a wrapped value succeeds trivially.
    pub fn delete_value(&self, exec: &mut dyn ExecState) -> Result<bool> {
        match &self.target {
            Target::Property(host, name) => delete_key(&**host, exec, &name.key),
            Target::Unresolved(_) | Target::Value(_) => Ok(true),
        }
    }

    /// The host, when this reference denotes a real settable location.
    pub fn base_if_mutable(&self) -> Option<&ObjectRef> {
        match &self.target {
            Target::Property(host, _) => Some(host),
            Target::Unresolved(_) | Target::Value(_) => None,
        }
    }

    /// Whether the denoted location currently exists.
    pub fn exists(&self, exec: &mut dyn ExecState) -> bool {
        match &self.target {
            Target::Value(_) => true,
            Target::Property(host, name) => has_key(&**host, exec, &name.key),
            Target::Unresolved(name) => exec
                .ambient_host()
                .is_some_and(|ambient| has_key(&*ambient, exec, &name.key)),
        }
    }

    /// The object a collector must keep alive for this reference to stay valid.
    pub(crate) fn rooted_object(&self) -> Option<&ObjectRef> {
        match &self.target {
            Target::Property(host, _) => Some(host),
            Target::Value(value) => value.as_object(),
            Target::Unresolved(_) => None,
        }
    }

    fn name(&self) -> Option<&PropertyName> {
        match &self.target {
            Target::Property(_, name) | Target::Unresolved(name) => Some(name),
            Target::Value(_) => None,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Target::Unresolved(name) => write!(f, "{}", name.key),
            Target::Property(host, name) => match &name.key {
                PropertyKey::Index(i) => write!(f, "{}[{}]", host.class_name(), i),
                PropertyKey::Name(n) => write!(f, "{}.{}", host.class_name(), n),
            },
            Target::Value(_) => write!(f, "<value>"),
        }
    }
}
