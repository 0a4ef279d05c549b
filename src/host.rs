//! The object-model seam.
//!
//! Anything a reference can point into (script objects, environment frames,
//! the global object) implements [`PropertyHost`]. The index methods default
//! to going through the interned decimal name; hosts with real indexed storage
//! override them so element access never touches the identifier table.

use crate::context::ExecState;
use crate::error::Result;
use crate::identifier::Identifier;
use crate::prelude::*;
use crate::value::{PropertyKey, Value};

pub trait PropertyHost {
    /// Read a property by name. Absent properties read as `Undefined`;
    /// prototype lookup, if any, is the host's business.
    fn get(&self, exec: &mut dyn ExecState, name: &Identifier) -> Result<Value>;

    fn put(&self, exec: &mut dyn ExecState, name: &Identifier, value: Value) -> Result<()>;

    /// Remove a property. Returns false when the property refused deletion.
    fn delete(&self, exec: &mut dyn ExecState, name: &Identifier) -> Result<bool>;

    fn has_property(&self, exec: &mut dyn ExecState, name: &Identifier) -> bool;

    /// Own property keys in enumeration order.
    fn own_property_keys(&self) -> Vec<PropertyKey>;

    fn get_index(&self, exec: &mut dyn ExecState, index: u32) -> Result<Value> {
        let name = exec.identifiers().intern_index(index);
        self.get(exec, &name)
    }

    fn put_index(&self, exec: &mut dyn ExecState, index: u32, value: Value) -> Result<()> {
        let name = exec.identifiers().intern_index(index);
        self.put(exec, &name, value)
    }

    fn delete_index(&self, exec: &mut dyn ExecState, index: u32) -> Result<bool> {
        let name = exec.identifiers().intern_index(index);
        self.delete(exec, &name)
    }

    fn has_index(&self, exec: &mut dyn ExecState, index: u32) -> bool {
        let name = exec.identifiers().intern_index(index);
        self.has_property(exec, &name)
    }

    /// Class name for diagnostics, e.g. "Object", "Array", "Window".
    fn class_name(&self) -> &str {
        "Object"
    }
}

/// Keyed dispatch helpers so callers holding a `PropertyKey` pick the right path.
pub(crate) fn get_key(
    host: &dyn PropertyHost,
    exec: &mut dyn ExecState,
    key: &PropertyKey,
) -> Result<Value> {
    match key {
        PropertyKey::Index(i) => host.get_index(exec, *i),
        PropertyKey::Name(name) => host.get(exec, name),
    }
}

pub(crate) fn put_key(
    host: &dyn PropertyHost,
    exec: &mut dyn ExecState,
    key: &PropertyKey,
    value: Value,
) -> Result<()> {
    match key {
        PropertyKey::Index(i) => host.put_index(exec, *i, value),
        PropertyKey::Name(name) => host.put(exec, name, value),
    }
}

pub(crate) fn delete_key(
    host: &dyn PropertyHost,
    exec: &mut dyn ExecState,
    key: &PropertyKey,
) -> Result<bool> {
    match key {
        PropertyKey::Index(i) => host.delete_index(exec, *i),
        PropertyKey::Name(name) => host.delete(exec, name),
    }
}

pub(crate) fn has_key(host: &dyn PropertyHost, exec: &mut dyn ExecState, key: &PropertyKey) -> bool {
    match key {
        PropertyKey::Index(i) => host.has_index(exec, *i),
        PropertyKey::Name(name) => host.has_property(exec, name),
    }
}
