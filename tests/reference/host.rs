//! Ordinary-object host used by the reference tests and benchmarks.
//!
//! Slots live in an `IndexMap` keyed by normalised `PropertyKey`, so a name
//! like "3" and the index 3 hit the same slot. Own keys list indices first in
//! ascending order, then names in insertion order.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use jsref::prelude::{IndexMap, index_map_new};
use jsref::{ExecState, Identifier, ObjectRef, PropertyHost, PropertyKey, RefError, Result, Value};

pub type Getter = Rc<dyn Fn(&mut dyn ExecState) -> Result<Value>>;
pub type Setter = Rc<dyn Fn(&mut dyn ExecState, Value) -> Result<()>>;

#[derive(Clone)]
struct Slot {
    value: Value,
    read_only: bool,
    configurable: bool,
    getter: Option<Getter>,
    setter: Option<Setter>,
}

impl Slot {
    fn data(value: Value) -> Self {
        Slot {
            value,
            read_only: false,
            configurable: true,
            getter: None,
            setter: None,
        }
    }
}

pub struct TestObject {
    class: &'static str,
    slots: RefCell<IndexMap<PropertyKey, Slot>>,
    prototype: Option<ObjectRef>,
    index_reads: Cell<usize>,
    name_reads: Cell<usize>,
}

impl TestObject {
    pub fn new() -> Rc<Self> {
        Self::with_class("Object", None)
    }

    pub fn with_prototype(prototype: ObjectRef) -> Rc<Self> {
        Self::with_class("Object", Some(prototype))
    }

    pub fn with_class(class: &'static str, prototype: Option<ObjectRef>) -> Rc<Self> {
        Rc::new(TestObject {
            class,
            slots: RefCell::new(index_map_new()),
            prototype,
            index_reads: Cell::new(0),
            name_reads: Cell::new(0),
        })
    }

    /// Array-like object holding `values` at indices 0..n.
    pub fn array(values: impl IntoIterator<Item = Value>) -> Rc<Self> {
        let obj = Self::with_class("Array", None);
        for (i, value) in values.into_iter().enumerate() {
            obj.set(i as u32, value);
        }
        obj
    }

    pub fn set(&self, key: impl Into<PropertyKey>, value: Value) {
        self.slots.borrow_mut().insert(key.into(), Slot::data(value));
    }

    pub fn define_read_only(&self, key: impl Into<PropertyKey>, value: Value) {
        let mut slot = Slot::data(value);
        slot.read_only = true;
        self.slots.borrow_mut().insert(key.into(), slot);
    }

    pub fn define_permanent(&self, key: impl Into<PropertyKey>, value: Value) {
        let mut slot = Slot::data(value);
        slot.configurable = false;
        self.slots.borrow_mut().insert(key.into(), slot);
    }

    pub fn define_accessor(
        &self,
        key: impl Into<PropertyKey>,
        getter: Option<Getter>,
        setter: Option<Setter>,
    ) {
        let mut slot = Slot::data(Value::Undefined);
        slot.getter = getter;
        slot.setter = setter;
        self.slots.borrow_mut().insert(key.into(), slot);
    }

    /// Remove a slot directly, bypassing `delete` semantics.
    pub fn remove(&self, key: impl Into<PropertyKey>) {
        self.slots.borrow_mut().shift_remove(&key.into());
    }

    /// Raw stored value of an own data slot.
    pub fn own_value(&self, key: impl Into<PropertyKey>) -> Option<Value> {
        self.slots.borrow().get(&key.into()).map(|slot| slot.value.clone())
    }

    pub fn index_reads(&self) -> usize {
        self.index_reads.get()
    }

    pub fn name_reads(&self) -> usize {
        self.name_reads.get()
    }

    fn lookup(&self, exec: &mut dyn ExecState, key: PropertyKey) -> Result<Value> {
        // Clone out of the borrow: getters may re-enter this object.
        let slot = self.slots.borrow().get(&key).cloned();
        match slot {
            Some(Slot {
                getter: Some(getter),
                ..
            }) => getter(exec),
            Some(slot) => Ok(slot.value),
            None => match &self.prototype {
                Some(proto) => match key {
                    PropertyKey::Index(i) => proto.get_index(exec, i),
                    PropertyKey::Name(name) => proto.get(exec, &name),
                },
                None => Ok(Value::Undefined),
            },
        }
    }

    fn store(&self, exec: &mut dyn ExecState, key: PropertyKey, value: Value) -> Result<()> {
        let existing = self.slots.borrow().get(&key).cloned();
        match existing {
            Some(Slot {
                setter: Some(setter),
                ..
            }) => setter(exec, value),
            Some(Slot { read_only: true, .. }) => {
                Err(RefError::type_error(format!("{} is read-only", key)))
            }
            Some(_) => {
                if let Some(slot) = self.slots.borrow_mut().get_mut(&key) {
                    slot.value = value;
                }
                Ok(())
            }
            None => {
                self.slots.borrow_mut().insert(key, Slot::data(value));
                Ok(())
            }
        }
    }

    fn remove_slot(&self, key: PropertyKey) -> bool {
        let mut slots = self.slots.borrow_mut();
        // an already deleted slot reports that nothing was deleted
        let removable = slots.get(&key).is_some_and(|slot| slot.configurable);
        if removable {
            slots.shift_remove(&key);
        }
        removable
    }

    fn has(&self, exec: &mut dyn ExecState, key: &PropertyKey) -> bool {
        if self.slots.borrow().contains_key(key) {
            return true;
        }
        match (&self.prototype, key) {
            (Some(proto), PropertyKey::Index(i)) => proto.has_index(exec, *i),
            (Some(proto), PropertyKey::Name(name)) => proto.has_property(exec, name),
            (None, _) => false,
        }
    }
}

impl PropertyHost for TestObject {
    fn get(&self, exec: &mut dyn ExecState, name: &Identifier) -> Result<Value> {
        self.name_reads.set(self.name_reads.get() + 1);
        self.lookup(exec, PropertyKey::from_name(name))
    }

    fn get_index(&self, exec: &mut dyn ExecState, index: u32) -> Result<Value> {
        self.index_reads.set(self.index_reads.get() + 1);
        self.lookup(exec, PropertyKey::Index(index))
    }

    fn put(&self, exec: &mut dyn ExecState, name: &Identifier, value: Value) -> Result<()> {
        self.store(exec, PropertyKey::from_name(name), value)
    }

    fn put_index(&self, exec: &mut dyn ExecState, index: u32, value: Value) -> Result<()> {
        self.store(exec, PropertyKey::Index(index), value)
    }

    fn delete(&self, _exec: &mut dyn ExecState, name: &Identifier) -> Result<bool> {
        Ok(self.remove_slot(PropertyKey::from_name(name)))
    }

    fn delete_index(&self, _exec: &mut dyn ExecState, index: u32) -> Result<bool> {
        Ok(self.remove_slot(PropertyKey::Index(index)))
    }

    fn has_property(&self, exec: &mut dyn ExecState, name: &Identifier) -> bool {
        self.has(exec, &PropertyKey::from_name(name))
    }

    fn has_index(&self, exec: &mut dyn ExecState, index: u32) -> bool {
        self.has(exec, &PropertyKey::Index(index))
    }

    fn own_property_keys(&self) -> Vec<PropertyKey> {
        let slots = self.slots.borrow();
        let mut indices: Vec<u32> = slots.keys().filter_map(PropertyKey::as_index).collect();
        indices.sort_unstable();
        indices
            .into_iter()
            .map(PropertyKey::Index)
            .chain(slots.keys().filter(|key| !key.is_index()).cloned())
            .collect()
    }

    fn class_name(&self) -> &str {
        self.class
    }
}

/// Share a fixture object as a host handle while keeping the typed `Rc`.
pub fn handle(obj: &Rc<TestObject>) -> ObjectRef {
    ObjectRef::from_rc(obj.clone())
}

pub fn getter(f: impl Fn(&mut dyn ExecState) -> Result<Value> + 'static) -> Option<Getter> {
    Some(Rc::new(f))
}

pub fn setter(f: impl Fn(&mut dyn ExecState, Value) -> Result<()> + 'static) -> Option<Setter> {
    Some(Rc::new(f))
}
