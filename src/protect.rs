//! Collector rooting for references that outlive their evaluation step.
//!
//! The collector itself lives outside this crate. What it needs from us is the
//! set of objects held from outside the object graph; [`RootRegistry`] is that
//! set. A [`ProtectedReference`] registers its reference's object when built
//! and deregisters it when dropped, whichever way the scope is left.

use log::trace;

use crate::prelude::*;
use crate::reference::Reference;
use crate::value::{CheapClone, ObjectRef, Value};

struct RootEntry {
    object: ObjectRef,
    /// Live registrations for this object
    count: usize,
}

/// Root table shared between the registry and its guards.
struct RootTable {
    /// Keyed by object id, in first-registration order.
    roots: IndexMap<usize, RootEntry>,
    registrations: usize,
}

impl RootTable {
    fn new() -> Self {
        Self {
            roots: index_map_new(),
            registrations: 0,
        }
    }

    fn add(&mut self, object: &ObjectRef) {
        let entry = self.roots.entry(object.id()).or_insert_with(|| RootEntry {
            object: object.cheap_clone(),
            count: 0,
        });
        entry.count += 1;
        self.registrations += 1;
        trace!("rooted {:?} (count {})", object, entry.count);
    }

    fn remove(&mut self, object: &ObjectRef) -> bool {
        let Some(entry) = self.roots.get_mut(&object.id()) else {
            return false;
        };
        entry.count = entry.count.saturating_sub(1);
        let remaining = entry.count;
        self.registrations = self.registrations.saturating_sub(1);
        if remaining == 0 {
            // keep registration order of the survivors
            self.roots.shift_remove(&object.id());
        }
        trace!("unrooted {:?} (count {})", object, remaining);
        true
    }
}

/// Statistics about registered roots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootStats {
    /// Distinct rooted objects
    pub roots: usize,
    /// Live registrations across all objects
    pub registrations: usize,
}

/// Counted root set consulted by the collector's mark phase.
///
/// Cloning the registry shares the same table.
#[derive(Clone)]
pub struct RootRegistry {
    inner: Rc<RefCell<RootTable>>,
}

impl RootRegistry {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(RootTable::new())),
        }
    }

    /// Root `reference`'s object for the lifetime of the returned guard.
    pub fn protect(&self, reference: Reference) -> ProtectedReference {
        if let Some(object) = reference.rooted_object() {
            self.inner.borrow_mut().add(object);
        }
        ProtectedReference {
            reference,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Add one registration for `object`.
    pub fn root(&self, object: &ObjectRef) {
        self.inner.borrow_mut().add(object);
    }

    /// Drop one registration for `object`. Returns false if it was not rooted.
    pub fn unroot(&self, object: &ObjectRef) -> bool {
        self.inner.borrow_mut().remove(object)
    }

    pub fn is_rooted(&self, object: &ObjectRef) -> bool {
        self.inner.borrow().roots.contains_key(&object.id())
    }

    /// Number of live registrations for `object`.
    pub fn root_count(&self, object: &ObjectRef) -> usize {
        self.inner
            .borrow()
            .roots
            .get(&object.id())
            .map_or(0, |entry| entry.count)
    }

    /// Visit every rooted object once, in registration order.
    ///
    /// The visitor may root or unroot; it sees the set as it was on entry.
    pub fn for_each_root<F: FnMut(&ObjectRef)>(&self, mut visitor: F) {
        let snapshot: Vec<ObjectRef> = self
            .inner
            .borrow()
            .roots
            .values()
            .map(|entry| entry.object.cheap_clone())
            .collect();
        for object in &snapshot {
            visitor(object);
        }
    }

    pub fn stats(&self) -> RootStats {
        let table = self.inner.borrow();
        RootStats {
            roots: table.roots.len(),
            registrations: table.registrations,
        }
    }
}

impl Default for RootRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RootRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootRegistry")
            .field("stats", &self.stats())
            .finish()
    }
}

/// A reference whose object stays rooted while this guard is alive.
///
/// Cloning takes a fresh registration, so every guard releases exactly the
/// root it took. Guards outliving their registry release nothing.
pub struct ProtectedReference {
    reference: Reference,
    registry: Weak<RefCell<RootTable>>,
}

impl ProtectedReference {
    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    /// Release the root and hand back the plain reference.
    pub fn into_inner(mut self) -> Reference {
        self.release();
        self.registry = Weak::new();
        core::mem::replace(&mut self.reference, Reference::value(Value::Undefined))
    }

    fn release(&self) {
        let Some(object) = self.reference.rooted_object() else {
            return;
        };
        if let Some(table) = self.registry.upgrade() {
            if let Ok(mut table) = table.try_borrow_mut() {
                table.remove(object);
            }
        }
    }
}

impl Deref for ProtectedReference {
    type Target = Reference;

    fn deref(&self) -> &Reference {
        &self.reference
    }
}

impl Clone for ProtectedReference {
    fn clone(&self) -> Self {
        let mut registry = self.registry.clone();
        if let (Some(object), Some(table)) =
            (self.reference.rooted_object(), self.registry.upgrade())
        {
            match table.try_borrow_mut() {
                Ok(mut table) => table.add(object),
                // unregistered copies must not release someone else's root
                Err(_) => registry = Weak::new(),
            }
        }
        Self {
            reference: self.reference.clone(),
            registry,
        }
    }
}

impl Drop for ProtectedReference {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ProtectedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProtectedReference")
            .field(&self.reference)
            .finish()
    }
}
