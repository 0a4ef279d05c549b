//! Reference lists for property enumeration (`for (k in obj)`).
//!
//! A [`ReferenceList`] is a snapshot: once built, changes to the host do not
//! touch the list or any iterator over it. Entries whose property has since
//! gone away are still yielded; asking them for their value or deleting them
//! reports what the host says now.

use log::debug;

use crate::prelude::*;
use crate::reference::Reference;
use crate::value::{CheapClone, ObjectRef};

/// Ordered, append-only sequence of references.
#[derive(Debug, Clone, Default)]
pub struct ReferenceList {
    entries: Vec<Reference>,
}

impl ReferenceList {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Snapshot `host`'s own property keys, in the host's order, as
    /// references into `host`. Index keys stay in index form.
    pub fn from_own_properties(host: &ObjectRef) -> Self {
        let keys = host.own_property_keys();
        debug!("enumerating {} own properties of {:?}", keys.len(), host);
        keys.into_iter()
            .map(|key| Reference::with_key(host.cheap_clone(), key))
            .collect()
    }

    pub fn append(&mut self, reference: Reference) {
        self.entries.push(reference);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Reference> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> ReferenceListIter<'_> {
        ReferenceListIter {
            list: self,
            position: 0,
        }
    }
}

impl Extend<Reference> for ReferenceList {
    fn extend<I: IntoIterator<Item = Reference>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl FromIterator<Reference> for ReferenceList {
    fn from_iter<I: IntoIterator<Item = Reference>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ReferenceList {
    type Item = Reference;
    type IntoIter = vec::IntoIter<Reference>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ReferenceList {
    type Item = &'a Reference;
    type IntoIter = ReferenceListIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over a [`ReferenceList`] in insertion order.
#[derive(Debug, Clone)]
pub struct ReferenceListIter<'a> {
    list: &'a ReferenceList,
    position: usize,
}

impl ReferenceListIter<'_> {
    /// Entries not yet yielded.
    pub fn remaining(&self) -> usize {
        self.list.len().saturating_sub(self.position)
    }
}

impl<'a> Iterator for ReferenceListIter<'a> {
    type Item = &'a Reference;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.list.entries.get(self.position)?;
        self.position += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ReferenceListIter<'_> {}
