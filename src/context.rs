//! Execution context seam.
//!
//! References never look anything up on their own beyond their host; whatever
//! else they need (the identifier table, the ambient host that backs
//! unresolved names, the unresolved-write policy) comes from an [`ExecState`].

use crate::config::{ReferenceConfig, UnresolvedWrites};
use crate::identifier::{IdentifierTable, Interner};
use crate::prelude::*;
use crate::value::{CheapClone, ObjectRef};

/// What a reference needs from the evaluator's execution state.
pub trait ExecState {
    fn identifiers(&mut self) -> &mut dyn Interner;

    /// Host that backs names no scope binds (usually the global object).
    fn ambient_host(&self) -> Option<ObjectRef>;

    fn unresolved_writes(&self) -> UnresolvedWrites;
}

/// Stock execution context: an identifier table, an optional ambient host and
/// a [`ReferenceConfig`].
pub struct Context {
    identifiers: IdentifierTable,
    ambient: Option<ObjectRef>,
    config: ReferenceConfig,
}

impl Context {
    pub fn new() -> Self {
        Self::with_config(ReferenceConfig::default())
    }

    pub fn with_config(config: ReferenceConfig) -> Self {
        let identifiers = if config.preload_identifiers {
            IdentifierTable::with_common_identifiers()
        } else {
            IdentifierTable::new()
        };
        Self {
            identifiers,
            ambient: None,
            config,
        }
    }

    /// Builder-style variant of [`Context::set_ambient_host`].
    pub fn with_ambient_host(mut self, host: ObjectRef) -> Self {
        self.ambient = Some(host);
        self
    }

    pub fn set_ambient_host(&mut self, host: Option<ObjectRef>) {
        self.ambient = host;
    }

    pub fn config(&self) -> &ReferenceConfig {
        &self.config
    }

    pub fn set_unresolved_writes(&mut self, policy: UnresolvedWrites) {
        self.config.unresolved_writes = policy;
    }

    /// The concrete identifier table, for inspection.
    pub fn identifier_table(&self) -> &IdentifierTable {
        &self.identifiers
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecState for Context {
    fn identifiers(&mut self) -> &mut dyn Interner {
        &mut self.identifiers
    }

    fn ambient_host(&self) -> Option<ObjectRef> {
        self.ambient.as_ref().map(|host| host.cheap_clone())
    }

    fn unresolved_writes(&self) -> UnresolvedWrites {
        self.config.unresolved_writes
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("identifiers", &self.identifiers.len())
            .field("ambient", &self.ambient)
            .field("config", &self.config)
            .finish()
    }
}
