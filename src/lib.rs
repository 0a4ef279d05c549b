//! Reference resolution for embeddable JavaScript interpreters.
//!
//! Assignable expressions (identifiers, `obj.name`, `obj[i]`) evaluate to a
//! [`Reference`], which is later read, written or deleted against its host.
//! Plain values can be wrapped as references so the evaluator treats every
//! expression result the same way.
//!
//! # Example
//!
//! ```
//! use jsref::{Context, Identifier, Reference, RefError, Value};
//!
//! let mut cx = Context::new();
//!
//! let r = Reference::value(Value::Number(7.0));
//! assert_eq!(r.get_value(&mut cx).unwrap(), Value::Number(7.0));
//!
//! let free = Reference::unresolved(Identifier::from("nope"));
//! assert!(matches!(
//!     free.get_value(&mut cx),
//!     Err(RefError::UnresolvedBinding { .. })
//! ));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod config;
pub mod context;
pub mod error;
pub mod host;
pub mod identifier;
pub mod list;
pub mod prelude;
pub mod protect;
pub mod reference;
pub mod value;

pub use config::{ReferenceConfig, UnresolvedWrites};
pub use context::{Context, ExecState};
pub use error::{RefError, Result};
pub use host::PropertyHost;
pub use identifier::{Identifier, IdentifierTable, Interner};
pub use list::{ReferenceList, ReferenceListIter};
pub use protect::{ProtectedReference, RootRegistry, RootStats};
pub use reference::Reference;
pub use value::{CheapClone, ObjectRef, PropertyKey, Value};
