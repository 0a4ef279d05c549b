//! Configuration for reference resolution policy.
//!
//! The one policy the reference core cannot decide on its own is what an
//! assignment to an undeclared name does. Embedders pick it here.

use serde::{Deserialize, Serialize};

use crate::error::{RefError, Result};
use crate::prelude::*;

/// What `put_value` does with an unresolved reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedWrites {
    /// Create the binding on the context's ambient host (sloppy-mode assignment).
    #[default]
    CreateOnAmbient,
    /// Fail with a reference error (strict-mode assignment).
    Throw,
}

/// Reference resolution settings applied to a [`Context`](crate::context::Context).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    pub unresolved_writes: UnresolvedWrites,
    /// Seed the identifier table with frequently used names
    pub preload_identifiers: bool,
}

/// Environment variable consulted by [`ReferenceConfig::from_env`].
#[cfg(feature = "std")]
pub const UNRESOLVED_WRITES_ENV: &str = "JSREF_UNRESOLVED_WRITES";

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            unresolved_writes: UnresolvedWrites::CreateOnAmbient,
            preload_identifiers: true,
        }
    }
}

impl ReferenceConfig {
    /// Strict-mode settings: unresolved writes throw.
    pub fn strict() -> Self {
        Self {
            unresolved_writes: UnresolvedWrites::Throw,
            ..Self::default()
        }
    }

    /// Parse settings from JSON. Missing fields keep their defaults.
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| RefError::config_error(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| RefError::config_error(e.to_string()))
    }

    /// Defaults overridden by `JSREF_UNRESOLVED_WRITES=throw|create`.
    #[cfg(feature = "std")]
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var(UNRESOLVED_WRITES_ENV).ok();
        Self::from_env_value(raw.as_deref())
    }

    /// Defaults overridden by a raw `JSREF_UNRESOLVED_WRITES` value, if set.
    fn from_env_value(raw: Option<&str>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = raw {
            config.unresolved_writes = parse_unresolved_writes(raw)?;
        }
        Ok(config)
    }
}

fn parse_unresolved_writes(raw: &str) -> Result<UnresolvedWrites> {
    match raw.trim() {
        "throw" | "strict" => Ok(UnresolvedWrites::Throw),
        "create" | "create_on_ambient" | "sloppy" => Ok(UnresolvedWrites::CreateOnAmbient),
        other => Err(RefError::config_error(format!(
            "unknown unresolved write policy '{}'",
            other
        ))),
    }
}
