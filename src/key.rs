//! Versioned resource identifier.
//!
//! Example: resource id "c9d5180df5" at version "25"  =>  ResourceKey("c9d5180df5v25")
//!
//! The separator is a bare "v" with no escaping, so an id or version that itself
//! contains "v" can collide with another pair. We store the formatted string and
//! derive ordering so it can be used in BTreeMap keys.

use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ResourceKey(String);

impl ResourceKey {
    pub fn new(id: &str, version: &str) -> Self {
        Self(format!("{id}v{version}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ResourceKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}
