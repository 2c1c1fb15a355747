//! Catalog of loadable modules
//!
//! The reference host never opens shared objects. Instead it resolves module
//! names against a catalog of `OnLoad` entry points compiled into the process.

use std::collections::BTreeMap;
use std::fmt;

use modhost_core::OnLoad;

/// Name -> load entry point.
#[derive(Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<String, OnLoad>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, replacing any previous entry with the same name.
    pub fn register(&mut self, name: &str, on_load: OnLoad) -> &mut Self {
        self.entries.insert(name.to_string(), on_load);
        self
    }

    /// Look up an entry point.
    pub fn get(&self, name: &str) -> Option<OnLoad> {
        self.entries.get(name).copied()
    }

    /// Entry names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

impl<'a> FromIterator<(&'a str, OnLoad)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (&'a str, OnLoad)>>(iter: T) -> Self {
        let mut catalog = Catalog::new();
        catalog.extend(iter);
        catalog
    }
}

impl<'a> Extend<(&'a str, OnLoad)> for Catalog {
    fn extend<T: IntoIterator<Item = (&'a str, OnLoad)>>(&mut self, iter: T) {
        for (name, on_load) in iter {
            self.register(name, on_load);
        }
    }
}
