//! Read-only environment lookups.
//!
//! The resolver never reads `std::env` directly; it takes an [`EnvLookup`].
//! Production code passes [`ProcessEnv`], tests pass a map.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A read-only key-value view of an environment.
pub trait EnvLookup {
    /// Value of `name`, or `None` if it is not defined.
    ///
    /// Empty values are returned as-is; the resolver decides what "empty" means.
    fn get(&self, name: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        let value = std::env::var_os(name)?;
        value
            .into_string()
            .inspect_err(|_| log::debug!("{name} is not valid UTF-8, ignoring"))
            .ok()
    }
}

impl<S: BuildHasher> EnvLookup for HashMap<String, String, S> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl EnvLookup for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        BTreeMap::get(self, name).cloned()
    }
}

impl<T: EnvLookup + ?Sized> EnvLookup for &T {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}
