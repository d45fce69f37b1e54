// Copyright (c) The nightly-tests Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only access to process-wide environment variables.
//!
//! Nightly detection only ever reads from an [`EnvStore`], so tests and hosts can substitute an
//! [`EnvMap`] for the real environment.

use std::collections::BTreeMap;

/// The environment variable that marks the kind of build server running the build.
pub const BUILD_SERVER_ENV: &str = "BUILDSERVER";

/// A read-only store of environment variables.
pub trait EnvStore {
    /// Returns the value of `key`, or `None` if it isn't set.
    fn var(&self, key: &str) -> Option<String>;
}

impl<T: EnvStore + ?Sized> EnvStore for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// The environment of the current process.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Values that aren't valid UTF-8 are converted lossily so that they can still be
        // inspected.
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

/// An in-memory environment.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EnvMap {
    map: BTreeMap<String, String>,
}

impl EnvMap {
    /// Creates an empty `EnvMap`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, returning the previous value if any.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.map.insert(key.into(), value.into())
    }

    /// Removes `key`, returning its value if it was set.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.map.remove(key)
    }
}

impl EnvStore for EnvMap {
    fn var(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for EnvMap {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self { map }
    }
}
