// Copyright (c) The nightly-tests Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Project properties and their lookup through enclosing scopes.
//!
//! A project's own properties shadow those of its enclosing (root) project, which act as a
//! fallback. [`PropertyScopes`] models this as an ordered list of sources tried in sequence.

mod map;
mod scopes;

pub use map::*;
pub use scopes::*;

/// The property holding the comma-separated list of tests to exclude outside of nightly builds.
pub const LIST_OF_TESTS_KEY: &str = "plugins.nightlytests.listOfTests";

/// A read-only source of property values.
pub trait PropertySource {
    /// Returns the value of `key`, or `None` if this source doesn't define it.
    fn property(&self, key: &str) -> Option<&toml::Value>;
}
