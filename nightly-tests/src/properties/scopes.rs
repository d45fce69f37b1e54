// Copyright (c) The nightly-tests Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::PropertySource;
use std::fmt;

/// A named property source within a [`PropertyScopes`] chain.
#[derive(Clone, Copy)]
pub struct PropertyScope<'a> {
    name: &'a str,
    source: &'a dyn PropertySource,
}

impl<'a> PropertyScope<'a> {
    /// Creates a new scope called `name`.
    ///
    /// The name is only used for diagnostics, and is typically the path of the project that owns
    /// the properties.
    pub fn new(name: &'a str, source: &'a dyn PropertySource) -> Self {
        Self { name, source }
    }

    /// Returns the name of this scope.
    pub fn name(&self) -> &'a str {
        self.name
    }
}

impl fmt::Debug for PropertyScope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyScope")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An ordered chain of property scopes, innermost first.
///
/// Lookups stop at the first scope that defines the key, so a project's own properties shadow
/// those of the projects enclosing it.
#[derive(Clone, Debug, Default)]
pub struct PropertyScopes<'a> {
    scopes: Vec<PropertyScope<'a>>,
}

impl<'a> PropertyScopes<'a> {
    /// Creates an empty chain. Nothing resolves against it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the usual two-level chain: a project's own properties, then those of the project
    /// enclosing it.
    pub fn local_and_enclosing(local: PropertyScope<'a>, enclosing: PropertyScope<'a>) -> Self {
        Self {
            scopes: vec![local, enclosing],
        }
    }

    /// Appends `scope` as the new outermost scope.
    pub fn push(&mut self, scope: PropertyScope<'a>) {
        self.scopes.push(scope);
    }

    /// Returns an iterator over the scopes, innermost first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &PropertyScope<'a>> + '_ {
        self.scopes.iter()
    }

    /// Looks up `key`, returning the value from the innermost scope that defines it.
    pub fn resolve(&self, key: &str) -> Option<ResolvedProperty<'a>> {
        self.scopes.iter().find_map(|scope| {
            scope.source.property(key).map(|value| ResolvedProperty {
                scope: scope.name,
                value,
            })
        })
    }
}

/// A property value found by [`PropertyScopes::resolve`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedProperty<'a> {
    /// The name of the scope that defined the value.
    pub scope: &'a str,

    /// The value itself.
    pub value: &'a toml::Value,
}
