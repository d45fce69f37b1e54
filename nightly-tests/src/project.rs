// Copyright (c) The nightly-tests Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The host build's view of a project.

use crate::{
    properties::{PropertyMap, PropertyScope, PropertyScopes},
    task::{InMemoryTestTask, TestTask},
};
use std::sync::Arc;

/// A project in the host build that nightly test exclusions can be applied to.
pub trait Project {
    /// Returns the path of this project, for diagnostics. For example, `:` for a root project or
    /// `:app` for a subproject.
    fn path(&self) -> &str;

    /// Returns the property scopes visible to this project, with its own properties first,
    /// followed by those of each enclosing project.
    fn property_scopes(&self) -> PropertyScopes<'_>;

    /// Returns all test tasks of this project, in discovery order.
    fn test_tasks(&mut self) -> Vec<&mut dyn TestTask>;
}

/// A project held entirely in memory.
///
/// Enclosing projects' properties are shared, so that several subprojects can fall back to the
/// same root properties.
#[derive(Clone, Debug)]
pub struct InMemoryProject {
    path: String,
    properties: Arc<PropertyMap>,
    // Innermost first.
    enclosing: Vec<(String, Arc<PropertyMap>)>,
    test_tasks: Vec<InMemoryTestTask>,
}

impl InMemoryProject {
    /// Creates a new root project with no properties and no test tasks.
    pub fn root() -> Self {
        Self {
            path: ":".to_owned(),
            properties: Arc::new(PropertyMap::new()),
            enclosing: Vec::new(),
            test_tasks: Vec::new(),
        }
    }

    /// Creates a new subproject of `parent` called `name`, with no properties and no test tasks
    /// of its own.
    pub fn child_of(parent: &Self, name: &str) -> Self {
        let path = if parent.path.ends_with(':') {
            format!("{}{name}", parent.path)
        } else {
            format!("{}:{name}", parent.path)
        };

        let mut enclosing = Vec::with_capacity(parent.enclosing.len() + 1);
        enclosing.push((parent.path.clone(), Arc::clone(&parent.properties)));
        enclosing.extend(parent.enclosing.iter().cloned());

        Self {
            path,
            properties: Arc::new(PropertyMap::new()),
            enclosing,
            test_tasks: Vec::new(),
        }
    }

    /// Replaces this project's own properties.
    pub fn with_properties(mut self, properties: PropertyMap) -> Self {
        self.properties = Arc::new(properties);
        self
    }

    /// Returns this project's own properties for modification.
    ///
    /// Subprojects created before this call keep seeing the old properties.
    pub fn properties_mut(&mut self) -> &mut PropertyMap {
        Arc::make_mut(&mut self.properties)
    }

    /// Registers a new test task called `name`.
    pub fn add_test_task(&mut self, name: impl Into<String>) -> &mut Self {
        self.test_tasks.push(InMemoryTestTask::new(name));
        self
    }

    /// Returns the test task called `name`, if any.
    pub fn find_test_task(&self, name: &str) -> Option<&InMemoryTestTask> {
        self.test_tasks.iter().find(|task| task.name() == name)
    }

    /// Returns an iterator over this project's test tasks.
    pub fn iter_test_tasks(&self) -> impl ExactSizeIterator<Item = &InMemoryTestTask> + '_ {
        self.test_tasks.iter()
    }
}

impl Project for InMemoryProject {
    fn path(&self) -> &str {
        &self.path
    }

    fn property_scopes(&self) -> PropertyScopes<'_> {
        let mut scopes = PropertyScopes::new();
        scopes.push(PropertyScope::new(&self.path, &*self.properties));
        for (path, properties) in &self.enclosing {
            scopes.push(PropertyScope::new(path, &**properties));
        }
        scopes
    }

    fn test_tasks(&mut self) -> Vec<&mut dyn TestTask> {
        self.test_tasks
            .iter_mut()
            .map(|task| task as &mut dyn TestTask)
            .collect()
    }
}
