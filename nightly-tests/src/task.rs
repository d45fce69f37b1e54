// Copyright (c) The nightly-tests Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test tasks: the units of test execution in the host build.

use indexmap::IndexSet;

/// A unit of test execution in the host build that tests can be excluded from.
pub trait TestTask {
    /// Returns the name of this task, for diagnostics.
    fn name(&self) -> &str;

    /// Excludes tests whose names match `pattern` from this task.
    ///
    /// Adding the same pattern more than once has the same effect as adding it once.
    fn exclude_tests_matching(&mut self, pattern: &str);
}

/// A test task that records its exclude patterns in memory.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InMemoryTestTask {
    name: String,
    exclude_patterns: IndexSet<String>,
}

impl InMemoryTestTask {
    /// Creates a new task called `name`, without any exclusions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exclude_patterns: IndexSet::new(),
        }
    }

    /// Returns the patterns excluded so far, in the order they were first added.
    pub fn exclude_patterns(&self) -> &IndexSet<String> {
        &self.exclude_patterns
    }
}

impl TestTask for InMemoryTestTask {
    fn name(&self) -> &str {
        &self.name
    }

    fn exclude_tests_matching(&mut self, pattern: &str) {
        if !self.exclude_patterns.contains(pattern) {
            self.exclude_patterns.insert(pattern.to_owned());
        }
    }
}
