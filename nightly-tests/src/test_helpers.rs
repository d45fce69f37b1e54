// Copyright (c) The nightly-tests Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{env::EnvStore, project::Project, properties::PropertyScopes, task::TestTask};
use std::cell::Cell;

/// A project that fails the test if anything other than its path is looked at.
pub(crate) struct UntouchedProject;

impl Project for UntouchedProject {
    fn path(&self) -> &str {
        ":untouched"
    }

    fn property_scopes(&self) -> PropertyScopes<'_> {
        panic!("property scopes should not be read")
    }

    fn test_tasks(&mut self) -> Vec<&mut dyn TestTask> {
        panic!("test tasks should not be discovered")
    }
}

/// A test task that records every call, including repeated patterns.
pub(crate) struct RecordingTask {
    name: String,
    calls: Vec<String>,
}

impl RecordingTask {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            calls: Vec::new(),
        }
    }

    pub(crate) fn calls(&self) -> &[String] {
        &self.calls
    }
}

impl TestTask for RecordingTask {
    fn name(&self) -> &str {
        &self.name
    }

    fn exclude_tests_matching(&mut self, pattern: &str) {
        self.calls.push(pattern.to_owned());
    }
}

/// An environment with a single variable that counts how often it is read.
pub(crate) struct CountingEnv {
    key: &'static str,
    value: &'static str,
    reads: Cell<usize>,
}

impl CountingEnv {
    pub(crate) fn new(key: &'static str, value: &'static str) -> Self {
        Self {
            key,
            value,
            reads: Cell::new(0),
        }
    }

    pub(crate) fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl EnvStore for CountingEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.reads.set(self.reads.get() + 1);
        (key == self.key).then(|| self.value.to_owned())
    }
}
