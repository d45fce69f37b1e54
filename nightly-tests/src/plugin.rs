// Copyright (c) The nightly-tests Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Applying nightly test exclusions to a project.
//!
//! The main structure in this module is [`NightlyTestsPlugin`]. Applying it to a project runs
//! through these steps:
//!
//! 1. If the build is a nightly build, stop: every test should run.
//! 2. Look up [`LIST_OF_TESTS_KEY`] in the project's property scopes.
//! 3. Parse the value into a non-empty set of exclude patterns.
//! 4. Find the project's test tasks. There must be at least one.
//! 5. Exclude every pattern from every test task.
//!
//! Any failure aborts the whole sequence before a single exclusion is applied.

use crate::{
    env::{BUILD_SERVER_ENV, EnvStore, ProcessEnv},
    errors::{ApplyError, InvalidConfigurationReason},
    exclusion::ExclusionPatterns,
    nightly::NightlyDetector,
    project::Project,
    properties::{LIST_OF_TESTS_KEY, PropertyScopes},
    task::TestTask,
};
use tracing::{debug, info};

/// What [`NightlyTestsPlugin::apply`] did.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ApplyOutcome {
    /// This is a nightly build, so no tests were excluded. The project was not inspected.
    SkippedNightly,

    /// Exclusions were applied.
    Applied {
        /// The number of test tasks that exclusions were applied to.
        tasks: usize,

        /// The number of distinct patterns excluded from each task.
        patterns: usize,
    },
}

/// Excludes nightly-only tests from a project's test tasks, except during nightly builds.
#[derive(Clone, Debug)]
pub struct NightlyTestsPlugin<E = ProcessEnv> {
    detector: NightlyDetector<E>,
}

impl NightlyTestsPlugin<ProcessEnv> {
    /// Creates a new plugin that reads the environment of the current process.
    pub fn from_process_env() -> Self {
        Self::new(ProcessEnv)
    }
}

impl Default for NightlyTestsPlugin<ProcessEnv> {
    fn default() -> Self {
        Self::from_process_env()
    }
}

impl<E: EnvStore> NightlyTestsPlugin<E> {
    /// Creates a new plugin that reads environment variables from `env`.
    pub fn new(env: E) -> Self {
        Self {
            detector: NightlyDetector::new(env),
        }
    }

    /// Applies nightly test exclusions to `project`.
    ///
    /// This is meant to be called once per project. It doesn't retain any state between calls.
    pub fn apply<P: Project + ?Sized>(&self, project: &mut P) -> Result<ApplyOutcome, ApplyError> {
        let project_path = project.path().to_owned();

        if let Some(build_server) = self.detector.nightly_build_server() {
            info!(
                "nightly build detected ({BUILD_SERVER_ENV}={build_server:?}), \
                 not excluding any tests from project `{project_path}`",
            );
            return Ok(ApplyOutcome::SkippedNightly);
        }

        let patterns = resolve_patterns(&project_path, &project.property_scopes())?;

        let mut tasks = project.test_tasks();
        if tasks.is_empty() {
            return Err(ApplyError::NoTestTasksFound {
                project: project_path,
            });
        }

        apply_exclusions(&patterns, &mut tasks);
        debug!(
            "excluded {} patterns from {} test tasks of project `{project_path}`",
            patterns.len(),
            tasks.len(),
        );
        Ok(ApplyOutcome::Applied {
            tasks: tasks.len(),
            patterns: patterns.len(),
        })
    }
}

/// Looks up and validates the list of tests to exclude.
fn resolve_patterns(
    project: &str,
    scopes: &PropertyScopes<'_>,
) -> Result<ExclusionPatterns, ApplyError> {
    let Some(resolved) = scopes.resolve(LIST_OF_TESTS_KEY) else {
        return Err(ApplyError::MissingConfiguration {
            project: project.to_owned(),
            key: LIST_OF_TESTS_KEY.to_owned(),
        });
    };
    debug!(
        "read `{LIST_OF_TESTS_KEY}` for project `{project}` from `{}`",
        resolved.scope
    );

    let invalid = |reason| ApplyError::InvalidConfiguration {
        key: LIST_OF_TESTS_KEY.to_owned(),
        scope: resolved.scope.to_owned(),
        reason,
    };

    let raw = resolved
        .value
        .as_str()
        .ok_or_else(|| {
            invalid(InvalidConfigurationReason::NotAString {
                found: resolved.value.type_str(),
            })
        })?;

    ExclusionPatterns::parse(raw).ok_or_else(|| {
        invalid(InvalidConfigurationReason::Blank {
            value: raw.to_owned(),
        })
    })
}

/// Excludes every pattern from every task: tasks in discovery order, patterns in listed order.
pub fn apply_exclusions(patterns: &ExclusionPatterns, tasks: &mut [&mut dyn TestTask]) {
    for task in tasks.iter_mut() {
        debug!("excluding {} patterns from task `{}`", patterns.len(), task.name());
        for pattern in patterns.iter() {
            task.exclude_tests_matching(pattern);
        }
    }
}
