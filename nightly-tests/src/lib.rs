// Copyright (c) The nightly-tests Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Build-time exclusion of nightly-only tests.
//!
//! During ordinary builds, the tests named by the `plugins.nightlytests.listOfTests` property are
//! excluded from every test task of a project. When the `BUILDSERVER` environment variable marks
//! the build as a nightly build, nothing is excluded and all tests run.
//!
//! The entry point is [`NightlyTestsPlugin::apply`](plugin::NightlyTestsPlugin::apply). The host
//! build system is reached only through the [`Project`](project::Project) and
//! [`TestTask`](task::TestTask) traits, and the process environment only through
//! [`EnvStore`](env::EnvStore).

pub mod env;
pub mod errors;
pub mod exclusion;
pub mod nightly;
pub mod plugin;
pub mod project;
pub mod properties;
pub mod task;
#[cfg(test)]
mod test_helpers;
