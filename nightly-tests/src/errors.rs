// Copyright (c) The nightly-tests Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced by nightly-tests.

use camino::Utf8PathBuf;
use std::fmt;
use thiserror::Error;

/// An error that caused [`NightlyTestsPlugin::apply`](crate::plugin::NightlyTestsPlugin::apply)
/// to fail.
///
/// All variants are configuration errors that the build author must fix. None of them are
/// transient, and no exclusions are applied when one is returned.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplyError {
    /// Neither the project nor any enclosing scope sets the list-of-tests property.
    #[error(
        "property `{key}` missing in the properties of project `{project}` \
         and its enclosing projects"
    )]
    MissingConfiguration {
        /// The project the plugin was applied to.
        project: String,

        /// The property that was looked up.
        key: String,
    },

    /// The list-of-tests property is set, but it doesn't describe any tests.
    #[error("property `{key}` (set in `{scope}`) is empty or not correctly set: {reason}")]
    InvalidConfiguration {
        /// The property that was looked up.
        key: String,

        /// The name of the scope that supplied the value.
        scope: String,

        /// Why the value is unusable.
        reason: InvalidConfigurationReason,
    },

    /// The project doesn't have any test tasks to apply exclusions to.
    #[error(
        "no test tasks found in project `{project}`, \
         so excluding nightly tests from it is not necessary"
    )]
    NoTestTasksFound {
        /// The project the plugin was applied to.
        project: String,
    },
}

impl ApplyError {
    /// Returns the kind of this error, without its details.
    pub fn kind(&self) -> ApplyErrorKind {
        match self {
            Self::MissingConfiguration { .. } => ApplyErrorKind::MissingConfiguration,
            Self::InvalidConfiguration { .. } => ApplyErrorKind::InvalidConfiguration,
            Self::NoTestTasksFound { .. } => ApplyErrorKind::NoTestTasksFound,
        }
    }
}

/// The kind of an [`ApplyError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ApplyErrorKind {
    /// See [`ApplyError::MissingConfiguration`].
    MissingConfiguration,

    /// See [`ApplyError::InvalidConfiguration`].
    InvalidConfiguration,

    /// See [`ApplyError::NoTestTasksFound`].
    NoTestTasksFound,
}

impl fmt::Display for ApplyErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingConfiguration => write!(f, "missing configuration"),
            Self::InvalidConfiguration => write!(f, "invalid configuration"),
            Self::NoTestTasksFound => write!(f, "no test tasks found"),
        }
    }
}

/// The reason an [`ApplyError::InvalidConfiguration`] was produced.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidConfigurationReason {
    /// The value contains no entries other than empty or whitespace-only ones.
    #[error("value {value:?} does not name any tests")]
    Blank {
        /// The raw value.
        value: String,
    },

    /// The value isn't a string.
    #[error("expected a comma-separated string, found {found}")]
    NotAString {
        /// The type of the value that was found.
        found: &'static str,
    },
}

/// An error that occurred while loading a properties file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PropertiesLoadError {
    /// The file could not be read.
    #[error("failed to read properties file at `{path}`")]
    ReadError {
        /// The path that was read.
        path: Utf8PathBuf,

        /// The underlying error.
        #[source]
        error: std::io::Error,
    },

    /// The file is not valid TOML.
    #[error("failed to parse properties file at `{path}`")]
    ParseError {
        /// The path that was parsed.
        path: Utf8PathBuf,

        /// The underlying error.
        #[source]
        error: Box<toml::de::Error>,
    },
}
