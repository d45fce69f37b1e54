// Copyright (c) The nightly-tests Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::PropertySource;
use crate::errors::PropertiesLoadError;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

/// The location of a project's properties file, relative to the project directory.
pub const PROPERTIES_FILE_PATH: &str = ".config/nightly-tests.toml";

/// An in-memory set of properties.
///
/// Keys are looked up exactly first. If there's no exact match, dotted keys are looked up through
/// nested tables, so that both of these define `plugins.nightlytests.listOfTests`:
///
/// ```toml
/// "plugins.nightlytests.listOfTests" = "com.example.SlowTest"
///
/// [plugins.nightlytests]
/// listOfTests = "com.example.SlowTest"
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyMap {
    table: toml::Table,
}

impl PropertyMap {
    /// Creates an empty `PropertyMap`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML document into a `PropertyMap`.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let table = toml::from_str(contents)?;
        Ok(Self { table })
    }

    /// Reads and parses the TOML properties file at `path`.
    pub fn load(path: impl Into<Utf8PathBuf>) -> Result<Self, PropertiesLoadError> {
        let path = path.into();
        let contents =
            std::fs::read_to_string(&path).map_err(|error| PropertiesLoadError::ReadError {
                path: path.clone(),
                error,
            })?;
        Self::from_toml_str(&contents).map_err(|error| PropertiesLoadError::ParseError {
            path,
            error: Box::new(error),
        })
    }

    /// Loads the properties of the project in `project_dir`, from [`PROPERTIES_FILE_PATH`].
    ///
    /// A project without a properties file has no properties.
    pub fn discover(project_dir: &Utf8Path) -> Result<Self, PropertiesLoadError> {
        let path = project_dir.join(PROPERTIES_FILE_PATH);
        if path.is_file() {
            debug!("loading properties from {path}");
            Self::load(path)
        } else {
            debug!("no properties file at {path}");
            Ok(Self::new())
        }
    }

    /// Sets `key` to `value`, returning the previous value if any.
    ///
    /// `key` is stored as given: dots are not interpreted.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<toml::Value>,
    ) -> Option<toml::Value> {
        self.table.insert(key.into(), value.into())
    }

    /// Returns true if there are no properties.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl PropertySource for PropertyMap {
    fn property(&self, key: &str) -> Option<&toml::Value> {
        if let Some(value) = self.table.get(key) {
            return Some(value);
        }

        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut value = self.table.get(first)?;
        for segment in segments {
            value = value.as_table()?.get(segment)?;
        }
        Some(value)
    }
}

impl<K: Into<String>, V: Into<toml::Value>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.set(key, value);
        }
        map
    }
}
