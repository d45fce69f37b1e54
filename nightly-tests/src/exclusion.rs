// Copyright (c) The nightly-tests Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsing the list of tests to exclude.
//!
//! The list is a comma-separated string of test name patterns. Patterns are kept exactly as
//! written: surrounding whitespace is part of the pattern, since patterns are matched against test
//! names later on.

use indexmap::IndexSet;
use tracing::warn;

/// The delimiter between patterns in the list of tests.
pub const PATTERN_DELIMITER: char = ',';

/// Splits `raw` on [`PATTERN_DELIMITER`] and removes duplicates, keeping the first occurrence of
/// each pattern in order.
///
/// No entries are dropped, not even empty ones: an empty input results in a single empty pattern.
/// Use [`ExclusionPatterns::new`] to validate the result.
pub fn parse_exclude_list(raw: &str) -> IndexSet<&str> {
    raw.split(PATTERN_DELIMITER).collect()
}

/// A validated, non-empty set of test name patterns to exclude.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExclusionPatterns {
    patterns: IndexSet<String>,
}

impl ExclusionPatterns {
    /// Validates a parsed list of patterns.
    ///
    /// Empty entries can't name a test, so they are dropped. Every other entry is kept exactly as
    /// written, including whitespace-only ones. Returns `None` if every entry is empty or
    /// whitespace-only.
    pub fn new<'a>(parsed: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let mut empty = 0_usize;
        let patterns: IndexSet<String> = parsed
            .into_iter()
            .filter(|pattern| {
                empty += usize::from(pattern.is_empty());
                !pattern.is_empty()
            })
            .map(ToOwned::to_owned)
            .collect();

        if patterns.iter().all(|pattern| pattern.trim().is_empty()) {
            return None;
        }
        if empty > 0 {
            warn!("ignoring {empty} empty entries in the list of tests to exclude");
        }
        Some(Self { patterns })
    }

    /// Parses and validates `raw` in one step.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::new(parse_exclude_list(raw))
    }

    /// Returns the number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always returns false: a validated set has at least one pattern.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns the patterns in the order they were first listed.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.patterns.iter().map(String::as_str)
    }
}
