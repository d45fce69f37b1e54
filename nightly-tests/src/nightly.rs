// Copyright (c) The nightly-tests Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Detecting nightly builds.

use crate::env::{BUILD_SERVER_ENV, EnvStore};

/// The marker that, found anywhere in [`BUILD_SERVER_ENV`] (ignoring case), flags a nightly
/// build.
pub const NIGHTLY_MARKER: &str = "nightly";

/// Decides whether the current build is a nightly build.
#[derive(Clone, Copy, Debug)]
pub struct NightlyDetector<E> {
    env: E,
}

impl<E: EnvStore> NightlyDetector<E> {
    /// Creates a new detector reading from `env`.
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Returns true if [`BUILD_SERVER_ENV`] is set and contains [`NIGHTLY_MARKER`], compared
    /// case-insensitively.
    ///
    /// An unset variable is not an error: it just means this isn't a nightly build.
    pub fn is_nightly_build(&self) -> bool {
        self.nightly_build_server().is_some()
    }

    /// Reads [`BUILD_SERVER_ENV`] once, returning its value if it marks a nightly build.
    pub fn nightly_build_server(&self) -> Option<String> {
        self.env
            .var(BUILD_SERVER_ENV)
            .filter(|value| contains_ignore_case(value, NIGHTLY_MARKER))
    }
}

/// Returns true if `needle` occurs in `haystack`, comparing one character at a time and ignoring
/// case.
///
/// Characters are compared through their single-character case mappings, so that e.g. `İ`
/// (U+0130) matches `i`. Full case mapping would turn `İ` into two characters.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let haystack: Vec<char> = haystack.chars().collect();
    let needle: Vec<char> = needle.chars().collect();
    haystack.windows(needle.len()).any(|window| {
        window
            .iter()
            .zip(&needle)
            .all(|(&a, &b)| chars_eq_ignore_case(a, b))
    })
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (upper_a, upper_b) = (simple_uppercase(a), simple_uppercase(b));
    upper_a == upper_b || simple_lowercase(upper_a) == simple_lowercase(upper_b)
}

fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(upper), None) => upper,
        _ => c,
    }
}

fn simple_lowercase(c: char) -> char {
    // The only multi-character lowercase mapping is U+0130, whose single-character mapping is
    // the first character of the full one.
    c.to_lowercase().next().unwrap_or(c)
}
