// Copyright (c) The nightly-tests Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::fixtures::*;
use camino::Utf8Path;
use color_eyre::eyre::{Result, ensure};
use nightly_tests::{
    errors::{ApplyErrorKind, PropertiesLoadError},
    plugin::ApplyOutcome,
    project::InMemoryProject,
    properties::{PROPERTIES_FILE_PATH, PropertyMap},
    task::TestTask,
};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn load_projects(dir: &Utf8Path) -> Result<(InMemoryProject, InMemoryProject)> {
    let root = InMemoryProject::root().with_properties(PropertyMap::discover(dir)?);
    let app = InMemoryProject::child_of(&root, "app")
        .with_properties(PropertyMap::discover(&dir.join("app"))?);
    Ok((root, app))
}

fn exclusions(project: &InMemoryProject, task: &str) -> Vec<String> {
    project
        .find_test_task(task)
        .map(|task| task.exclude_patterns().iter().cloned().collect())
        .unwrap_or_default()
}

#[test]
fn without_properties() -> Result<()> {
    test_init();
    let dir = setup_temp_dir(None, None)?;
    let (_, mut app) = load_projects(dir.path())?;
    app.add_test_task("test");

    let error = plugin(None).apply(&mut app).unwrap_err();
    assert_eq!(error.kind(), ApplyErrorKind::MissingConfiguration);
    assert!(exclusions(&app, "test").is_empty());
    Ok(())
}

#[test]
fn nightly_without_properties() -> Result<()> {
    test_init();
    let dir = setup_temp_dir(None, None)?;
    let (mut root, _) = load_projects(dir.path())?;

    let outcome = plugin(Some("NIGHTLYBUILD")).apply(&mut root)?;
    assert_eq!(outcome, ApplyOutcome::SkippedNightly);
    Ok(())
}

#[test]
fn properties_without_test_task() -> Result<()> {
    test_init();
    let dir = setup_temp_dir(Some(ROOT_PROPERTIES), None)?;
    let (mut root, _) = load_projects(dir.path())?;

    let error = plugin(None).apply(&mut root).unwrap_err();
    assert_eq!(error.kind(), ApplyErrorKind::NoTestTasksFound);
    Ok(())
}

#[test]
fn wrong_properties() -> Result<()> {
    test_init();
    let dir = setup_temp_dir(Some(WRONG_PROPERTIES), None)?;
    let (mut root, _) = load_projects(dir.path())?;
    root.add_test_task("test");

    let error = plugin(None).apply(&mut root).unwrap_err();
    assert_eq!(error.kind(), ApplyErrorKind::InvalidConfiguration);
    Ok(())
}

#[test]
fn properties_and_test_task() -> Result<()> {
    test_init();
    let dir = setup_temp_dir(Some(ROOT_PROPERTIES), None)?;
    let (mut root, _) = load_projects(dir.path())?;
    root.add_test_task("test");

    let outcome = plugin(Some("jenkins")).apply(&mut root)?;
    assert_eq!(
        outcome,
        ApplyOutcome::Applied {
            tasks: 1,
            patterns: 2
        }
    );
    assert_eq!(
        exclusions(&root, "test"),
        ["com.example.SlowTest", "com.example.FlakyTest"],
    );
    Ok(())
}

#[test_case(None, &["com.example.SlowTest", "com.example.FlakyTest"] ; "inherited from root")]
#[test_case(Some(APP_PROPERTIES), &["com.example.app.HugeTest"] ; "own properties shadow root")]
fn subproject(app_properties: Option<&str>, expected: &[&str]) -> Result<()> {
    test_init();
    let dir = setup_temp_dir(Some(ROOT_PROPERTIES), app_properties)?;
    let (root, mut app) = load_projects(dir.path())?;
    app.add_test_task("test").add_test_task("integrationTest");

    plugin(None).apply(&mut app)?;
    for task in app.iter_test_tasks() {
        let patterns: Vec<_> = task.exclude_patterns().iter().collect();
        ensure!(
            patterns == expected,
            "task {} has patterns {patterns:?}, expected {expected:?}",
            task.name(),
        );
    }
    // The root project itself is left alone.
    assert_eq!(root.iter_test_tasks().len(), 0);
    Ok(())
}

#[test]
fn unparseable_properties_file() -> Result<()> {
    test_init();
    let dir = setup_temp_dir(Some("listOfTests = "), None)?;

    let error = PropertyMap::discover(dir.path()).unwrap_err();
    assert!(
        matches!(&error, PropertiesLoadError::ParseError { path, .. } if path.ends_with(PROPERTIES_FILE_PATH)),
        "{error:?}"
    );
    Ok(())
}

#[test]
fn unreadable_properties_file() -> Result<()> {
    test_init();
    let dir = setup_temp_dir(None, None)?;

    let error = PropertyMap::load(dir.path().join("does-not-exist.toml")).unwrap_err();
    assert!(
        matches!(error, PropertiesLoadError::ReadError { .. }),
        "{error:?}"
    );
    Ok(())
}
