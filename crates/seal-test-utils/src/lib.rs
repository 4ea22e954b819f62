//! Testing utilities for the SEAL workspace
//!
//! Shared fixtures: an in-memory mirror task and temp files holding it.

#![allow(missing_docs)]
#![allow(clippy::missing_panics_doc)]

use seal_core::DemoSettings;
use seal_task::{ArcTask, Example, TestExample};
use std::io::Write;
use tempfile::NamedTempFile;

/// Two-pair task whose rule is "mirror each row"
pub fn mirror_task() -> ArcTask {
    ArcTask::new(vec![
        Example::new(
            vec![vec![1u8, 0, 0], vec![0, 2, 0]],
            vec![vec![0u8, 0, 1], vec![0, 2, 0]],
        ),
        Example::new(vec![vec![3u8, 3, 0]], vec![vec![0u8, 3, 3]]),
    ])
    .with_test(vec![TestExample {
        input: vec![vec![4, 0, 5]].into(),
        output: Some(vec![vec![5, 0, 4]].into()),
    }])
}

/// Write raw text to a fresh temp file
pub fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Serialize `task` into a temp JSON file
pub fn write_task_file(task: &ArcTask) -> NamedTempFile {
    write_temp(&serde_json::to_string_pretty(task).unwrap())
}

/// Settings pointing at `file`, with a short preview
pub fn settings_for(file: &NamedTempFile) -> DemoSettings {
    DemoSettings::new()
        .with_task_path(file.path())
        .with_preview_chars(200)
}
