//! ARC task files
//!
//! Uses serde_json to parse the task shape, then validates the training grids.
//! Only `train` is required; `test` pairs are kept for later evaluation but
//! never checked or formatted.

use crate::error::{GridRole, TaskError};
use crate::grid::Grid;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Training pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Puzzle input
    pub input: Grid,
    /// Expected output
    pub output: Grid,
}

impl Example {
    /// Create training pair
    #[inline]
    #[must_use]
    pub fn new(input: impl Into<Grid>, output: impl Into<Grid>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Test pair (the answer may be withheld)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestExample {
    /// Puzzle input
    pub input: Grid,
    /// Expected output, if published
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Grid>,
}

/// ARC task: demonstration pairs plus held-out test pairs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArcTask {
    /// Demonstration pairs shown to the model
    pub train: Vec<Example>,
    /// Held-out pairs
    #[serde(default)]
    pub test: Vec<TestExample>,
}

impl ArcTask {
    /// Create task from training pairs
    #[inline]
    #[must_use]
    pub fn new(train: Vec<Example>) -> Self {
        Self {
            train,
            test: Vec::new(),
        }
    }

    /// With test pairs
    #[inline]
    #[must_use]
    pub fn with_test(mut self, test: Vec<TestExample>) -> Self {
        self.test = test;
        self
    }

    /// Load and validate a task file
    ///
    /// # Errors
    /// - `TaskError::Io` if the file cannot be read
    /// - `TaskError::Parse` if it is not a task-shaped JSON document
    /// - any validation error from [`ArcTask::validate`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TaskError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| TaskError::io_error(path, e))?;
        let task = Self::parse(&raw, path)?;

        tracing::debug!(
            path = %path.display(),
            train = task.train.len(),
            test = task.test.len(),
            "loaded ARC task"
        );

        Ok(task)
    }

    /// Parse and validate a task from a JSON string
    ///
    /// # Errors
    /// Same as [`ArcTask::load`], minus IO.
    pub fn from_json_str(raw: &str) -> Result<Self, TaskError> {
        Self::parse(raw, Path::new("<inline>"))
    }

    fn parse(raw: &str, origin: &Path) -> Result<Self, TaskError> {
        let task: Self =
            serde_json::from_str(raw).map_err(|e| TaskError::parse_error(PathBuf::from(origin), e))?;
        task.validate()?;
        Ok(task)
    }

    /// Check that there is at least one training pair and every training
    /// grid is a non-empty rectangle of colours `0..=9`
    ///
    /// # Errors
    /// The first defect found, in example order (input before output).
    pub fn validate(&self) -> Result<(), TaskError> {
        if self.train.is_empty() {
            return Err(TaskError::NoTrainingExamples);
        }

        for (idx, example) in self.train.iter().enumerate() {
            let number = idx + 1;
            example.input.validate(number, GridRole::Input)?;
            example.output.validate(number, GridRole::Output)?;
        }

        Ok(())
    }

    /// Number of training pairs
    #[inline]
    #[must_use]
    pub fn train_len(&self) -> usize {
        self.train.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TASK_JSON: &str = r#"{
        "train": [
            {"input": [[0, 1], [1, 0]], "output": [[1, 0], [0, 1]]},
            {"input": [[2]], "output": [[3]]}
        ],
        "test": [
            {"input": [[1, 1], [0, 0]]}
        ]
    }"#;

    #[test]
    fn parses_train_and_test() {
        let task = ArcTask::from_json_str(TASK_JSON).unwrap();
        assert_eq!(task.train_len(), 2);
        assert_eq!(task.test.len(), 1);
        assert!(task.test[0].output.is_none());
        assert_eq!(task.train[1].output.rows(), &[vec![3u8]]);
    }

    #[test]
    fn test_section_is_optional() {
        let task = ArcTask::from_json_str(r#"{"train": [{"input": [[1]], "output": [[2]]}]}"#)
            .unwrap();
        assert!(task.test.is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let raw = r#"{"name": "demo", "train": [{"input": [[1]], "output": [[2]]}]}"#;
        assert!(ArcTask::from_json_str(raw).is_ok());
    }

    #[test]
    fn missing_train_is_parse_error() {
        let err = ArcTask::from_json_str(r#"{"test": []}"#).unwrap_err();
        assert!(matches!(err, TaskError::Parse { .. }));
    }

    #[test]
    fn negative_cell_is_parse_error() {
        let err =
            ArcTask::from_json_str(r#"{"train": [{"input": [[-1]], "output": [[2]]}]}"#).unwrap_err();
        assert!(matches!(err, TaskError::Parse { .. }));
    }

    #[test]
    fn empty_train_is_rejected() {
        let err = ArcTask::from_json_str(r#"{"train": []}"#).unwrap_err();
        assert!(matches!(err, TaskError::NoTrainingExamples));
    }

    #[test]
    fn validation_reports_one_based_example() {
        let raw = r#"{"train": [
            {"input": [[1]], "output": [[2]]},
            {"input": [[1, 2], [3]], "output": [[2]]}
        ]}"#;
        let err = ArcTask::from_json_str(raw).unwrap_err();
        assert!(matches!(
            err,
            TaskError::RaggedGrid {
                example: 2,
                role: GridRole::Input,
                ..
            }
        ));
    }

    #[test]
    fn test_grids_are_not_validated() {
        let raw = r#"{"train": [{"input": [[1]], "output": [[2]]}],
                      "test": [{"input": [[1, 2], [3]]}]}"#;
        assert!(ArcTask::from_json_str(raw).is_ok());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TASK_JSON.as_bytes()).unwrap();

        let task = ArcTask::load(file.path()).unwrap();
        assert_eq!(task.train_len(), 2);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = ArcTask::load(&path).unwrap_err();
        match err {
            TaskError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn load_malformed_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"train\": [").unwrap();

        let err = ArcTask::load(file.path()).unwrap_err();
        assert!(matches!(err, TaskError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn serializes_back_without_empty_outputs() {
        let task = ArcTask::new(vec![Example::new(vec![vec![1u8]], vec![vec![2u8]])]).with_test(vec![
            TestExample {
                input: Grid::new(vec![vec![3]]),
                output: None,
            },
        ]);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "train": [{"input": [[1]], "output": [[2]]}],
                "test": [{"input": [[3]]}]
            })
        );
    }
}
