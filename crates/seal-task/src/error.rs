//! Error types for task loading and validation
//!
//! Covers:
//! - Reading the task file
//! - JSON syntax and shape errors
//! - Malformed training grids

use std::fmt;
use std::path::PathBuf;

/// Which side of a training pair a grid belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridRole {
    /// The puzzle input
    Input,
    /// The expected output
    Output,
}

impl fmt::Display for GridRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridRole::Input => f.write_str("input"),
            GridRole::Output => f.write_str("output"),
        }
    }
}

/// Errors raised while loading or validating an ARC task
///
/// Example numbers are 1-based, matching the numbering used in prompts.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// Task file could not be read
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Task file is not valid JSON or does not match the task shape
    #[error("invalid task json in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Task has an empty `train` list
    #[error("task has no training examples")]
    NoTrainingExamples,

    /// Grid has no rows, or its first row has no cells
    #[error("example {example}: {role} grid is empty")]
    EmptyGrid { example: usize, role: GridRole },

    /// Rows of a grid differ in length
    #[error("example {example}: {role} grid row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        example: usize,
        role: GridRole,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Cell outside the ARC colour range
    #[error("example {example}: {role} grid cell ({row}, {col}) is {value}, max is {max}", max = crate::MAX_CELL_VALUE)]
    CellOutOfRange {
        example: usize,
        role: GridRole,
        row: usize,
        col: usize,
        value: u8,
    },
}

impl TaskError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create parse error for path
    pub fn parse_error(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Whether the error comes from the grids rather than the file itself
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Io { .. } | Self::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_grid_display() {
        let err = TaskError::RaggedGrid {
            example: 2,
            role: GridRole::Output,
            row: 1,
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "example 2: output grid row 1 has 2 cells, expected 3"
        );
    }

    #[test]
    fn cell_out_of_range_display() {
        let err = TaskError::CellOutOfRange {
            example: 1,
            role: GridRole::Input,
            row: 0,
            col: 4,
            value: 12,
        };
        assert_eq!(
            err.to_string(),
            "example 1: input grid cell (0, 4) is 12, max is 9"
        );
    }

    #[test]
    fn validation_classification() {
        assert!(TaskError::NoTrainingExamples.is_validation());

        let io = TaskError::io_error(
            "missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(!io.is_validation());
        assert!(io.to_string().contains("missing.json"));
    }
}
