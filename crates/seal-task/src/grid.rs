//! ARC grids
//!
//! A grid is a rectangle of colour indices `0..=9`, stored row-major.

use crate::error::{GridRole, TaskError};
use crate::MAX_CELL_VALUE;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Rectangular grid of ARC colour cells
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid(Vec<Vec<u8>>);

impl Grid {
    /// Create grid from rows
    #[inline]
    #[must_use]
    pub fn new(rows: Vec<Vec<u8>>) -> Self {
        Self(rows)
    }

    /// Rows, top to bottom
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.0
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.0.len()
    }

    /// Number of cells in the first row (0 for an empty grid)
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.0.first().map_or(0, Vec::len)
    }

    /// Render rows as text: cells joined by a single space, one line per row
    ///
    /// Every row, including the last, ends with `\n`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.height() * (self.width() * 2 + 1));
        for row in &self.0 {
            for (idx, cell) in row.iter().enumerate() {
                if idx > 0 {
                    out.push(' ');
                }
                // Writing into a String cannot fail
                let _ = write!(out, "{cell}");
            }
            out.push('\n');
        }
        out
    }

    /// Check shape and cell range
    ///
    /// # Errors
    /// - `TaskError::EmptyGrid` if there are no rows or the first row is empty
    /// - `TaskError::RaggedGrid` if rows differ in length
    /// - `TaskError::CellOutOfRange` if a cell exceeds [`MAX_CELL_VALUE`]
    pub fn validate(&self, example: usize, role: GridRole) -> Result<(), TaskError> {
        let expected = self.width();
        if expected == 0 {
            return Err(TaskError::EmptyGrid { example, role });
        }

        for (row, cells) in self.0.iter().enumerate() {
            if cells.len() != expected {
                return Err(TaskError::RaggedGrid {
                    example,
                    role,
                    row,
                    expected,
                    found: cells.len(),
                });
            }
            if let Some((col, &value)) = cells
                .iter()
                .enumerate()
                .find(|&(_, &value)| value > MAX_CELL_VALUE)
            {
                return Err(TaskError::CellOutOfRange {
                    example,
                    role,
                    row,
                    col,
                    value,
                });
            }
        }

        Ok(())
    }
}

impl From<Vec<Vec<u8>>> for Grid {
    fn from(rows: Vec<Vec<u8>>) -> Self {
        Self(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn render_joins_cells_with_spaces() {
        let grid = Grid::new(vec![vec![0, 1, 2], vec![3, 4, 5]]);
        assert_eq!(grid.render(), "0 1 2\n3 4 5\n");
    }

    #[test]
    fn render_single_cell() {
        assert_eq!(Grid::new(vec![vec![7]]).render(), "7\n");
    }

    #[test]
    fn dimensions() {
        let grid = Grid::new(vec![vec![0, 0], vec![0, 0], vec![0, 0]]);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 2);
        assert_eq!(Grid::default().width(), 0);
    }

    #[test]
    fn validate_rejects_empty() {
        let err = Grid::default().validate(1, GridRole::Input).unwrap_err();
        assert!(matches!(
            err,
            TaskError::EmptyGrid {
                example: 1,
                role: GridRole::Input
            }
        ));

        let err = Grid::new(vec![vec![]]).validate(1, GridRole::Output).unwrap_err();
        assert!(matches!(err, TaskError::EmptyGrid { .. }));
    }

    #[test]
    fn validate_rejects_ragged_rows() {
        let grid = Grid::new(vec![vec![1, 2, 3], vec![1, 2]]);
        let err = grid.validate(3, GridRole::Output).unwrap_err();
        assert!(matches!(
            err,
            TaskError::RaggedGrid {
                example: 3,
                row: 1,
                expected: 3,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_cell() {
        let grid = Grid::new(vec![vec![1, 2], vec![10, 0]]);
        let err = grid.validate(1, GridRole::Input).unwrap_err();
        assert!(matches!(
            err,
            TaskError::CellOutOfRange {
                row: 1,
                col: 0,
                value: 10,
                ..
            }
        ));
    }

    #[test]
    fn deserializes_from_nested_arrays() {
        let grid: Grid = serde_json::from_str("[[1, 0], [0, 1]]").unwrap();
        assert_eq!(grid.rows(), &[vec![1u8, 0], vec![0, 1]]);
    }

    fn grid_strategy() -> impl Strategy<Value = Grid> {
        (1..8usize, 1..8usize).prop_flat_map(|(h, w)| {
            proptest::collection::vec(proptest::collection::vec(0..=MAX_CELL_VALUE, w), h)
                .prop_map(Grid::new)
        })
    }

    proptest! {
        #[test]
        fn prop_render_has_one_line_per_row(grid in grid_strategy()) {
            let text = grid.render();
            prop_assert!(text.ends_with('\n'));
            prop_assert_eq!(text.lines().count(), grid.height());
        }

        #[test]
        fn prop_render_preserves_cells(grid in grid_strategy()) {
            let parsed: Vec<Vec<u8>> = grid
                .render()
                .lines()
                .map(|line| line.split(' ').map(|c| c.parse().unwrap()).collect())
                .collect();
            prop_assert_eq!(parsed.as_slice(), grid.rows());
        }

        #[test]
        fn prop_well_formed_grids_validate(grid in grid_strategy()) {
            prop_assert!(grid.validate(1, GridRole::Input).is_ok());
        }
    }
}
