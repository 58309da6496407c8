//! Rectangular observation matrix. Cell encoding is the oracle's concern.

use serde::{Deserialize, Serialize};

use crate::errors::InputError;

/// N observations × D variables, stored row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleMatrix<T = f64> {
    rows: usize,
    cols: usize,
    values: Vec<T>,
}

impl<T> SampleMatrix<T> {
    /// Build from a row-major buffer.
    pub fn from_shape(rows: usize, cols: usize, values: Vec<T>) -> Result<Self, InputError> {
        if rows.checked_mul(cols) != Some(values.len()) {
            return Err(InputError::ShapeMismatch {
                rows,
                cols,
                len: values.len(),
            });
        }
        Ok(Self { rows, cols, values })
    }

    /// Build from individual rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, InputError> {
        let cols = rows.first().map_or(0, Vec::len);
        let n = rows.len();
        let mut values = Vec::with_capacity(n * cols);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != cols {
                return Err(InputError::NonRectangular {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
            values.extend(cells);
        }
        Ok(Self {
            rows: n,
            cols,
            values,
        })
    }

    /// A sample with no observations over `cols` variables. Useful when the
    /// oracle does not read data at all (e.g. a d-separation oracle).
    pub fn empty(cols: usize) -> Self {
        Self {
            rows: 0,
            cols,
            values: Vec::new(),
        }
    }

    /// Number of observations (N).
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Number of variables (D).
    pub fn num_variables(&self) -> usize {
        self.cols
    }

    pub fn row(&self, index: usize) -> Option<&[T]> {
        if index >= self.rows {
            return None;
        }
        let start = index * self.cols;
        Some(&self.values[start..start + self.cols])
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if col >= self.cols {
            return None;
        }
        self.row(row).map(|r| &r[col])
    }

    /// Iterate one variable's values across all observations.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &T> + '_ {
        let cols = self.cols;
        self.values
            .iter()
            .skip(col)
            .step_by(cols.max(1))
            .take(if col < cols { self.rows } else { 0 })
    }
}
