//! The rectangular scalar grid that all interpolation operates on.
//!
//! A [`Grid`] is a non-empty, rectangular array of `f64` samples backed by
//! [`ndarray::Array2`]. Grids are immutable inputs to the engine; every
//! interpolation call produces a new grid and never mutates its sources.

use ndarray::{Array2, ArrayView1};

use crate::error::{RegridError, Result};

/// A rectangular grid of scalar samples.
///
/// Source data is often binary (0/1 occupancy fields), but the grid carries
/// arbitrary real values since interpolation produces non-binary
/// intermediates.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    data: Array2<f64>,
}

impl Grid {
    /// Create a grid from an owned 2D array.
    ///
    /// Fails with [`RegridError::InvalidGrid`] if either dimension is zero.
    pub fn from_array(data: Array2<f64>) -> Result<Self> {
        let (height, width) = data.dim();
        if height == 0 || width == 0 {
            return Err(RegridError::InvalidGrid {
                message: format!("grid dimensions must be non-zero, got {}x{}", height, width),
            });
        }
        Ok(Self { data })
    }

    /// Create a grid from nested rows.
    ///
    /// Fails with [`RegridError::InvalidGrid`] if the input is empty or the
    /// rows have unequal lengths.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(RegridError::InvalidGrid {
                message: "grid must contain at least one row and one column".to_string(),
            });
        }

        let width = rows[0].len();
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(RegridError::InvalidGrid {
                    message: format!(
                        "grid rows must be rectangular: row 0 has {} columns but row {} has {}",
                        width,
                        y,
                        row.len()
                    ),
                });
            }
        }

        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        let data = Array2::from_shape_vec((rows.len(), width), flat).map_err(|e| {
            RegridError::InvalidGrid {
                message: format!("failed to assemble grid: {}", e),
            }
        })?;
        Ok(Self { data })
    }

    /// Create a grid by evaluating a function at every (row, column) index.
    pub fn from_shape_fn<F>(height: usize, width: usize, f: F) -> Result<Self>
    where
        F: FnMut((usize, usize)) -> f64,
    {
        Self::from_array(Array2::from_shape_fn((height, width), f))
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    /// (height, width) pair
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Value at (row, column)
    pub fn get(&self, y: usize, x: usize) -> f64 {
        self.data[[y, x]]
    }

    /// View of one row
    pub fn row(&self, y: usize) -> ArrayView1<'_, f64> {
        self.data.row(y)
    }

    /// View of one column
    pub fn column(&self, x: usize) -> ArrayView1<'_, f64> {
        self.data.column(x)
    }

    /// Borrow the underlying array
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }
}
