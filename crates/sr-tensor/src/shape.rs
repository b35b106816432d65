use std::fmt;

use crate::error::{Result, TensorError};

/// The shape of a 2-D matrix: `rows x cols`.
///
/// A `Shape` can only be built when `rows * cols` fits in `usize`, so
/// [`Shape::numel`] never overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    /// Create a new shape from row and column counts.
    ///
    /// Fails if the element count overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows.checked_mul(cols).is_none() {
            return Err(TensorError::InvalidDimension(format!(
                "[{rows}, {cols}] has more elements than fit in usize"
            )));
        }
        Ok(Shape { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.rows * self.cols
    }

    /// The shape with rows and columns swapped.
    pub fn transposed(&self) -> Shape {
        Shape {
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.rows, self.cols)
    }
}

impl TryFrom<(usize, usize)> for Shape {
    type Error = TensorError;

    fn try_from((rows, cols): (usize, usize)) -> Result<Self> {
        Shape::new(rows, cols)
    }
}
