use crate::error::{Result, TensorError};
use crate::shape::Shape;

/// A borrowed, read-only view of a row-major `f32` buffer.
///
/// The view maps a logical `(row, col)` to a flat index. [`MatRef::t`] flips
/// the `transposed` flag and swaps the logical shape, so a transposed view
/// reads the same storage in column order without copying.
#[derive(Debug, Clone, Copy)]
pub struct MatRef<'a> {
    data: &'a [f32],
    shape: Shape,
    transposed: bool,
}

impl<'a> MatRef<'a> {
    /// View `data` as a contiguous row-major `rows x cols` matrix.
    ///
    /// Fails if `rows * cols` overflows or differs from `data.len()`.
    pub fn new(data: &'a [f32], rows: usize, cols: usize) -> Result<Self> {
        let shape = Shape::new(rows, cols)?;
        if data.len() != shape.numel() {
            return Err(TensorError::BufferLength {
                what: "matrix view",
                expected: shape.numel(),
                got: data.len(),
            });
        }
        Ok(MatRef {
            data,
            shape,
            transposed: false,
        })
    }

    /// Row-major view whose length is already known to match `shape`.
    pub(crate) fn contiguous(data: &'a [f32], shape: Shape) -> Self {
        debug_assert_eq!(data.len(), shape.numel());
        MatRef {
            data,
            shape,
            transposed: false,
        }
    }

    /// The transposed view over the same storage.
    pub fn t(self) -> MatRef<'a> {
        MatRef {
            data: self.data,
            shape: self.shape.transposed(),
            transposed: !self.transposed,
        }
    }

    /// Logical shape of the view.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    /// Whether the view reads its storage in column order.
    pub fn is_transposed(&self) -> bool {
        self.transposed
    }

    /// Flat index into the underlying storage for logical `(row, col)`.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        if self.transposed {
            col * self.shape.rows() + row
        } else {
            row * self.shape.cols() + col
        }
    }

    /// Element at logical `(row, col)`.
    ///
    /// # Panics
    /// Panics if `(row, col)` is outside the view.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[self.index(row, col)]
    }

    /// The underlying storage, in physical order.
    pub fn as_slice(&self) -> &'a [f32] {
        self.data
    }
}
