use crate::shape::Shape;
use crate::view::MatRef;

/// An owned, contiguous, row-major `f32` matrix.
///
/// Used for the transient per-step buffers (logits, gradients) that a
/// training step allocates and drops.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f32>,
    shape: Shape,
}

impl Matrix {
    /// Create a zero-filled matrix with the given shape.
    pub fn zeros(shape: Shape) -> Self {
        Matrix {
            data: vec![0.0; shape.numel()],
            shape,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Borrowed row-major view.
    pub fn view(&self) -> MatRef<'_> {
        MatRef::contiguous(&self.data, self.shape)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}
