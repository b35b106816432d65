use std::fmt::Debug;

use crate::error::Result;
use crate::view::MatRef;

/// Trait for pluggable compute backends.
///
/// Every operation works in place on caller-owned `f32` buffers; a backend
/// never allocates its outputs. Matrix operands are passed as [`MatRef`]
/// views, so a transposed operand is an access pattern rather than a copy.
pub trait ComputeBackend: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "cpu").
    fn name(&self) -> &str;

    /// Fresh product: `dest = A @ B`.
    ///
    /// - `a`: view of logical shape [i, j]
    /// - `b`: view of logical shape [j, k]
    /// - `dest`: row-major buffer of length `i * k`, overwritten
    fn multiply_into(&self, a: MatRef<'_>, b: MatRef<'_>, dest: &mut [f32]) -> Result<()>;

    /// Accumulating product: `dest += A @ B`.
    ///
    /// Same shapes as [`ComputeBackend::multiply_into`], but the existing
    /// contents of `dest` are kept and added to.
    fn multiply_accumulate(&self, a: MatRef<'_>, b: MatRef<'_>, dest: &mut [f32]) -> Result<()>;

    /// Element-wise natural exponential: `x[i] = exp(x[i])`.
    fn exp(&self, x: &mut [f32]);

    /// For each row of `cols` elements, subtract the row maximum.
    fn subtract_row_max(&self, x: &mut [f32], cols: usize) -> Result<()>;

    /// For each row of `cols` elements, divide every entry by the row sum.
    fn normalize_rows(&self, x: &mut [f32], cols: usize) -> Result<()>;

    /// Scalar division: `x[i] /= d`.
    fn divide(&self, x: &mut [f32], d: f32);

    /// Scaled subtraction: `dst[i] -= alpha * src[i]`.
    fn sub_scaled(&self, dst: &mut [f32], src: &[f32], alpha: f32) -> Result<()>;
}
