pub mod matmul;
pub mod unary;

use crate::backend::ComputeBackend;
use crate::error::Result;
use crate::view::MatRef;

/// Pure-Rust CPU compute backend.
///
/// Implements all operations with straightforward single-threaded loops
/// optimized for correctness rather than peak performance. Intended as the
/// reference implementation.
#[derive(Debug, Clone)]
pub struct CpuBackend;

impl CpuBackend {
    pub fn new() -> Self {
        CpuBackend
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputeBackend for CpuBackend {
    fn name(&self) -> &str {
        "cpu"
    }

    fn multiply_into(&self, a: MatRef<'_>, b: MatRef<'_>, dest: &mut [f32]) -> Result<()> {
        matmul::check_operands(&a, &b, dest)?;
        dest.fill(0.0);
        matmul::accumulate(&a, &b, dest);
        Ok(())
    }

    fn multiply_accumulate(&self, a: MatRef<'_>, b: MatRef<'_>, dest: &mut [f32]) -> Result<()> {
        matmul::check_operands(&a, &b, dest)?;
        matmul::accumulate(&a, &b, dest);
        Ok(())
    }

    fn exp(&self, x: &mut [f32]) {
        unary::exp(x);
    }

    fn subtract_row_max(&self, x: &mut [f32], cols: usize) -> Result<()> {
        unary::subtract_row_max(x, cols)
    }

    fn normalize_rows(&self, x: &mut [f32], cols: usize) -> Result<()> {
        unary::normalize_rows(x, cols)
    }

    fn divide(&self, x: &mut [f32], d: f32) {
        unary::divide(x, d);
    }

    fn sub_scaled(&self, dst: &mut [f32], src: &[f32], alpha: f32) -> Result<()> {
        unary::sub_scaled(dst, src, alpha)
    }
}
