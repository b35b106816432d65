// Element-wise and row-wise kernels.

use crate::error::{Result, TensorError};

fn check_rows(x: &[f32], cols: usize, op: &str) -> Result<()> {
    if cols == 0 {
        return Err(TensorError::InvalidDimension(format!(
            "{op}: row width must be > 0"
        )));
    }
    if x.len() % cols != 0 {
        return Err(TensorError::InvalidDimension(format!(
            "{op}: x.len()={} is not a multiple of cols={cols}",
            x.len()
        )));
    }
    Ok(())
}

pub(crate) fn exp(x: &mut [f32]) {
    for v in x.iter_mut() {
        *v = v.exp();
    }
}

pub(crate) fn subtract_row_max(x: &mut [f32], cols: usize) -> Result<()> {
    check_rows(x, cols, "subtract_row_max")?;
    for row in x.chunks_exact_mut(cols) {
        let max_val = row.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        for v in row.iter_mut() {
            *v -= max_val;
        }
    }
    Ok(())
}

pub(crate) fn normalize_rows(x: &mut [f32], cols: usize) -> Result<()> {
    check_rows(x, cols, "normalize_rows")?;
    for row in x.chunks_exact_mut(cols) {
        let sum: f32 = row.iter().sum();
        for v in row.iter_mut() {
            *v /= sum;
        }
    }
    Ok(())
}

pub(crate) fn divide(x: &mut [f32], d: f32) {
    for v in x.iter_mut() {
        *v /= d;
    }
}

pub(crate) fn sub_scaled(dst: &mut [f32], src: &[f32], alpha: f32) -> Result<()> {
    if dst.len() != src.len() {
        return Err(TensorError::BufferLength {
            what: "sub_scaled source",
            expected: dst.len(),
            got: src.len(),
        });
    }
    for (d, s) in dst.iter_mut().zip(src) {
        *d -= alpha * s;
    }
    Ok(())
}
