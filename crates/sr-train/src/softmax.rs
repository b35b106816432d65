//! Softmax normalization and the cross-entropy gradient signal.

use sr_tensor::{ComputeBackend, TensorError};

use crate::error::{Result, TrainError};

/// How logits are exponentiated before row normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoftmaxMode {
    /// `exp(z)` directly, with no shift. Large logits overflow to `inf` and
    /// the affected rows become `NaN`.
    #[default]
    Unshifted,
    /// `exp(z - max(row))`. Equal to `Unshifted` in exact arithmetic but
    /// rounds differently, so results can differ in the last bits.
    MaxShifted,
}

/// Turns a `rows x classes` logits buffer into row-stochastic probabilities,
/// in place.
pub fn probabilities_in_place(
    backend: &dyn ComputeBackend,
    logits: &mut [f32],
    classes: usize,
    mode: SoftmaxMode,
) -> Result<()> {
    if mode == SoftmaxMode::MaxShifted {
        backend.subtract_row_max(logits, classes)?;
    }
    backend.exp(logits);
    backend.normalize_rows(logits, classes)?;
    Ok(())
}

/// Subtracts 1 at each row's true-class column, turning softmax
/// probabilities into the gradient of cross-entropy w.r.t. the logits.
pub fn subtract_one_hot(probs: &mut [f32], labels: &[u8], classes: usize) -> Result<()> {
    if classes == 0 {
        return Err(
            TensorError::InvalidDimension("class count must be > 0".to_string()).into(),
        );
    }
    if probs.len() != labels.len() * classes {
        return Err(TrainError::DimensionMismatch {
            what: "probability buffer",
            expected: labels.len() * classes,
            got: probs.len(),
        });
    }
    for (index, (row, &label)) in probs.chunks_exact_mut(classes).zip(labels).enumerate() {
        let cell = row
            .get_mut(label as usize)
            .ok_or(TrainError::LabelOutOfRange {
                index,
                label,
                classes,
            })?;
        *cell -= 1.0;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use sr_tensor::CpuBackend;

    #[test]
    fn test_rows_are_stochastic() {
        let backend = CpuBackend::new();
        let mut z = vec![0.5, -1.0, 2.0, 3.0, 3.0, 3.0, -4.0, 0.0, 1.5];
        probabilities_in_place(&backend, &mut z, 3, SoftmaxMode::Unshifted).unwrap();
        for row in z.chunks(3) {
            assert!(row.iter().all(|&p| p >= 0.0));
            assert_abs_diff_eq!(row.iter().sum::<f32>(), 1.0, epsilon = 1e-6);
        }
        assert_abs_diff_eq!(z[3], 1.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_equal_logits_are_uniform() {
        let backend = CpuBackend::new();
        let mut z = vec![0.0; 4];
        probabilities_in_place(&backend, &mut z, 2, SoftmaxMode::Unshifted).unwrap();
        assert_eq!(z, vec![0.5; 4]);
    }

    #[test]
    fn test_unshifted_overflows() {
        let backend = CpuBackend::new();
        let mut z = vec![100.0, 0.0];
        probabilities_in_place(&backend, &mut z, 2, SoftmaxMode::Unshifted).unwrap();
        assert!(z[0].is_nan());
    }

    #[test]
    fn test_max_shifted_handles_large_logits() {
        let backend = CpuBackend::new();
        let mut z = vec![100.0, 0.0];
        probabilities_in_place(&backend, &mut z, 2, SoftmaxMode::MaxShifted).unwrap();
        assert_abs_diff_eq!(z[0], 1.0, epsilon = 1e-6);
        assert!(z[1] >= 0.0 && z[1] < 1e-6);
    }

    #[test]
    fn test_modes_agree_on_small_logits() {
        let backend = CpuBackend::new();
        let logits = vec![0.1, -0.3, 0.7, 1.2, 0.0, -2.0];
        let mut a = logits.clone();
        let mut b = logits;
        probabilities_in_place(&backend, &mut a, 3, SoftmaxMode::Unshifted).unwrap();
        probabilities_in_place(&backend, &mut b, 3, SoftmaxMode::MaxShifted).unwrap();
        for (x, y) in a.iter().zip(&b) {
            assert_abs_diff_eq!(*x, *y, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_subtract_one_hot() {
        let mut p = vec![0.25, 0.75, 0.5, 0.5];
        subtract_one_hot(&mut p, &[1, 0], 2).unwrap();
        assert_eq!(p, vec![0.25, -0.25, -0.5, 0.5]);
    }

    #[test]
    fn test_subtract_one_hot_label_out_of_range() {
        let mut p = vec![0.5; 4];
        let err = subtract_one_hot(&mut p, &[0, 2], 2).unwrap_err();
        assert_eq!(
            err,
            TrainError::LabelOutOfRange {
                index: 1,
                label: 2,
                classes: 2
            }
        );
    }

    #[test]
    fn test_subtract_one_hot_length_mismatch() {
        let mut p = vec![0.5; 3];
        assert!(subtract_one_hot(&mut p, &[0, 1], 2).is_err());
    }
}
