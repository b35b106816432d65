// Reference matmul kernel.
//
// The loop order is ii, jj, kk: each output cell accumulates its terms in
// increasing jj. Reordering the loops changes float rounding.

use crate::error::{Result, TensorError};
use crate::shape::Shape;
use crate::view::MatRef;

/// Checks that `a` [i, j], `b` [j, k] and `dest` (i * k elements) agree.
pub(crate) fn check_operands(a: &MatRef<'_>, b: &MatRef<'_>, dest: &[f32]) -> Result<()> {
    if a.cols() != b.rows() {
        return Err(TensorError::MatmulMismatch {
            m: a.rows(),
            k: a.cols(),
            k2: b.rows(),
            n: b.cols(),
        });
    }
    let expected = Shape::new(a.rows(), b.cols())?.numel();
    if dest.len() != expected {
        return Err(TensorError::BufferLength {
            what: "matmul destination",
            expected,
            got: dest.len(),
        });
    }
    Ok(())
}

/// `dest += a @ b`. Operands must already be checked.
pub(crate) fn accumulate(a: &MatRef<'_>, b: &MatRef<'_>, dest: &mut [f32]) {
    let (i, j, k) = (a.rows(), a.cols(), b.cols());
    for ii in 0..i {
        let out = &mut dest[ii * k..(ii + 1) * k];
        for jj in 0..j {
            let av = a.get(ii, jj);
            for (kk, cell) in out.iter_mut().enumerate() {
                *cell += av * b.get(jj, kk);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_adds_to_existing() {
        let a = [1.0, 2.0];
        let b = [3.0, 4.0];
        let a = MatRef::new(&a, 1, 2).unwrap();
        let b = MatRef::new(&b, 2, 1).unwrap();
        let mut dest = [10.0];
        check_operands(&a, &b, &dest).unwrap();
        accumulate(&a, &b, &mut dest);
        assert_eq!(dest, [21.0]);
    }

    #[test]
    fn test_inner_dimension_mismatch() {
        let a = [0.0; 6];
        let b = [0.0; 6];
        let a = MatRef::new(&a, 2, 3).unwrap();
        let b = MatRef::new(&b, 2, 3).unwrap();
        let err = check_operands(&a, &b, &[0.0; 6]).unwrap_err();
        assert_eq!(
            err,
            TensorError::MatmulMismatch {
                m: 2,
                k: 3,
                k2: 2,
                n: 3
            }
        );
    }

    #[test]
    fn test_destination_length() {
        let a = [0.0; 4];
        let a = MatRef::new(&a, 2, 2).unwrap();
        assert!(check_operands(&a, &a, &[0.0; 3]).is_err());
    }

    #[test]
    fn test_destination_size_overflow() {
        // [2 x 0] @ [0 x usize::MAX] would need 2 * usize::MAX cells.
        let empty: [f32; 0] = [];
        let a = MatRef::new(&empty, 2, 0).unwrap();
        let b = MatRef::new(&empty, 0, usize::MAX).unwrap();
        assert!(matches!(
            check_operands(&a, &b, &[]),
            Err(TensorError::InvalidDimension(_))
        ));
    }
}
