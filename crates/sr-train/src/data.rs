use sr_tensor::{MatRef, Shape, TensorError};

use crate::error::{Result, TrainError};

/// A validated, borrowed training set.
///
/// Holds `m` examples: a row-major `m x n` feature matrix and one `u8` class
/// label per row, each in `[0, classes)`. Construction checks every
/// invariant once so the epoch loop can slice without re-validating.
#[derive(Debug, Clone, Copy)]
pub struct Dataset<'a> {
    features: &'a [f32],
    labels: &'a [u8],
    n_features: usize,
    n_classes: usize,
}

impl<'a> Dataset<'a> {
    pub fn new(
        features: &'a [f32],
        labels: &'a [u8],
        n_features: usize,
        n_classes: usize,
    ) -> Result<Self> {
        if n_features == 0 {
            return Err(
                TensorError::InvalidDimension("feature count must be > 0".to_string()).into(),
            );
        }
        if n_classes == 0 {
            return Err(
                TensorError::InvalidDimension("class count must be > 0".to_string()).into(),
            );
        }
        let expected = Shape::new(labels.len(), n_features)?.numel();
        if features.len() != expected {
            return Err(TensorError::BufferLength {
                what: "features",
                expected,
                got: features.len(),
            }
            .into());
        }
        if let Some((index, &label)) = labels
            .iter()
            .enumerate()
            .find(|(_, &l)| l as usize >= n_classes)
        {
            return Err(TrainError::LabelOutOfRange {
                index,
                label,
                classes: n_classes,
            });
        }
        Ok(Self {
            features,
            labels,
            n_features,
            n_classes,
        })
    }

    /// Number of examples (`m`).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Feature count (`n`).
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Class count (`k`).
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Rows `offset..offset + len` as a `len x n` view plus their labels.
    pub fn minibatch(&self, offset: usize, len: usize) -> Result<(MatRef<'a>, &'a [u8])> {
        let end = match offset.checked_add(len) {
            Some(end) if end <= self.len() => end,
            _ => {
                return Err(TrainError::DimensionMismatch {
                    what: "minibatch end row",
                    expected: self.len(),
                    got: offset.saturating_add(len),
                })
            }
        };
        let x = &self.features[offset * self.n_features..end * self.n_features];
        Ok((
            MatRef::new(x, len, self.n_features)?,
            &self.labels[offset..end],
        ))
    }
}
