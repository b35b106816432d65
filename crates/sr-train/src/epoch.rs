//! One epoch of minibatch SGD for softmax regression.
//!
//! `theta` is an `n x k` row-major parameter matrix, exclusively borrowed
//! for the duration of the epoch. Minibatches run strictly in increasing
//! row order, and each one reads the `theta` written by the one before it,
//! so the minibatch loop must stay sequential. Parallelism belongs inside a
//! single minibatch's matrix products, never across minibatches.

use std::num::NonZeroUsize;

use log::{debug, trace, warn};
use sr_tensor::{ComputeBackend, CpuBackend, MatRef, Matrix, Shape, TensorError};

use crate::batches::Minibatches;
use crate::config::EpochConfig;
use crate::data::Dataset;
use crate::error::{Result, TrainError};
use crate::softmax;

/// Summary of a completed epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochReport {
    /// Number of SGD updates applied (`ceil(m / batch)`).
    pub steps: usize,
    /// Number of rows consumed (`m`).
    pub rows: usize,
}

/// Runs SGD epochs on a [`ComputeBackend`].
#[derive(Debug, Clone)]
pub struct EpochTrainer<B: ComputeBackend> {
    backend: B,
    config: EpochConfig,
}

impl EpochTrainer<CpuBackend> {
    /// Trainer on the reference CPU backend.
    pub fn cpu(config: EpochConfig) -> Result<Self> {
        Self::new(CpuBackend::new(), config)
    }
}

impl<B: ComputeBackend> EpochTrainer<B> {
    pub fn new(backend: B, config: EpochConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { backend, config })
    }

    /// Performs one pass over `data`, updating `theta` in place.
    ///
    /// `theta` must hold `n * k` elements for the dataset's `n` features and
    /// `k` classes. It is checked before the first update, so on error
    /// `theta` is left untouched.
    pub fn run(&self, data: &Dataset<'_>, theta: &mut [f32]) -> Result<EpochReport> {
        let (n, k) = (data.n_features(), data.n_classes());
        let expected = Shape::new(n, k)?.numel();
        if theta.len() != expected {
            return Err(TensorError::BufferLength {
                what: "theta",
                expected,
                got: theta.len(),
            }
            .into());
        }

        let batch = NonZeroUsize::new(self.config.batch)
            .ok_or_else(|| TrainError::InvalidConfig("batch must be > 0".to_string()))?;
        let batches = Minibatches::new(data.len(), batch);
        debug!(
            "epoch start: backend={} m={} n={} k={} lr={} batch={} steps={}",
            self.backend.name(),
            data.len(),
            n,
            k,
            self.config.lr,
            self.config.batch,
            batches.len()
        );

        let mut steps = 0;
        for mb in batches {
            trace!("minibatch offset={} len={}", mb.offset, mb.len);
            let (x, y) = data.minibatch(mb.offset, mb.len)?;
            self.step(x, y, k, theta)?;
            steps += 1;
        }

        debug!("epoch done: steps={steps}");
        Ok(EpochReport {
            steps,
            rows: data.len(),
        })
    }

    /// One SGD update from the `s x n` minibatch `x` with labels `y`.
    fn step(&self, x: MatRef<'_>, y: &[u8], k: usize, theta: &mut [f32]) -> Result<()> {
        let (s, n) = (x.rows(), x.cols());
        let backend: &dyn ComputeBackend = &self.backend;

        // Logits: Z = X_batch @ theta, [s, k].
        let mut z = Matrix::zeros(Shape::new(s, k)?);
        backend.multiply_into(x, MatRef::new(theta, n, k)?, z.as_mut_slice())?;

        softmax::probabilities_in_place(backend, z.as_mut_slice(), k, self.config.softmax)?;
        if z.as_slice().iter().any(|p| !p.is_finite()) {
            warn!(
                "non-finite softmax probabilities in minibatch of {s} rows; logits overflowed"
            );
        }
        softmax::subtract_one_hot(z.as_mut_slice(), y, k)?;

        // Gradient: g = X_batch^T @ Z / s, [n, k].
        let mut g = Matrix::zeros(Shape::new(n, k)?);
        backend.multiply_into(x.t(), z.view(), g.as_mut_slice())?;
        backend.divide(g.as_mut_slice(), s as f32);

        backend.sub_scaled(theta, g.as_slice(), self.config.lr)?;
        Ok(())
    }
}

/// Runs one softmax-regression SGD epoch over flat row-major buffers.
///
/// - `x`: `m x n` features
/// - `y`: `m` labels, each in `[0, k)`
/// - `theta`: `n x k` parameters, updated in place
///
/// Performs `ceil(m / batch)` sequential minibatch updates on the CPU
/// backend with unshifted softmax. Every argument is validated before
/// `theta` is touched.
#[allow(clippy::too_many_arguments)]
pub fn run_epoch(
    x: &[f32],
    y: &[u8],
    theta: &mut [f32],
    m: usize,
    n: usize,
    k: usize,
    lr: f32,
    batch: usize,
) -> Result<()> {
    if y.len() != m {
        return Err(TrainError::DimensionMismatch {
            what: "label count",
            expected: m,
            got: y.len(),
        });
    }
    let trainer = EpochTrainer::cpu(EpochConfig::new(lr, batch))?;
    let data = Dataset::new(x, y, n, k)?;
    trainer.run(&data, theta)?;
    Ok(())
}
