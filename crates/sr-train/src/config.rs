use crate::error::{Result, TrainError};
use crate::softmax::SoftmaxMode;

/// Hyperparameters for one SGD epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochConfig {
    /// Learning rate / SGD step size. Must be finite and > 0.
    pub lr: f32,
    /// Rows per minibatch. Must be > 0.
    pub batch: usize,
    /// Exponentiation mode used by the softmax.
    pub softmax: SoftmaxMode,
}

impl EpochConfig {
    /// Create a config with the given learning rate and batch size, using
    /// unshifted softmax.
    pub fn new(lr: f32, batch: usize) -> Self {
        Self {
            lr,
            batch,
            softmax: SoftmaxMode::Unshifted,
        }
    }

    /// Returns self with the softmax mode replaced.
    pub fn with_softmax(mut self, softmax: SoftmaxMode) -> Self {
        self.softmax = softmax;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch == 0 {
            return Err(TrainError::InvalidConfig(
                "batch must be > 0".to_string(),
            ));
        }
        if !(self.lr.is_finite() && self.lr > 0.0) {
            return Err(TrainError::InvalidConfig(format!(
                "lr must be finite and > 0, got {}",
                self.lr
            )));
        }
        Ok(())
    }
}

impl Default for EpochConfig {
    fn default() -> Self {
        Self::new(0.1, 100)
    }
}
