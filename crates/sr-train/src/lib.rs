//! `sr-train` - Minibatch SGD for multinomial (softmax) logistic regression.
//!
//! The crate runs a single training epoch: the caller owns the `n x k`
//! parameter matrix across epochs and drives the epoch loop.
//!
//! ```rust
//! use sr_train::run_epoch;
//!
//! # fn main() -> sr_train::Result<()> {
//! let x = [1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0]; // 4 x 2
//! let y = [0u8, 1, 0, 1];
//! let mut theta = [0.0f32; 4]; // 2 x 2
//!
//! for _ in 0..10 {
//!     run_epoch(&x, &y, &mut theta, 4, 2, 2, 0.1, 2)?;
//! }
//! assert!(theta[0] > theta[1]);
//! # Ok(())
//! # }
//! ```

pub mod batches;
pub mod config;
pub mod data;
pub mod epoch;
pub mod error;
pub mod softmax;

pub use batches::{Minibatch, Minibatches};
pub use config::EpochConfig;
pub use data::Dataset;
pub use epoch::{run_epoch, EpochReport, EpochTrainer};
pub use error::{Result, TrainError};
pub use softmax::SoftmaxMode;
