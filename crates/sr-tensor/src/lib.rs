//! `sr-tensor` - Dense row-major matrices and kernels for softmax-regression.
//!
//! This crate provides:
//! - A 2-D `Shape` and an owned `Matrix`
//! - `MatRef`, a borrowed view whose transpose is an access pattern, not a copy
//! - A `ComputeBackend` trait of in-place kernels
//! - A reference `CpuBackend` implementation

pub mod backend;
pub mod cpu;
pub mod error;
pub mod matrix;
pub mod shape;
pub mod view;

// Re-export primary types at the crate root for convenience.
pub use backend::ComputeBackend;
pub use cpu::CpuBackend;
pub use error::{Result, TensorError};
pub use matrix::Matrix;
pub use shape::Shape;
pub use view::MatRef;
