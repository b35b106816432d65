use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainError {
    #[error("tensor error: {0}")]
    Tensor(#[from] sr_tensor::TensorError),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("label {label} at row {index} is out of range for {classes} classes")]
    LabelOutOfRange {
        index: usize,
        label: u8,
        classes: usize,
    },
    #[error("{what}: expected {expected}, got {got}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
}

pub type Result<T> = std::result::Result<T, TrainError>;
