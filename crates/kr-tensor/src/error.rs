use thiserror::Error;

use crate::dtype::DType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TensorError {
    #[error("data length {got} does not match shape {shape:?} (numel={expected})")]
    DataLength {
        shape: Vec<usize>,
        expected: usize,
        got: usize,
    },
    #[error("dtype mismatch: expected {expected}, got {got}")]
    DTypeMismatch { expected: DType, got: DType },
    #[error("attempted to change the tensor rank from {from} to {to}, which is immutable")]
    RankChange { from: usize, to: usize },
    #[error("cannot resize static-shape tensor from {current:?} to {requested:?}")]
    StaticShape {
        current: Vec<usize>,
        requested: Vec<usize>,
    },
    #[error("element count of shape {requested:?} overflows usize")]
    NumelOverflow { requested: Vec<usize> },
    #[error("resize to {requested:?} needs {numel} elements but capacity is {capacity}")]
    CapacityExceeded {
        requested: Vec<usize>,
        numel: usize,
        capacity: usize,
    },
}

pub type Result<T> = std::result::Result<T, TensorError>;
