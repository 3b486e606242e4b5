use kr_tensor::{DType, TensorError};
use thiserror::Error;

/// A violated kernel precondition.
///
/// Every variant is fatal to the operator call: the public entry points turn
/// it into an abort through [`KernelError::abort`]. The messages name the
/// offending quantities and their values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    #[error("{lhs}.dim() {lhs_dim} != {rhs}.dim() {rhs_dim}")]
    RankMismatch {
        lhs: &'static str,
        lhs_dim: usize,
        rhs: &'static str,
        rhs_dim: usize,
    },
    #[error("{name}.dim() {dim} != {expected}")]
    UnexpectedRank {
        name: &'static str,
        dim: usize,
        expected: usize,
    },
    #[error("{name}.size(0) {size} < 0")]
    NegativeBatch { name: &'static str, size: usize },
    #[error("{lhs}.size({lhs_axis}) {lhs_size} != {rhs}.size({rhs_axis}) {rhs_size}")]
    SizeMismatch {
        lhs: &'static str,
        lhs_axis: usize,
        lhs_size: usize,
        rhs: &'static str,
        rhs_axis: usize,
        rhs_size: usize,
    },
    #[error("tensors must share one dtype, got {}", .dtypes.join(", "))]
    DTypeMismatch { dtypes: Vec<String> },
    #[error("Unhandled dtype {0}")]
    UnhandledDType(DType),
    #[error("Failed to resize out Tensor in {op}: {source}")]
    ResizeFailed {
        op: &'static str,
        #[source]
        source: TensorError,
    },
    #[error("{name} slice {batch} spans elements {start}..{end} but the buffer holds {len}")]
    SliceOutOfBounds {
        name: &'static str,
        batch: usize,
        start: usize,
        end: usize,
        len: usize,
    },
    #[error("tensor error: {0}")]
    Tensor(#[from] TensorError),
}

impl KernelError {
    /// Abort the current operator call with this diagnostic.
    pub fn abort(self) -> ! {
        tracing::error!(error = %self, "kernel precondition violated");
        panic!("{}", self)
    }
}

pub type Result<T> = std::result::Result<T, KernelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_mismatch_message() {
        let err = KernelError::SizeMismatch {
            lhs: "input",
            lhs_axis: 0,
            lhs_size: 2,
            rhs: "mat2",
            rhs_axis: 0,
            rhs_size: 3,
        };
        assert_eq!(err.to_string(), "input.size(0) 2 != mat2.size(0) 3");
    }

    #[test]
    fn test_dtype_mismatch_message() {
        let err = KernelError::DTypeMismatch {
            dtypes: vec![
                "input f32".to_string(),
                "mat2 i32".to_string(),
                "out f32".to_string(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "tensors must share one dtype, got input f32, mat2 i32, out f32"
        );
    }

    #[test]
    fn test_resize_failed_keeps_source() {
        use std::error::Error as _;
        let err = KernelError::ResizeFailed {
            op: "bmm_out",
            source: TensorError::RankChange { from: 2, to: 3 },
        };
        assert!(err.to_string().starts_with("Failed to resize out Tensor in bmm_out"));
        assert!(err.source().is_some());
    }

    #[test]
    #[should_panic(expected = "Unhandled dtype bool")]
    fn test_abort_panics_with_diagnostic() {
        KernelError::UnhandledDType(DType::Bool).abort();
    }
}
