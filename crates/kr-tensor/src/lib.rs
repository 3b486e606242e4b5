//! `kr-tensor` - Contiguous CPU tensor container for kernel-runtime.
//!
//! This crate provides:
//! - A `Tensor` type backed by CPU storage of any supported dtype
//! - In-place resize governed by `ShapeDynamism`
//! - The `Element` trait tying Rust scalars to `DType` tags
//! - Shape utilities and data type definitions

pub mod dtype;
pub mod element;
pub mod error;
pub mod shape;
pub mod storage;
pub mod tensor;

// Re-export primary types at the crate root for convenience.
pub use dtype::DType;
pub use element::Element;
pub use error::{Result, TensorError};
pub use half::f16;
pub use shape::Shape;
pub use storage::CpuStorage;
pub use tensor::{ShapeDynamism, Tensor};
