//! `kr-kernels` - Portable CPU operator kernels for kernel-runtime.
//!
//! This crate provides:
//! - `bmm_out`, batched matrix multiplication into a resizable output
//! - A generic dense matmul primitive over every real dtype
//! - Runtime dtype dispatch to monomorphized kernels
//!
//! Kernels log through `tracing`; install a subscriber to see resize and
//! abort events.

mod dispatch;

pub mod context;
pub mod cpu;
pub mod error;
pub mod ops;
pub mod scalar;

pub use context::KernelRuntimeContext;
pub use error::{KernelError, Result};
pub use ops::bmm_out;
pub use scalar::RealScalar;
