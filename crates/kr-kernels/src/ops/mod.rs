//! Operator kernels.
//!
//! Each operator writes into a caller-provided output tensor, resizing it to
//! the inferred shape first, and aborts on any violated precondition.

mod bmm;

pub use bmm::bmm_out;
