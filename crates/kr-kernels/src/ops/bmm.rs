//! Batched matrix multiplication.
//!
//! `input` is `[b, m, n]`, `mat2` is `[b, n, p]` and `out` becomes
//! `[b, m, p]` with `out[i] = input[i] @ mat2[i]`. No broadcasting: both
//! inputs must hold the same number of matrices.

use kr_tensor::{Shape, Tensor};

use crate::context::KernelRuntimeContext;
use crate::cpu::vec_matmul;
use crate::dispatch::dispatch_real_dtype;
use crate::error::{KernelError, Result};
use crate::scalar::RealScalar;

const OP: &str = "bmm_out";

/// Outcome of output shape resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShapeResolution {
    /// `out` already had the expected shape.
    Unchanged,
    /// `out` was resized to the expected shape.
    Resized,
    /// The ranks do not allow an expected shape; validation reports why.
    Skipped,
}

/// `bmm.out(Tensor self, Tensor mat2, *, Tensor(a!) out) -> Tensor(a!)`
///
/// Resizes `out` to `[b, m, p]` if needed, validates the three tensors and
/// writes the batched product into `out`. Returns `out`.
///
/// # Panics
/// Every precondition violation aborts the call with a diagnostic naming the
/// mismatched quantity: rank, batch or output sizes, dtype, an unhandled
/// dtype, or an output that cannot be resized. Empty tensors are not an
/// error; nothing is computed.
pub fn bmm_out<'a>(
    _ctx: &mut KernelRuntimeContext,
    input: &Tensor,
    mat2: &Tensor,
    out: &'a mut Tensor,
) -> &'a mut Tensor {
    if let Err(err) = run(input, mat2, out) {
        err.abort();
    }
    out
}

fn run(input: &Tensor, mat2: &Tensor, out: &mut Tensor) -> Result<()> {
    resolve_and_resize(input, mat2, out)?;
    check_bmm_out_args(input, mat2, out)?;
    check_same_dtype(input, mat2, out)?;

    let dtype = input.dtype();
    dispatch_real_dtype!(
        dtype,
        |T| bmm_kernel::<T>(input, mat2, out),
        _ => Err(KernelError::UnhandledDType(dtype))
    )
}

/// Resize `out` to the product shape of `input` and `mat2`.
///
/// The expected shape keeps every leading dimension of `input`, then takes
/// `m` from `input` and `p` from `mat2`. It always has `out`'s rank.
pub(crate) fn resolve_and_resize(
    input: &Tensor,
    mat2: &Tensor,
    out: &mut Tensor,
) -> Result<ShapeResolution> {
    let rank = out.dim();
    if input.dim() < 2 || input.dim() != rank || mat2.dim() != rank {
        return Ok(ShapeResolution::Skipped);
    }

    let m_dim = rank - 2;
    let n_dim = rank - 1;
    let mut expected = input.shape().dims()[..m_dim].to_vec();
    expected.push(input.size(m_dim));
    expected.push(mat2.size(n_dim));

    if out.shape().dims() == expected.as_slice() {
        return Ok(ShapeResolution::Unchanged);
    }

    tracing::debug!(
        op = OP,
        from = %out.shape(),
        to = %Shape::from_slice(&expected),
        "resizing output"
    );
    out.resize(&expected)
        .map_err(|source| KernelError::ResizeFailed { op: OP, source })?;
    Ok(ShapeResolution::Resized)
}

/// Check ranks, batch counts and output sizes.
///
/// `input.size(2)` is not compared against `mat2.size(1)`; the kernel reads
/// the inner dimension from `input` only.
pub(crate) fn check_bmm_out_args(input: &Tensor, mat2: &Tensor, out: &Tensor) -> Result<()> {
    check_same_rank(("input", input), ("mat2", mat2))?;
    check_same_rank(("input", input), ("out", out))?;
    if input.dim() != 3 {
        return Err(KernelError::UnexpectedRank {
            name: "input",
            dim: input.dim(),
            expected: 3,
        });
    }
    // A batch that does not fit the signed size type would be negative there.
    if isize::try_from(input.size(0)).is_err() {
        return Err(KernelError::NegativeBatch {
            name: "input",
            size: input.size(0),
        });
    }
    check_same_size(("input", input, 0), ("mat2", mat2, 0))?;
    check_same_size(("input", input, 0), ("out", out, 0))?;
    check_same_size(("mat2", mat2, 2), ("out", out, 2))?;
    check_same_size(("input", input, 1), ("out", out, 1))?;
    Ok(())
}

pub(crate) fn check_same_dtype(input: &Tensor, mat2: &Tensor, out: &Tensor) -> Result<()> {
    if input.dtype() == mat2.dtype() && input.dtype() == out.dtype() {
        return Ok(());
    }
    Err(KernelError::DTypeMismatch {
        dtypes: vec![
            format!("input {}", input.dtype()),
            format!("mat2 {}", mat2.dtype()),
            format!("out {}", out.dtype()),
        ],
    })
}

fn check_same_rank(lhs: (&'static str, &Tensor), rhs: (&'static str, &Tensor)) -> Result<()> {
    if lhs.1.dim() == rhs.1.dim() {
        return Ok(());
    }
    Err(KernelError::RankMismatch {
        lhs: lhs.0,
        lhs_dim: lhs.1.dim(),
        rhs: rhs.0,
        rhs_dim: rhs.1.dim(),
    })
}

fn check_same_size(
    lhs: (&'static str, &Tensor, usize),
    rhs: (&'static str, &Tensor, usize),
) -> Result<()> {
    let (lhs_size, rhs_size) = (lhs.1.size(lhs.2), rhs.1.size(rhs.2));
    if lhs_size == rhs_size {
        return Ok(());
    }
    Err(KernelError::SizeMismatch {
        lhs: lhs.0,
        lhs_axis: lhs.2,
        lhs_size,
        rhs: rhs.0,
        rhs_axis: rhs.2,
        rhs_size,
    })
}

// Integer overflow is not handled; products and sums wrap.
fn bmm_kernel<T: RealScalar>(input: &Tensor, mat2: &Tensor, out: &mut Tensor) -> Result<()> {
    if input.numel() == 0 || mat2.numel() == 0 || out.numel() == 0 {
        tracing::trace!(op = OP, "empty operand, nothing to compute");
        return Ok(());
    }

    let batch_size = input.size(0);
    let m = input.size(1);
    let n = input.size(2);
    let p = mat2.size(2);
    let dtype = T::DTYPE;
    tracing::trace!(op = OP, batch_size, m, n, p, %dtype, "computing");

    let x_data = input.data::<T>()?;
    let y_data = mat2.data::<T>()?;
    let z_data = out.data_mut::<T>()?;

    for i in 0..batch_size {
        let x = batch_slice("input", x_data, i, m * n)?;
        let y = batch_slice("mat2", y_data, i, n * p)?;
        let z = batch_slice_mut("out", z_data, i, m * p)?;
        vec_matmul(z, x, y, m, n, p);
    }
    Ok(())
}

fn batch_slice<'a, T>(
    name: &'static str,
    data: &'a [T],
    batch: usize,
    len: usize,
) -> Result<&'a [T]> {
    let start = batch * len;
    let end = start + len;
    data.get(start..end).ok_or(KernelError::SliceOutOfBounds {
        name,
        batch,
        start,
        end,
        len: data.len(),
    })
}

fn batch_slice_mut<'a, T>(
    name: &'static str,
    data: &'a mut [T],
    batch: usize,
    len: usize,
) -> Result<&'a mut [T]> {
    let start = batch * len;
    let end = start + len;
    let total = data.len();
    data.get_mut(start..end).ok_or(KernelError::SliceOutOfBounds {
        name,
        batch,
        start,
        end,
        len: total,
    })
}
