use half::f16;

use crate::dtype::DType;
use crate::element::Element;
use crate::error::{Result, TensorError};

/// CPU-side tensor storage.
///
/// One contiguous vector per dtype; the variant is the runtime dtype tag.
#[derive(Debug, Clone, PartialEq)]
pub enum CpuStorage {
    U8(Vec<u8>),
    I8(Vec<i8>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    F16(Vec<f16>),
    F32(Vec<f32>),
    F64(Vec<f64>),
    Bool(Vec<bool>),
}

/// Applies the same expression to the vector inside any variant.
macro_rules! with_vec {
    ($storage:expr, $v:ident => $body:expr) => {
        match $storage {
            CpuStorage::U8($v) => $body,
            CpuStorage::I8($v) => $body,
            CpuStorage::I16($v) => $body,
            CpuStorage::I32($v) => $body,
            CpuStorage::I64($v) => $body,
            CpuStorage::F16($v) => $body,
            CpuStorage::F32($v) => $body,
            CpuStorage::F64($v) => $body,
            CpuStorage::Bool($v) => $body,
        }
    };
}

impl CpuStorage {
    /// Number of elements in this storage.
    pub fn len(&self) -> usize {
        with_vec!(self, v => v.len())
    }

    /// Returns true if the storage contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Create zero-filled storage for the given dtype and element count.
    pub fn zeros(dtype: DType, n: usize) -> Self {
        match dtype {
            DType::U8 => CpuStorage::U8(vec![0; n]),
            DType::I8 => CpuStorage::I8(vec![0; n]),
            DType::I16 => CpuStorage::I16(vec![0; n]),
            DType::I32 => CpuStorage::I32(vec![0; n]),
            DType::I64 => CpuStorage::I64(vec![0; n]),
            DType::F16 => CpuStorage::F16(vec![f16::ZERO; n]),
            DType::F32 => CpuStorage::F32(vec![0.0; n]),
            DType::F64 => CpuStorage::F64(vec![0.0; n]),
            DType::Bool => CpuStorage::Bool(vec![false; n]),
        }
    }

    /// Create storage from a typed vector.
    pub fn from_vec<T: Element>(data: Vec<T>) -> Self {
        T::into_storage(data)
    }

    /// Change the element count. Growth is zero-filled.
    pub fn resize(&mut self, n: usize) {
        with_vec!(self, v => v.resize(n, Default::default()))
    }

    /// Returns the dtype of this storage.
    pub fn dtype(&self) -> DType {
        match self {
            CpuStorage::U8(_) => DType::U8,
            CpuStorage::I8(_) => DType::I8,
            CpuStorage::I16(_) => DType::I16,
            CpuStorage::I32(_) => DType::I32,
            CpuStorage::I64(_) => DType::I64,
            CpuStorage::F16(_) => DType::F16,
            CpuStorage::F32(_) => DType::F32,
            CpuStorage::F64(_) => DType::F64,
            CpuStorage::Bool(_) => DType::Bool,
        }
    }

    /// Returns the data as a typed slice.
    ///
    /// # Errors
    /// Returns `DTypeMismatch` if the storage does not hold `T`.
    pub fn as_slice<T: Element>(&self) -> Result<&[T]> {
        T::slice(self).ok_or(TensorError::DTypeMismatch {
            expected: T::DTYPE,
            got: self.dtype(),
        })
    }

    /// Returns the data as a mutable typed slice.
    ///
    /// # Errors
    /// Returns `DTypeMismatch` if the storage does not hold `T`.
    pub fn as_mut_slice<T: Element>(&mut self) -> Result<&mut [T]> {
        let got = self.dtype();
        T::slice_mut(self).ok_or(TensorError::DTypeMismatch {
            expected: T::DTYPE,
            got,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec() {
        let s = CpuStorage::from_vec(vec![1.0f32, 2.0, 3.0]);
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
        assert_eq!(s.dtype(), DType::F32);
        assert_eq!(s.as_slice::<f32>().unwrap(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_zeros_every_dtype() {
        for dtype in DType::ALL {
            let s = CpuStorage::zeros(dtype, 5);
            assert_eq!(s.len(), 5);
            assert_eq!(s.dtype(), dtype);
        }
        let s = CpuStorage::zeros(DType::I16, 4);
        assert_eq!(s.as_slice::<i16>().unwrap(), &[0; 4]);
    }

    #[test]
    fn test_typed_access_mismatch() {
        let s = CpuStorage::zeros(DType::I32, 2);
        let err = s.as_slice::<f32>().unwrap_err();
        assert_eq!(
            err,
            TensorError::DTypeMismatch {
                expected: DType::F32,
                got: DType::I32
            }
        );
    }

    #[test]
    fn test_mut_slice() {
        let mut s = CpuStorage::from_vec(vec![1i64, 2]);
        let slice = s.as_mut_slice::<i64>().unwrap();
        slice[0] = 42;
        assert_eq!(s.as_slice::<i64>().unwrap()[0], 42);
    }

    #[test]
    fn test_resize_grow_zero_fills() {
        let mut s = CpuStorage::from_vec(vec![7u8, 8]);
        s.resize(4);
        assert_eq!(s.as_slice::<u8>().unwrap(), &[7, 8, 0, 0]);
    }
}
