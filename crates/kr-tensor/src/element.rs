use std::fmt::Debug;

use half::f16;

use crate::dtype::DType;
use crate::storage::CpuStorage;

/// A Rust scalar type that can back a tensor.
///
/// Ties the type to its `DType` tag and to the matching `CpuStorage` variant,
/// so typed access into storage is checked against the runtime tag.
pub trait Element: Copy + Debug + Default + PartialEq + Send + Sync + 'static {
    /// The dtype tag for this element type.
    const DTYPE: DType;

    /// Borrow the storage as `&[Self]`, or `None` if it holds another dtype.
    fn slice(storage: &CpuStorage) -> Option<&[Self]>;

    /// Borrow the storage as `&mut [Self]`, or `None` if it holds another dtype.
    fn slice_mut(storage: &mut CpuStorage) -> Option<&mut [Self]>;

    /// Wrap an owned vector into storage.
    fn into_storage(data: Vec<Self>) -> CpuStorage;
}

macro_rules! impl_element {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$variant;

                fn slice(storage: &CpuStorage) -> Option<&[Self]> {
                    match storage {
                        CpuStorage::$variant(v) => Some(v.as_slice()),
                        _ => None,
                    }
                }

                fn slice_mut(storage: &mut CpuStorage) -> Option<&mut [Self]> {
                    match storage {
                        CpuStorage::$variant(v) => Some(v.as_mut_slice()),
                        _ => None,
                    }
                }

                fn into_storage(data: Vec<Self>) -> CpuStorage {
                    CpuStorage::$variant(data)
                }
            }
        )*
    };
}

impl_element! {
    u8 => U8,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f16 => F16,
    f32 => F32,
    f64 => F64,
    bool => Bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_tags() {
        assert_eq!(<u8 as Element>::DTYPE, DType::U8);
        assert_eq!(<i64 as Element>::DTYPE, DType::I64);
        assert_eq!(<f16 as Element>::DTYPE, DType::F16);
        assert_eq!(<bool as Element>::DTYPE, DType::Bool);
    }

    #[test]
    fn test_slice_checks_variant() {
        let s = i32::into_storage(vec![1, 2, 3]);
        assert_eq!(i32::slice(&s), Some([1, 2, 3].as_slice()));
        assert!(f32::slice(&s).is_none());
        assert!(i64::slice(&s).is_none());
    }
}
