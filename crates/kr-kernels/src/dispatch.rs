/// Selects a monomorphized expression for a runtime real dtype.
///
/// Inside `$body`, `$t` names the Rust type matching `$dtype`. Non-real
/// dtypes evaluate `$fallback`.
///
/// ```ignore
/// dispatch_real_dtype!(dtype, |T| kernel::<T>(a, b, out), _ => Err(unhandled))
/// ```
macro_rules! dispatch_real_dtype {
    ($dtype:expr, |$t:ident| $body:expr, _ => $fallback:expr) => {
        match $dtype {
            ::kr_tensor::DType::U8 => {
                type $t = u8;
                $body
            }
            ::kr_tensor::DType::I8 => {
                type $t = i8;
                $body
            }
            ::kr_tensor::DType::I16 => {
                type $t = i16;
                $body
            }
            ::kr_tensor::DType::I32 => {
                type $t = i32;
                $body
            }
            ::kr_tensor::DType::I64 => {
                type $t = i64;
                $body
            }
            ::kr_tensor::DType::F32 => {
                type $t = f32;
                $body
            }
            ::kr_tensor::DType::F64 => {
                type $t = f64;
                $body
            }
            _ => $fallback,
        }
    };
}

pub(crate) use dispatch_real_dtype;

#[cfg(test)]
mod tests {
    use kr_tensor::{DType, Element};

    use crate::scalar::RealScalar;

    fn dispatched_tag(dtype: DType) -> Option<DType> {
        dispatch_real_dtype!(dtype, |T| Some(<T as Element>::DTYPE), _ => None)
    }

    fn zero_is_default<T: RealScalar>() -> bool {
        T::zero() == T::default()
    }

    #[test]
    fn test_every_real_dtype_dispatches_to_itself() {
        for dtype in DType::ALL {
            if dtype.is_real() {
                assert_eq!(dispatched_tag(dtype), Some(dtype));
            } else {
                assert_eq!(dispatched_tag(dtype), None);
            }
        }
    }

    #[test]
    fn test_dispatched_type_is_real_scalar() {
        for dtype in DType::ALL.into_iter().filter(DType::is_real) {
            assert!(dispatch_real_dtype!(dtype, |T| zero_is_default::<T>(), _ => false));
        }
    }
}
