use kr_tensor::Element;
use num_traits::Zero;

/// Element types kernels specialize over: the integer types plus `f32` and
/// `f64`.
///
/// Arithmetic stays in `Self`. Integer products and sums wrap on overflow;
/// there is no widening accumulator.
pub trait RealScalar: Element + Zero {
    /// Returns `acc + x * y`.
    fn mul_add(acc: Self, x: Self, y: Self) -> Self;
}

macro_rules! impl_real_int {
    ($($ty:ty),*) => {
        $(
            impl RealScalar for $ty {
                #[inline]
                fn mul_add(acc: Self, x: Self, y: Self) -> Self {
                    acc.wrapping_add(x.wrapping_mul(y))
                }
            }
        )*
    };
}

macro_rules! impl_real_float {
    ($($ty:ty),*) => {
        $(
            impl RealScalar for $ty {
                #[inline]
                fn mul_add(acc: Self, x: Self, y: Self) -> Self {
                    acc + x * y
                }
            }
        )*
    };
}

impl_real_int!(u8, i8, i16, i32, i64);
impl_real_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_wraps() {
        assert_eq!(u8::mul_add(200, 10, 10), 44);
        assert_eq!(i8::mul_add(0, 64, 2), -128);
        assert_eq!(i32::mul_add(1, 2, 3), 7);
    }

    #[test]
    fn test_float() {
        assert_eq!(<f64 as RealScalar>::mul_add(0.5, 2.0, 0.25), 1.0);
        assert_eq!(<f32 as RealScalar>::mul_add(f32::zero(), 3.0, 4.0), 12.0);
    }
}
