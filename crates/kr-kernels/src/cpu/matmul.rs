use crate::scalar::RealScalar;

/// Dense matrix multiplication: `z = x @ y`.
///
/// - `x`: row-major data of shape [m, n]
/// - `y`: row-major data of shape [n, p]
/// - `z`: row-major output of shape [m, p], fully overwritten
///
/// Each output element is accumulated in `T` starting from zero.
///
/// # Panics
/// Panics if a slice is shorter than its shape requires.
pub fn vec_matmul<T: RealScalar>(z: &mut [T], x: &[T], y: &[T], m: usize, n: usize, p: usize) {
    for i in 0..m {
        for j in 0..p {
            let mut sum = T::zero();
            for k in 0..n {
                sum = T::mul_add(sum, x[i * n + k], y[k * p + j]);
            }
            z[i * p + j] = sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_matmul_identity() {
        // [1,2;3,4] @ I = [1,2;3,4]
        let x = [1.0f32, 2.0, 3.0, 4.0];
        let eye = [1.0f32, 0.0, 0.0, 1.0];
        let mut z = [0.0f32; 4];
        vec_matmul(&mut z, &x, &eye, 2, 2, 2);
        assert_eq!(z, x);
    }

    #[test]
    fn test_matmul_rectangular() {
        // [1,2,3;4,5,6] @ [7,8;9,10;11,12] = [58,64;139,154]
        let x = [1i64, 2, 3, 4, 5, 6];
        let y = [7i64, 8, 9, 10, 11, 12];
        let mut z = [0i64; 4];
        vec_matmul(&mut z, &x, &y, 2, 3, 2);
        assert_eq!(z, [58, 64, 139, 154]);
    }

    #[test]
    fn test_matmul_overwrites_output() {
        let x = [2.0f64];
        let y = [3.0f64];
        let mut z = [100.0f64];
        vec_matmul(&mut z, &x, &y, 1, 1, 1);
        assert_relative_eq!(z[0], 6.0);
    }

    #[test]
    fn test_matmul_zero_inner_dim() {
        // n = 0: every output element is the empty sum.
        let mut z = [9i32; 6];
        vec_matmul::<i32>(&mut z, &[], &[], 2, 0, 3);
        assert_eq!(z, [0; 6]);
    }

    #[test]
    fn test_matmul_u8_wraps() {
        let x = [16u8, 16];
        let y = [16u8, 1];
        let mut z = [0u8; 1];
        vec_matmul(&mut z, &x, &y, 1, 2, 1);
        // 16*16 + 16*1 = 272, wrapped to 16
        assert_eq!(z, [16]);
    }
}
