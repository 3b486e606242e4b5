use std::fmt;

/// A tensor shape, wrapping a vector of dimension sizes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Create a new shape from a vector of dimensions.
    pub fn new(dims: Vec<usize>) -> Self {
        Shape { dims }
    }

    /// Create a shape from a slice of dimensions.
    pub fn from_slice(dims: &[usize]) -> Self {
        Shape {
            dims: dims.to_vec(),
        }
    }

    /// Number of dimensions (rank).
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Total number of elements (product of all dimension sizes).
    ///
    /// # Panics
    /// Panics if the product does not fit in `usize`. Shapes held by a
    /// `Tensor` never overflow.
    pub fn numel(&self) -> usize {
        self.checked_numel()
            .unwrap_or_else(|| panic!("element count of shape {} overflows usize", self))
    }

    /// Total number of elements, or `None` if the product overflows `usize`.
    ///
    /// Any zero extent makes the count zero, whatever the other extents are.
    pub fn checked_numel(&self) -> Option<usize> {
        if self.dims.contains(&0) {
            return Some(0);
        }
        self.dims.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
    }

    /// Returns the size of dimension `i`.
    ///
    /// # Panics
    /// Panics if `i >= ndim()`.
    pub fn dim(&self, i: usize) -> usize {
        self.dims[i]
    }

    /// Returns a reference to the underlying dimension sizes.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, "]")
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Shape::new(dims)
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Shape::from_slice(dims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batched_shape() {
        let s = Shape::new(vec![2, 3, 4]);
        assert_eq!(s.ndim(), 3);
        assert_eq!(s.numel(), 24);
        assert_eq!(s.dim(0), 2);
        assert_eq!(s.dim(1), 3);
        assert_eq!(s.dim(2), 4);
    }

    #[test]
    fn test_zero_extent() {
        let s = Shape::new(vec![0, 3, 4]);
        assert_eq!(s.numel(), 0);
        let s = Shape::new(vec![2, 3, 0]);
        assert_eq!(s.numel(), 0);
    }

    #[test]
    fn test_checked_numel_overflow() {
        let half = 1usize << (usize::BITS / 2);
        assert_eq!(Shape::new(vec![half, half, 4]).checked_numel(), None);
        assert_eq!(Shape::new(vec![half, half - 1]).checked_numel(), Some(half * (half - 1)));
    }

    #[test]
    fn test_checked_numel_zero_extent_wins() {
        // The leading pair alone overflows; the trailing zero still makes it empty.
        let s = Shape::new(vec![usize::MAX, usize::MAX, 0]);
        assert_eq!(s.checked_numel(), Some(0));
        assert_eq!(s.numel(), 0);
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn test_numel_overflow_panics() {
        Shape::new(vec![usize::MAX, 2]).numel();
    }

    #[test]
    fn test_scalar_shape() {
        let s = Shape::new(vec![]);
        assert_eq!(s.ndim(), 0);
        assert_eq!(s.numel(), 1); // product of empty = 1
    }

    #[test]
    fn test_display() {
        assert_eq!(Shape::new(vec![2, 3, 4]).to_string(), "[2, 3, 4]");
        assert_eq!(Shape::new(vec![]).to_string(), "[]");
    }

    #[test]
    fn test_from_slice() {
        let dims: &[usize] = &[1, 2, 3];
        let s = Shape::from(dims);
        assert_eq!(s, Shape::new(vec![1, 2, 3]));
        assert_ne!(s, Shape::new(vec![1, 2]));
    }
}
