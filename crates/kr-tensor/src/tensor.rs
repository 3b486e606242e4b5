use crate::dtype::DType;
use crate::element::Element;
use crate::error::{Result, TensorError};
use crate::shape::Shape;
use crate::storage::CpuStorage;

/// How a tensor's shape may change after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeDynamism {
    /// The shape is fixed. Only a resize to the current shape succeeds.
    Static,
    /// The shape may change as long as the element count fits the capacity
    /// allocated at construction.
    #[default]
    DynamicBound,
    /// The shape may change freely; storage is reallocated on growth.
    DynamicUnbound,
}

/// A tensor backed by CPU storage.
///
/// Holds contiguous, row-major data with an associated shape. The dtype is
/// the storage variant. For a rank-3 tensor of shape `[b, rows, cols]`,
/// slice `i` starts at element `i * rows * cols`.
///
/// The storage length is the tensor's capacity. The shape's element count
/// never exceeds it; data accessors expose only the first `numel()` elements.
#[derive(Debug, Clone)]
pub struct Tensor {
    storage: CpuStorage,
    shape: Shape,
    dynamism: ShapeDynamism,
}

impl Tensor {
    /// Create a tensor from typed data and a shape.
    ///
    /// # Errors
    /// - `NumelOverflow` if the shape's element count does not fit in `usize`.
    /// - `DataLength` if `data.len() != shape.numel()`.
    pub fn from_vec<T: Element>(data: Vec<T>, shape: impl Into<Shape>) -> Result<Self> {
        let shape = shape.into();
        let numel = shape.checked_numel().ok_or_else(|| TensorError::NumelOverflow {
            requested: shape.dims().to_vec(),
        })?;
        if data.len() != numel {
            return Err(TensorError::DataLength {
                shape: shape.dims().to_vec(),
                expected: numel,
                got: data.len(),
            });
        }
        Ok(Tensor {
            storage: CpuStorage::from_vec(data),
            shape,
            dynamism: ShapeDynamism::default(),
        })
    }

    /// Create a zero-filled tensor with the given dtype and shape.
    ///
    /// # Panics
    /// Panics if the shape's element count overflows `usize`.
    pub fn zeros(dtype: DType, shape: impl Into<Shape>) -> Self {
        let shape = shape.into();
        let n = shape.numel();
        Tensor {
            storage: CpuStorage::zeros(dtype, n),
            shape,
            dynamism: ShapeDynamism::default(),
        }
    }

    /// Set how this tensor may be resized.
    pub fn with_dynamism(mut self, dynamism: ShapeDynamism) -> Self {
        self.dynamism = dynamism;
        self
    }

    /// Returns a reference to the tensor's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Number of dimensions.
    pub fn dim(&self) -> usize {
        self.shape.ndim()
    }

    /// Size of dimension `i`.
    ///
    /// # Panics
    /// Panics if `i >= dim()`.
    pub fn size(&self, i: usize) -> usize {
        self.shape.dim(i)
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.shape.numel()
    }

    /// Returns the tensor's data type.
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    pub fn dynamism(&self) -> ShapeDynamism {
        self.dynamism
    }

    /// Largest element count a `DynamicBound` resize may reach.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the data as a typed slice of `numel()` elements.
    ///
    /// # Errors
    /// Returns `DTypeMismatch` if the tensor does not hold `T`.
    pub fn data<T: Element>(&self) -> Result<&[T]> {
        let numel = self.numel();
        Ok(&self.storage.as_slice::<T>()?[..numel])
    }

    /// Returns the data as a mutable typed slice of `numel()` elements.
    ///
    /// # Errors
    /// Returns `DTypeMismatch` if the tensor does not hold `T`.
    pub fn data_mut<T: Element>(&mut self) -> Result<&mut [T]> {
        let numel = self.numel();
        Ok(&mut self.storage.as_mut_slice::<T>()?[..numel])
    }

    /// Resize the tensor in place to `new_sizes`.
    ///
    /// The rank never changes. Resizing to the current shape is a no-op for
    /// every dynamism. Within capacity only the shape changes: shrinking and
    /// regrowing keeps the stored elements at their flat positions. Growth
    /// past capacity (`DynamicUnbound` only) zero-fills the new elements.
    ///
    /// # Errors
    /// - `RankChange` if `new_sizes.len() != self.dim()`.
    /// - `NumelOverflow` if the new element count does not fit in `usize`.
    /// - `StaticShape` if the tensor is `Static` and the shape differs.
    /// - `CapacityExceeded` if the tensor is `DynamicBound` and the new
    ///   element count exceeds its capacity.
    pub fn resize(&mut self, new_sizes: &[usize]) -> Result<()> {
        if new_sizes.len() != self.dim() {
            return Err(TensorError::RankChange {
                from: self.dim(),
                to: new_sizes.len(),
            });
        }
        if self.shape.dims() == new_sizes {
            return Ok(());
        }

        let new_shape = Shape::from_slice(new_sizes);
        let numel = new_shape
            .checked_numel()
            .ok_or_else(|| TensorError::NumelOverflow {
                requested: new_sizes.to_vec(),
            })?;
        match self.dynamism {
            ShapeDynamism::Static => {
                return Err(TensorError::StaticShape {
                    current: self.shape.dims().to_vec(),
                    requested: new_sizes.to_vec(),
                });
            }
            ShapeDynamism::DynamicBound => {
                if numel > self.capacity() {
                    return Err(TensorError::CapacityExceeded {
                        requested: new_sizes.to_vec(),
                        numel,
                        capacity: self.capacity(),
                    });
                }
            }
            ShapeDynamism::DynamicUnbound => {
                if numel > self.capacity() {
                    self.storage.resize(numel);
                }
            }
        }

        self.shape = new_shape;
        Ok(())
    }
}
