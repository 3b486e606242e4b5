pub mod matmul;

pub use matmul::vec_matmul;
