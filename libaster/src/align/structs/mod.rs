mod alignment;
pub use alignment::{Alignment, LengthMismatchError, Msa};

mod cost_matrix;
pub use cost_matrix::{AffineMatrices, CostMatrix};

mod cost_tensor;
pub use cost_tensor::{CapacityError, CostTensor};
