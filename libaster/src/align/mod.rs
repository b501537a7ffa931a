pub mod structs;

mod global_linear;
pub use global_linear::{align_linear, global_linear, global_linear_cost};

mod global_affine;
pub use global_affine::{align_affine, global_affine};

mod traceback;
pub use traceback::{traceback_affine, traceback_linear};

mod exact_msa;
pub use exact_msa::{exact_msa, DEFAULT_MAX_CELLS};

mod center_star;
pub use center_star::{approximate_msa, center_index, pairwise_cost_matrix};
