pub mod error;
pub mod real_matrix;

pub use error::{Result, RrefError};
pub use real_matrix::{reduced_row_echelon, RealMatrix, Reduction, Tolerance};
