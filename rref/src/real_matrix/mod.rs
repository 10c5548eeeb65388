pub mod gauss_jordan;
pub mod matrix;
pub mod parse;
pub mod tolerance;

pub use gauss_jordan::{
    reduced_row_echelon, reduced_row_echelon_with_tolerance, GaussJordan, Pivot, Reduction,
};
pub use matrix::RealMatrix;
pub use tolerance::Tolerance;
