//! Unit-safe fixed-size vectors and matrices for Metra
//!
//! Elements are plain `f64` or dimension-tagged [`metra_units::Quantity`] values;
//! products and quotients derive their element dimension at compile time.

pub mod error;
pub mod matrix;
mod text;
pub mod vector;

pub use error::{LinalgError, ParseError};
pub use matrix::{Matrix3x3, MatrixMxN, MatrixNxN};
pub use vector::{Vector3, VectorN};
