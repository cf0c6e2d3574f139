//! Column-major 2x2 matrices.
//!
//! Every mutating operation writes into an explicit destination and hands it
//! back, so calls can be chained without allocating intermediates:
//!
//! ```
//! use matrix2::Mat22;
//!
//! let mut m = Mat22::identity();
//! m.scale([3., 4.]).transpose();
//! assert_eq!(m.data(), &[3., 0., 0., 4.]);
//! ```

pub mod mat;
mod error;

pub use error::Mat22Error;
pub use mat::{Mat22, MatIndex, OutOfBoundsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
