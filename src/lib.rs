//! # Sparse feature vectors
//!
//! Vectors indexed by arbitrary hashable dimensions, of which only the explicitly set dimensions
//! are stored. They support vector arithmetic, exact rational scaling and several distance
//! metrics.
//!
//! ```
//! use sparse_features::SparseVector;
//! use sparse_features::distance::taxicab_distance;
//!
//! let left: SparseVector<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
//! let right: SparseVector<&str, i32> = [("b", 3), ("c", 4)].into_iter().collect();
//!
//! assert_eq!((&left + &right).get("b"), 5);
//! assert_eq!(taxicab_distance(&left, &right), 6_f64);
//! ```
#![warn(missing_docs)]

pub mod distance;
pub mod error;
pub mod number;
pub mod vector;

pub use vector::SparseVector;
