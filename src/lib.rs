// Allow minor clippy style warnings at crate level
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]

//! Matrix utilities for graphs: dissimilarity and integer powers.
//!
//! - [`graph_diss`] - pairwise dissimilarity `1 - G / sqrt(deg·degᵗ)` with
//!   `G = M·M`
//! - [`mat_pow`] - `M^n` by square-and-multiply
//! - [`row_variances`] / [`col_variances`] - per-row/column sample variance
//!
//! Inputs are dense [`ndarray`] arrays or [`sprs`] matrices labelled with a
//! host class tag (see [`input`]). Both algorithms keep sparse inputs sparse
//! through the matrix products and always return a dense result.
//!
//! # Example
//!
//! ```rust
//! use lattix_matrix::{graph_diss, mat_pow, MatrixInput};
//! use lattix_matrix::input::sparse_from_dense;
//! use ndarray::array;
//!
//! // Upper triangle of a path graph A - B - C.
//! let upper = sparse_from_dense(array![[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]].view());
//! let m = MatrixInput::from_tagged("dsCMatrix", upper)?;
//!
//! let d = graph_diss(&m)?;
//! assert!(d[[0, 2]].abs() < 1e-12); // A and C share every neighbour
//!
//! let walks = mat_pow(&m, 2)?;
//! assert_eq!(walks[[1, 1]], 2.0);
//! # Ok::<(), lattix_matrix::Error>(())
//! ```
//!
//! # Logging
//!
//! Dispatch decisions are reported through the [`log`] facade at `debug`,
//! individual exponentiation steps at `trace`. No logger is installed.

pub mod algo;
pub mod config;
pub mod error;
pub mod input;

pub use algo::{
    col_variances, graph_diss, graph_diss_with, mat_pow, mat_pow_with, row_variances,
};
pub use config::{
    DiagonalPolicy, GraphDissConfig, MatPowConfig, NegativeExponentPolicy, SymmetricConfig,
};
pub use error::{Error, Result};
pub use input::{MatrixInput, Operand, SparseClass};

// Re-export the matrix crates so callers build inputs with matching versions
pub use ndarray;
pub use sprs;
