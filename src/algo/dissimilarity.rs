//! Graph dissimilarity from an adjacency or similarity matrix.
//!
//! # Definition
//!
//! With `G = M·M` and `deg = diag(G)`:
//!
//! ```text
//! D[i,j] = 1 - G[i,j] / sqrt(deg[i] * deg[j])
//! ```
//!
//! `G[i,j]` counts (weighted) two-hop paths between `i` and `j`, so `D` is
//! one minus the cosine similarity of the rows of `M` when `M` is
//! symmetric. Identical neighbourhoods give `0`, disjoint ones give `1`.
//!
//! # Isolated nodes
//!
//! A node with `deg[i] == 0` makes its whole row and column divide by zero.
//! Those entries come back as `NaN` (or `±Inf`) and are left for the
//! caller to interpret.

use crate::config::GraphDissConfig;
use crate::error::{ensure_square, Result};
use crate::input::{MatrixInput, Operand};
use log::debug;
use ndarray::{Array2, ArrayBase, Axis, Data, Ix2};
use sprs::CsMat;

/// Dissimilarity matrix of `m` with default settings.
///
/// # Example
///
/// ```
/// use lattix_matrix::{graph_diss, MatrixInput};
/// use ndarray::array;
///
/// // A single edge.
/// let m = MatrixInput::dense(array![[0.0, 1.0], [1.0, 0.0]]);
/// let d = graph_diss(&m).unwrap();
/// assert_eq!(d, array![[0.0, 1.0], [1.0, 0.0]]);
/// ```
pub fn graph_diss(m: &MatrixInput) -> Result<Array2<f64>> {
    graph_diss_with(m, &GraphDissConfig::default())
}

/// Dissimilarity matrix of `m`.
///
/// Dense inputs take the dense path; sparse inputs keep `M·M` sparse and
/// only densify the product.
pub fn graph_diss_with(m: &MatrixInput, config: &GraphDissConfig) -> Result<Array2<f64>> {
    match m.resolve(&config.symmetric)? {
        Operand::Dense(dense) => graph_diss_dense(dense),
        Operand::Sparse(sparse) => graph_diss_sparse(&sparse),
    }
}

/// Dense branch of [`graph_diss`].
pub fn graph_diss_dense<S>(m: &ArrayBase<S, Ix2>) -> Result<Array2<f64>>
where
    S: Data<Elem = f64>,
{
    ensure_square(m.dim())?;
    let gram = m.dot(m);
    Ok(gram_to_dissimilarity(&gram))
}

/// Sparse branch of [`graph_diss`].
pub fn graph_diss_sparse(m: &CsMat<f64>) -> Result<Array2<f64>> {
    ensure_square(m.shape())?;
    let gram: CsMat<f64> = m * m;
    debug!("sparse gram matrix: nnz={} of {:?}", gram.nnz(), gram.shape());
    Ok(gram_to_dissimilarity(&gram.to_dense()))
}

/// `1 - G / sqrt(d·dᵗ)` where `d = diag(G)`.
pub fn gram_to_dissimilarity(gram: &Array2<f64>) -> Array2<f64> {
    let deg = gram.diag();
    let deg_prod = deg
        .insert_axis(Axis(1))
        .dot(&deg.insert_axis(Axis(0)));
    let scale = deg_prod.mapv_into(f64::sqrt);
    (gram / &scale).mapv_into(|x| 1.0 - x)
}
