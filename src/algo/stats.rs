//! Per-row and per-column sample variances of a dense matrix.

use ndarray::{Array1, ArrayBase, Axis, Data, Ix2};

/// Sample variance (normalised by `k - 1`) of each row.
///
/// Rows with fewer than two entries have variance `0.0`.
pub fn row_variances<S>(m: &ArrayBase<S, Ix2>) -> Array1<f64>
where
    S: Data<Elem = f64>,
{
    if m.ncols() < 2 {
        return Array1::zeros(m.nrows());
    }
    m.var_axis(Axis(1), 1.0)
}

/// Sample variance of each column, i.e. the row variances of `mᵗ`.
pub fn col_variances<S>(m: &ArrayBase<S, Ix2>) -> Array1<f64>
where
    S: Data<Elem = f64>,
{
    row_variances(&m.t())
}
