//! Matrix algorithms over graph adjacency matrices.

pub mod dissimilarity;
pub mod power;
pub mod stats;

pub use dissimilarity::{graph_diss, graph_diss_with};
pub use power::{mat_pow, mat_pow_with};
pub use stats::{col_variances, row_variances};
