//! Matrix inputs and class-tag dispatch.
//!
//! Callers hand over either a dense array or a sparse matrix labelled with
//! the class tag of the host environment that produced it. Four
//! compressed-column classes are recognised:
//!
//! | Tag | Storage | Values |
//! |-----|---------|--------|
//! | `dsCMatrix` | symmetric, one triangle stored | double |
//! | `lsCMatrix` | symmetric, one triangle stored | logical |
//! | `dgCMatrix` | general | double |
//! | `lgCMatrix` | general | logical |
//!
//! Anything else (triangular, packed, row-compressed classes, ...) is
//! rejected when the tag is parsed, so the algorithms only ever see the
//! three variants of [`MatrixInput`].

use crate::config::{DiagonalPolicy, SymmetricConfig};
use crate::error::{ensure_square, Error, Result};
use log::debug;
use ndarray::{Array2, ArrayView2};
use sprs::{CsMat, TriMat};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A recognised sparse matrix class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SparseClass {
    /// `dsCMatrix`
    SymmetricDouble,
    /// `lsCMatrix`
    SymmetricLogical,
    /// `dgCMatrix`
    GeneralDouble,
    /// `lgCMatrix`
    GeneralLogical,
}

impl SparseClass {
    /// Parse a class tag.
    ///
    /// ```
    /// use lattix_matrix::{Error, SparseClass};
    ///
    /// assert_eq!(SparseClass::from_tag("dsCMatrix"), Ok(SparseClass::SymmetricDouble));
    /// assert!(matches!(SparseClass::from_tag("dtCMatrix"), Err(Error::UnsupportedType(_))));
    /// ```
    pub fn from_tag(tag: &str) -> Result<Self> {
        tag.parse()
    }

    /// The host class tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SymmetricDouble => "dsCMatrix",
            Self::SymmetricLogical => "lsCMatrix",
            Self::GeneralDouble => "dgCMatrix",
            Self::GeneralLogical => "lgCMatrix",
        }
    }

    /// Whether only one triangle is stored.
    pub fn is_symmetric(self) -> bool {
        matches!(self, Self::SymmetricDouble | Self::SymmetricLogical)
    }

    /// Whether the stored values are booleans.
    pub fn is_logical(self) -> bool {
        matches!(self, Self::SymmetricLogical | Self::GeneralLogical)
    }
}

impl FromStr for SparseClass {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "dsCMatrix" => Ok(Self::SymmetricDouble),
            "lsCMatrix" => Ok(Self::SymmetricLogical),
            "dgCMatrix" => Ok(Self::GeneralDouble),
            "lgCMatrix" => Ok(Self::GeneralLogical),
            other => Err(Error::UnsupportedType(other.to_string())),
        }
    }
}

impl fmt::Display for SparseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A matrix handed to [`graph_diss`](crate::graph_diss) or
/// [`mat_pow`](crate::mat_pow).
///
/// Sparse variants always hold CSC storage.
#[derive(Debug, Clone)]
pub enum MatrixInput {
    /// Plain dense array.
    Dense(Array2<f64>),
    /// One stored triangle of a symmetric matrix.
    SymmetricSparse(CsMat<f64>),
    /// All entries stored explicitly.
    GeneralSparse(CsMat<f64>),
}

impl MatrixInput {
    /// Wrap a dense array.
    pub fn dense(m: Array2<f64>) -> Self {
        Self::Dense(m)
    }

    /// Wrap a double-valued sparse matrix labelled with a host class tag.
    ///
    /// Logical tags are accepted too; the values are taken as given.
    pub fn from_tagged(tag: &str, m: CsMat<f64>) -> Result<Self> {
        let class = SparseClass::from_tag(tag)?;
        Ok(Self::from_class(class, m))
    }

    /// Wrap a logical sparse matrix labelled with a host class tag.
    ///
    /// `true` becomes `1.0`; explicitly stored `false` becomes `0.0`.
    pub fn from_tagged_logical(tag: &str, m: CsMat<bool>) -> Result<Self> {
        let class = SparseClass::from_tag(tag)?;
        if !class.is_logical() {
            return Err(Error::UnsupportedType(format!("{tag} with logical values")));
        }
        let values: CsMat<f64> = m.map(|&v| if v { 1.0 } else { 0.0 });
        Ok(Self::from_class(class, values))
    }

    /// Wrap a sparse matrix of an already-parsed class.
    pub fn from_class(class: SparseClass, m: CsMat<f64>) -> Self {
        let m = if m.is_csc() { m } else { m.to_csc() };
        if class.is_symmetric() {
            Self::SymmetricSparse(m)
        } else {
            Self::GeneralSparse(m)
        }
    }

    /// `(rows, cols)` of the stored matrix.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Self::Dense(m) => m.dim(),
            Self::SymmetricSparse(m) | Self::GeneralSparse(m) => m.shape(),
        }
    }

    /// Whether the input takes the sparse path.
    pub fn is_sparse(&self) -> bool {
        !matches!(self, Self::Dense(_))
    }

    /// The operand the algorithms run on: symmetric storage is mirrored into
    /// a full matrix, everything else is borrowed.
    pub fn resolve(&self, config: &SymmetricConfig) -> Result<Operand<'_>> {
        match self {
            Self::Dense(m) => {
                debug!("dense input {:?}", m.dim());
                Ok(Operand::Dense(m))
            }
            Self::GeneralSparse(m) => {
                debug!("general sparse input {:?}, nnz={}", m.shape(), m.nnz());
                Ok(Operand::Sparse(Cow::Borrowed(m)))
            }
            Self::SymmetricSparse(m) => {
                debug!(
                    "symmetric sparse input {:?}, nnz={}, diagonal={:?}",
                    m.shape(),
                    m.nnz(),
                    config.diagonal
                );
                let full = reconstruct_symmetric(m, config.diagonal)?;
                Ok(Operand::Sparse(Cow::Owned(full)))
            }
        }
    }

    /// Materialise the full logical matrix.
    pub fn to_dense(&self, config: &SymmetricConfig) -> Result<Array2<f64>> {
        Ok(self.resolve(config)?.to_dense())
    }
}

impl From<Array2<f64>> for MatrixInput {
    fn from(m: Array2<f64>) -> Self {
        Self::Dense(m)
    }
}

/// A resolved operand: either the caller's dense array or a full sparse
/// matrix.
#[derive(Debug, Clone)]
pub enum Operand<'a> {
    /// Dense branch.
    Dense(&'a Array2<f64>),
    /// Sparse branch, CSC storage.
    Sparse(Cow<'a, CsMat<f64>>),
}

impl Operand<'_> {
    /// Dense copy of the operand.
    pub fn to_dense(&self) -> Array2<f64> {
        match self {
            Self::Dense(m) => (*m).clone(),
            Self::Sparse(m) => m.to_dense(),
        }
    }
}

/// Mirror a single stored triangle into the full symmetric matrix.
///
/// With [`DiagonalPolicy::Once`] this is `M + Mᵗ - diag(M)`; with
/// [`DiagonalPolicy::Doubled`] it is `M + Mᵗ`.
///
/// Fails with [`Error::NotTriangular`] when `m` has entries strictly above
/// and strictly below the diagonal.
pub fn reconstruct_symmetric(m: &CsMat<f64>, diagonal: DiagonalPolicy) -> Result<CsMat<f64>> {
    let n = ensure_square(m.shape())?;
    let mut upper = false;
    let mut lower = false;
    let mut tri = TriMat::with_capacity((n, n), 2 * m.nnz());

    for (&value, (row, col)) in m.iter() {
        match row.cmp(&col) {
            Ordering::Equal => {
                let value = match diagonal {
                    DiagonalPolicy::Once => value,
                    DiagonalPolicy::Doubled => 2.0 * value,
                };
                tri.add_triplet(row, col, value);
            }
            ord => {
                if ord == Ordering::Less {
                    upper = true;
                } else {
                    lower = true;
                }
                tri.add_triplet(row, col, value);
                tri.add_triplet(col, row, value);
            }
        }
    }

    if upper && lower {
        return Err(Error::NotTriangular);
    }
    let full: CsMat<f64> = tri.to_csc();
    Ok(full)
}

/// CSC copy of a dense matrix, keeping only nonzero entries.
pub fn sparse_from_dense(m: ArrayView2<'_, f64>) -> CsMat<f64> {
    let mut tri = TriMat::new(m.dim());
    for ((row, col), &value) in m.indexed_iter() {
        if value != 0.0 {
            tri.add_triplet(row, col, value);
        }
    }
    tri.to_csc()
}
