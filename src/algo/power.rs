//! Integer matrix powers by binary exponentiation.
//!
//! # Algorithm
//!
//! Right-to-left square-and-multiply:
//!
//! ```text
//! result = I
//! while n > 0:
//!     if n is odd: result = result · M; n -= 1
//!     M = M · M
//!     n = n / 2
//! ```
//!
//! Each bit of `n` costs one squaring plus, for set bits, one extra
//! product, so `M^n` takes O(log n) multiplications instead of `n - 1`.
//! The squaring after the last set bit is skipped since its result would
//! never be used.
//!
//! # Complexity
//!
//! - Dense: O(d³ log n)
//! - Sparse: O(fill × log n), where fill grows with the powers of `M`

use crate::config::{MatPowConfig, NegativeExponentPolicy};
use crate::error::{ensure_square, Error, Result};
use crate::input::{MatrixInput, Operand};
use log::{debug, trace};
use ndarray::{Array2, ArrayBase, Data, Ix2};
use sprs::CsMat;

/// `m` raised to the `n`-th power with default settings.
///
/// Negative exponents are rejected.
///
/// # Example
///
/// ```
/// use lattix_matrix::{mat_pow, MatrixInput};
/// use ndarray::array;
///
/// let m = MatrixInput::dense(array![[2.0, 0.0], [0.0, 3.0]]);
/// assert_eq!(mat_pow(&m, 3).unwrap(), array![[8.0, 0.0], [0.0, 27.0]]);
/// ```
pub fn mat_pow(m: &MatrixInput, n: i64) -> Result<Array2<f64>> {
    mat_pow_with(m, n, &MatPowConfig::default())
}

/// `m` raised to the `n`-th power.
pub fn mat_pow_with(m: &MatrixInput, n: i64, config: &MatPowConfig) -> Result<Array2<f64>> {
    let operand = m.resolve(&config.symmetric)?;
    let exponent = match u64::try_from(n) {
        Ok(exponent) => exponent,
        Err(_) => match config.negative_exponent {
            NegativeExponentPolicy::Reject => return Err(Error::NegativeExponent(n)),
            NegativeExponentPolicy::Identity => {
                debug!("negative exponent {n}, returning identity");
                0
            }
        },
    };

    match operand {
        Operand::Dense(dense) => mat_pow_dense(dense, exponent),
        Operand::Sparse(sparse) => mat_pow_sparse(&sparse, exponent),
    }
}

/// Dense branch of [`mat_pow`].
pub fn mat_pow_dense<S>(m: &ArrayBase<S, Ix2>, n: u64) -> Result<Array2<f64>>
where
    S: Data<Elem = f64>,
{
    let dim = ensure_square(m.dim())?;
    let mut base = m.to_owned();
    let mut result = Array2::<f64>::eye(dim);
    let mut n = n;

    while n > 0 {
        trace!("dense power step, remaining exponent {n}");
        if n % 2 != 0 {
            result = result.dot(&base);
            n -= 1;
            if n == 0 {
                break;
            }
        }
        base = base.dot(&base);
        n /= 2;
    }
    Ok(result)
}

/// Sparse branch of [`mat_pow`]. Products stay sparse; only the result is
/// densified.
pub fn mat_pow_sparse(m: &CsMat<f64>, n: u64) -> Result<Array2<f64>> {
    let dim = ensure_square(m.shape())?;
    let mut base = m.clone();
    let mut result: CsMat<f64> = CsMat::eye(dim);
    let mut n = n;

    while n > 0 {
        trace!("sparse power step, remaining exponent {n}, base nnz={}", base.nnz());
        if n % 2 != 0 {
            result = &result * &base;
            n -= 1;
            if n == 0 {
                break;
            }
        }
        base = &base * &base;
        n /= 2;
    }
    Ok(result.to_dense())
}
