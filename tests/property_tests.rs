//! Property-based tests for graph dissimilarity and matrix powers.
//!
//! These tests verify invariants that should hold for any input:
//! - Powers agree with naive repeated multiplication
//! - Dense and sparse paths agree
//! - Dissimilarity of symmetric graphs is symmetric with a zero diagonal

use lattix_matrix::input::sparse_from_dense;
use lattix_matrix::{graph_diss, mat_pow, Error, MatrixInput};
use ndarray::Array2;
use proptest::prelude::*;

/// Small integer-valued matrices keep every product exact in f64.
fn arb_square(max_dim: usize) -> impl Strategy<Value = Array2<f64>> {
    (1..=max_dim).prop_flat_map(|n| {
        prop::collection::vec(-3i32..=3, n * n).prop_map(move |values| {
            Array2::from_shape_vec((n, n), values.into_iter().map(f64::from).collect())
                .expect("shape matches length")
        })
    })
}

/// Symmetric non-negative adjacency with a self-loop on every node, so no
/// node is isolated under `M·M`.
fn arb_connected_symmetric(max_dim: usize) -> impl Strategy<Value = Array2<f64>> {
    (1..=max_dim).prop_flat_map(|n| {
        prop::collection::vec(0i32..=4, n * n).prop_map(move |values| {
            let mut m = Array2::<f64>::zeros((n, n));
            for i in 0..n {
                for j in i..n {
                    let v = if i == j { 1.0 } else { f64::from(values[i * n + j]) };
                    m[[i, j]] = v;
                    m[[j, i]] = v;
                }
            }
            m
        })
    })
}

fn upper_triangle(m: &Array2<f64>) -> Array2<f64> {
    let mut upper = m.clone();
    for ((row, col), value) in upper.indexed_iter_mut() {
        if row > col {
            *value = 0.0;
        }
    }
    upper
}

fn naive_pow(m: &Array2<f64>, n: u32) -> Array2<f64> {
    let mut result = Array2::<f64>::eye(m.nrows());
    for _ in 0..n {
        result = result.dot(m);
    }
    result
}

fn close_or_both_nan(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b || (a - b).abs() < 1e-9
}

mod power_props {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn zeroth_power_is_identity(m in arb_square(6)) {
            let n = m.nrows();
            let dense = mat_pow(&MatrixInput::dense(m.clone()), 0).unwrap();
            prop_assert_eq!(dense, Array2::<f64>::eye(n));

            let sparse = MatrixInput::from_tagged("dgCMatrix", sparse_from_dense(m.view())).unwrap();
            prop_assert_eq!(mat_pow(&sparse, 0).unwrap(), Array2::<f64>::eye(n));
        }

        #[test]
        fn first_power_is_input(m in arb_square(6)) {
            let got = mat_pow(&MatrixInput::dense(m.clone()), 1).unwrap();
            prop_assert_eq!(got, m);
        }

        #[test]
        fn matches_repeated_multiplication(m in arb_square(4), n in 1u32..8) {
            let expected = naive_pow(&m, n);
            let got = mat_pow(&MatrixInput::dense(m.clone()), i64::from(n)).unwrap();
            prop_assert_eq!(got, expected, "n={}", n);
        }

        #[test]
        fn dense_and_sparse_agree(m in arb_square(5), n in 0i64..7) {
            let dense = mat_pow(&MatrixInput::dense(m.clone()), n).unwrap();
            let sparse_input = MatrixInput::from_tagged("dgCMatrix", sparse_from_dense(m.view())).unwrap();
            let sparse = mat_pow(&sparse_input, n).unwrap();
            prop_assert_eq!(dense, sparse);
        }

        #[test]
        fn negative_exponent_rejected(m in arb_square(3), n in i64::MIN..0) {
            let err = mat_pow(&MatrixInput::dense(m), n).unwrap_err();
            prop_assert_eq!(err, Error::NegativeExponent(n));
        }
    }
}

mod dissimilarity_props {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn symmetric_with_zero_diagonal(m in arb_connected_symmetric(6)) {
            let d = graph_diss(&MatrixInput::dense(m.clone())).unwrap();
            let n = m.nrows();
            for i in 0..n {
                prop_assert!(d[[i, i]].abs() < 1e-12, "D[{},{}] = {}", i, i, d[[i, i]]);
                for j in 0..n {
                    prop_assert!((d[[i, j]] - d[[j, i]]).abs() < 1e-12);
                }
            }
        }

        #[test]
        fn bounded_for_non_negative_graphs(m in arb_connected_symmetric(6)) {
            // Cosine of non-negative vectors lies in [0, 1].
            let d = graph_diss(&MatrixInput::dense(m)).unwrap();
            for &x in &d {
                prop_assert!((-1e-12..=1.0 + 1e-12).contains(&x), "entry {} out of range", x);
            }
        }

        #[test]
        fn dense_and_sparse_agree(m in arb_square(5)) {
            let dense = graph_diss(&MatrixInput::dense(m.clone())).unwrap();
            let sparse_input = MatrixInput::from_tagged("dgCMatrix", sparse_from_dense(m.view())).unwrap();
            let sparse = graph_diss(&sparse_input).unwrap();
            for (a, b) in dense.iter().zip(sparse.iter()) {
                prop_assert!(close_or_both_nan(*a, *b), "dense {} vs sparse {}", a, b);
            }
        }

        #[test]
        fn symmetric_storage_matches_full(m in arb_connected_symmetric(6)) {
            let full = graph_diss(&MatrixInput::dense(m.clone())).unwrap();
            let upper = sparse_from_dense(upper_triangle(&m).view());
            let sym = graph_diss(&MatrixInput::from_tagged("dsCMatrix", upper).unwrap()).unwrap();
            for (a, b) in full.iter().zip(sym.iter()) {
                prop_assert!(close_or_both_nan(*a, *b), "full {} vs symmetric {}", a, b);
            }
        }
    }
}

mod dispatch_props {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn unknown_tags_rejected(tag in "[a-z]{2}[A-Z][A-Za-z]{0,8}") {
            let known = ["dsCMatrix", "lsCMatrix", "dgCMatrix", "lgCMatrix"];
            prop_assume!(!known.contains(&tag.as_str()));

            let m = sparse_from_dense(Array2::<f64>::eye(2).view());
            let err = MatrixInput::from_tagged(&tag, m).unwrap_err();
            prop_assert_eq!(err, Error::UnsupportedType(tag));
        }
    }
}
