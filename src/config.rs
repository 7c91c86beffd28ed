//! Configuration for the matrix operations.
//!
//! Every operation has a plain entry point using `Default` settings and a
//! `*_with` variant taking one of these structs. They derive serde so they
//! can be loaded next to the rest of an application's settings.

use serde::{Deserialize, Serialize};

/// How the diagonal is treated when a single stored triangle is mirrored
/// into a full symmetric matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagonalPolicy {
    /// `M + Mᵗ - diag(M)`: each diagonal entry appears once.
    #[default]
    Once,
    /// `M + Mᵗ`: diagonal entries are counted twice.
    Doubled,
}

/// What `mat_pow` does with a negative exponent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeExponentPolicy {
    /// Fail with [`Error::NegativeExponent`](crate::Error::NegativeExponent).
    #[default]
    Reject,
    /// Return the identity, as if the loop never ran.
    Identity,
}

/// Reconstruction settings for symmetric sparse inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymmetricConfig {
    /// Diagonal handling when mirroring the stored triangle.
    pub diagonal: DiagonalPolicy,
}

/// Graph dissimilarity configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphDissConfig {
    /// Symmetric input reconstruction.
    pub symmetric: SymmetricConfig,
}

/// Matrix power configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatPowConfig {
    /// Symmetric input reconstruction.
    pub symmetric: SymmetricConfig,
    /// Handling of `n < 0`.
    pub negative_exponent: NegativeExponentPolicy,
}
