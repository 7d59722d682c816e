//! Kubernetes resource quantity decoding
//!
//! This module decodes Kubernetes "resource quantity" strings such as
//! `1900m`, `2Gi`, or `0.9Pi` into plain `f64` values. Decoding is
//! deliberately lossy at the extremes: magnitudes that would need more
//! significant decimal digits than an `f64` can hold exactly are rejected,
//! and anything finer than nano (10^-9) resolution is rejected. Callers
//! that prefer degradation over failure wrap [`parse_quantity`] the way
//! [`crate::aggregation::ClusterAggregator::parse_cpu`] does.

mod parser;
mod suffix;

pub use parser::parse_quantity;
pub use suffix::{resolve_suffix, SuffixKind, SuffixScale};

use thiserror::Error;

/// Failures produced while decoding a quantity string.
///
/// Expected out-of-envelope magnitudes are reported as [`Overflow`] and
/// [`Underflow`] variants rather than sentinel values, so callers choose
/// between failing fast and degrading to zero.
///
/// [`Overflow`]: QuantityError::Overflow
/// [`Underflow`]: QuantityError::Underflow
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// The input string had no content to parse.
    #[error("quantity string is empty")]
    EmptyInput,

    /// The suffix region did not match any supported suffix. Scientific
    /// notation (`10e3`) lands here: it is a known gap, not silently
    /// misread.
    #[error("quantity suffix {0:?} is not supported")]
    UnsupportedSuffix(String),

    /// A character that can start neither a digit run nor a suffix.
    #[error("unexpected character at byte {position} of quantity string")]
    UnexpectedCharacter { position: usize },

    /// The magnitude needs more significant decimal digits than the
    /// supported precision envelope allows.
    #[error("quantity magnitude exceeds the supported decimal precision")]
    Overflow,

    /// The magnitude is finer than nano (10^-9) resolution.
    #[error("quantity magnitude is finer than nano resolution")]
    Underflow,
}
