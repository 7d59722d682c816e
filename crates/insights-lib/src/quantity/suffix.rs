//! Suffix table for Kubernetes resource quantities
//!
//! Maps the magnitude suffixes of the quantity grammar to a `(base,
//! exponent)` pair and a suffix-family tag. The table is fixed; resolution
//! is a pure function over it.

use super::QuantityError;

/// Family a quantity suffix belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixKind {
    /// Power-of-two suffixes: `Ki`, `Mi`, `Gi`, `Ti`, `Pi`, `Ei`.
    BinarySi,
    /// Power-of-ten suffixes: `n`, `u`, `m`, `c`, `k`, `M`, `G`, `T`, `P`, `W`.
    DecimalSi,
    /// Raw scientific notation (`12e3`). Recognized as a family but not
    /// decoded; resolution reports it as unsupported.
    DecimalExponent,
}

/// Scale metadata for one suffix: the value multiplier is `base^exponent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixScale {
    pub base: u32,
    pub exponent: i32,
    pub kind: SuffixKind,
}

/// Resolve a suffix string against the fixed table.
///
/// The empty suffix resolves to the decimal identity scale. Anything not in
/// the table, including scientific-notation tails, is an error.
pub fn resolve_suffix(suffix: &str) -> Result<SuffixScale, QuantityError> {
    let (base, exponent, kind) = match suffix {
        "" => (10, 0, SuffixKind::DecimalSi),
        "Ki" => (2, 10, SuffixKind::BinarySi),
        "Mi" => (2, 20, SuffixKind::BinarySi),
        "Gi" => (2, 30, SuffixKind::BinarySi),
        "Ti" => (2, 40, SuffixKind::BinarySi),
        "Pi" => (2, 50, SuffixKind::BinarySi),
        "Ei" => (2, 60, SuffixKind::BinarySi),
        "n" => (10, -9, SuffixKind::DecimalSi),
        "u" => (10, -6, SuffixKind::DecimalSi),
        "m" => (10, -3, SuffixKind::DecimalSi),
        "c" => (10, 0, SuffixKind::DecimalSi),
        "k" => (10, 3, SuffixKind::DecimalSi),
        "M" => (10, 6, SuffixKind::DecimalSi),
        "G" => (10, 9, SuffixKind::DecimalSi),
        "T" => (10, 12, SuffixKind::DecimalSi),
        "P" => (10, 15, SuffixKind::DecimalSi),
        "W" => (10, 18, SuffixKind::DecimalSi),
        _ => return Err(QuantityError::UnsupportedSuffix(suffix.to_string())),
    };

    Ok(SuffixScale {
        base,
        exponent,
        kind,
    })
}
