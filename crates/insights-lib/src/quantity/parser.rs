//! Quantity string parsing and numeric encoding
//!
//! A quantity string is `[sign]digits[.digits][suffix]`, where the suffix
//! region may also carry a signed scientific exponent tail. Parsing
//! tokenizes the string, resolves the suffix, then encodes the digit runs
//! into a `(value, scale)` pair under an explicit precision budget before
//! combining them into the final `f64`.

use super::suffix::{resolve_suffix, SuffixKind, SuffixScale};
use super::QuantityError;

/// Decimal digit budget shared by both suffix families.
const DIGIT_BUDGET: i32 = 18;

/// Integer digit count beyond which a decimal result leaves the f64
/// safe-integer range (2^53 is just above 9e15; 14 digits are kept as the
/// conservative ceiling).
const MAX_INTEGER_DIGITS: i32 = 14;

/// Smallest supported decimal scale. Values needing a finer scale are
/// rejected rather than computed.
const NANO_FLOOR: i32 = -9;

/// Tokenized view of one quantity string. Borrowed slices are digit-only
/// except `suffix`, which is the raw trailing region.
struct Tokens<'a> {
    positive: bool,
    integer: &'a str,
    fraction: &'a str,
    suffix: &'a str,
}

/// Decoded mantissa and base-10 exponent, prior to final combination.
struct Encoded {
    value: f64,
    scale: i32,
}

/// Decode a quantity string into an `f64`.
///
/// # Examples
///
/// ```
/// use insights_lib::quantity::parse_quantity;
///
/// assert_eq!(parse_quantity("500m").unwrap(), 0.5);
/// assert_eq!(parse_quantity("2Gi").unwrap(), 2147483648.0);
/// assert!(parse_quantity("10e3").is_err());
/// ```
pub fn parse_quantity(input: &str) -> Result<f64, QuantityError> {
    if input.is_empty() {
        return Err(QuantityError::EmptyInput);
    }
    // Answer the single "0" up front; the zero-skip pass below would reduce
    // it to an empty digit string.
    if input == "0" {
        return Ok(0.0);
    }

    let tokens = match tokenize(input)? {
        Some(tokens) => tokens,
        // all-zero digit strings are exactly zero, whatever the suffix
        None => return Ok(0.0),
    };

    let scale = resolve_suffix(tokens.suffix)?;
    let encoded = encode(&tokens, &scale)?;

    Ok(10f64.powi(encoded.scale) * encoded.value)
}

/// Split the input into sign, integer digits, fraction digits, and the raw
/// suffix region. Returns `Ok(None)` when the digits reduce to nothing but
/// zeros.
fn tokenize(input: &str) -> Result<Option<Tokens<'_>>, QuantityError> {
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut pos = 0;

    let positive = match bytes[0] {
        b'+' => {
            pos = 1;
            true
        }
        b'-' => {
            pos = 1;
            false
        }
        _ => true,
    };

    // Leading zeros carry no information.
    while pos < len && bytes[pos] == b'0' {
        pos += 1;
    }
    if pos == len {
        return Ok(None);
    }

    let integer_start = pos;
    while pos < len && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let integer = if pos == integer_start {
        "0"
    } else {
        &input[integer_start..pos]
    };

    let mut fraction = "";
    if pos < len && bytes[pos] == b'.' {
        pos += 1;
        let fraction_start = pos;
        while pos < len && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        fraction = &input[fraction_start..pos];
    }

    let suffix = if pos < len {
        let suffix_start = pos;
        let run_start = pos;
        while pos < len && is_suffix_byte(bytes[pos]) {
            pos += 1;
        }
        if pos == run_start {
            return Err(QuantityError::UnexpectedCharacter { position: pos });
        }
        // Optional signed exponent digit run after the suffix characters.
        if pos < len && (bytes[pos] == b'+' || bytes[pos] == b'-') {
            pos += 1;
            let digits_start = pos;
            while pos < len && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            if pos == digits_start {
                return Err(QuantityError::UnexpectedCharacter { position: pos });
            }
        } else {
            while pos < len && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
        }
        if pos != len {
            return Err(QuantityError::UnexpectedCharacter { position: pos });
        }
        &input[suffix_start..]
    } else {
        ""
    };

    Ok(Some(Tokens {
        positive,
        integer,
        fraction,
        suffix,
    }))
}

/// Characters that may open a suffix region.
fn is_suffix_byte(byte: u8) -> bool {
    matches!(
        byte,
        b'e' | b'E' | b'i' | b'n' | b'c' | b'u' | b'm' | b'k' | b'K' | b'M' | b'G' | b'T' | b'P'
    )
}

/// Encode digit runs and suffix scale into a `(value, scale)` pair,
/// enforcing the precision budget.
fn encode(tokens: &Tokens<'_>, suffix: &SuffixScale) -> Result<Encoded, QuantityError> {
    let integer_len = tokens.integer.len() as i32;
    let fraction_len = tokens.fraction.len() as i32;
    // The tokenizer strips leading zeros, so an all-zero integer part is
    // exactly the string "0".
    let zero_integer = tokens.integer == "0";

    let (mantissa, mut scale, precision) = match suffix.kind {
        SuffixKind::DecimalSi | SuffixKind::DecimalExponent => {
            let mut precision = DIGIT_BUDGET - (integer_len + fraction_len);
            let significant = if zero_integer { 0 } else { integer_len };
            if suffix.exponent + significant > MAX_INTEGER_DIGITS {
                precision = -1;
            }
            (1.0, suffix.exponent, precision)
        }
        SuffixKind::BinarySi => {
            // Approximate decimal-digit cost of the binary multiplier:
            // each power of two is worth ~3/10 of a decimal digit.
            let mut precision = DIGIT_BUDGET - integer_len - suffix.exponent * 3 / 10 - 2;
            if zero_integer {
                precision += 1;
            }
            if precision == 0 {
                return Err(QuantityError::Overflow);
            }
            (2f64.powi(suffix.exponent), 0, precision)
        }
    };

    if precision < 0 {
        return Err(QuantityError::Overflow);
    }

    scale -= fraction_len;
    if scale < NANO_FLOOR {
        return Err(QuantityError::Underflow);
    }

    let digits = format!("{}{}", tokens.integer, tokens.fraction);
    let magnitude: f64 = digits.parse().unwrap_or(0.0);
    let value = if tokens.positive {
        magnitude * mantissa
    } else {
        -magnitude * mantissa
    };

    Ok(Encoded { value, scale })
}
