use crate::quantity::{ArithmeticError, Quantity};
use lazy_static::lazy_static;
use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive};
use regex::{Captures, Regex};
use serde::Serialize;
use std::fmt;

/// Largest denominator used when reconstructing a decimal as a fraction
pub const MAX_DECIMAL_DENOMINATOR: u64 = 1_000_000;

lazy_static! {
    /// Whole part (integer or decimal), one space, then a fraction: "144 1/2", "144.0 1/2"
    static ref MIXED_PATTERN: Regex =
        Regex::new(r"^([0-9]+(?:\.[0-9]+)?) ([0-9]+)/([0-9]+)$").unwrap();

    /// Simple or improper fraction: "1/2", "289/2"
    static ref FRACTION_PATTERN: Regex = Regex::new(r"^([0-9]+)/([0-9]+)$").unwrap();

    /// Integer or decimal: "144", "144.25"
    static ref DECIMAL_PATTERN: Regex = Regex::new(r"^([0-9]+(?:\.[0-9]+)?)$").unwrap();
}

/// One of the accepted input shapes.
///
/// Rules are tried in the order of [`GrammarRule::ALL`] and the first match
/// wins. Rules only ever see whitespace-normalized text, and under that
/// normalization the three patterns never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammarRule {
    Mixed,
    Fraction,
    Decimal,
}

impl GrammarRule {
    pub const ALL: [GrammarRule; 3] = [
        GrammarRule::Mixed,
        GrammarRule::Fraction,
        GrammarRule::Decimal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GrammarRule::Mixed => "mixed",
            GrammarRule::Fraction => "fraction",
            GrammarRule::Decimal => "decimal",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            GrammarRule::Mixed => &MIXED_PATTERN,
            GrammarRule::Fraction => &FRACTION_PATTERN,
            GrammarRule::Decimal => &DECIMAL_PATTERN,
        }
    }

    /// Returns `None` when the text is not in this rule's shape, otherwise the
    /// evaluated quantity (which can still fail on a zero denominator).
    pub fn apply(self, text: &str) -> Option<Result<Quantity, ArithmeticError>> {
        let caps = self.pattern().captures(text)?;
        match self {
            GrammarRule::Mixed => evaluate_mixed(&caps),
            GrammarRule::Fraction => evaluate_fraction(&caps),
            GrammarRule::Decimal => evaluate_decimal(&caps),
        }
    }
}

impl fmt::Display for GrammarRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn integer(digits: &str) -> Option<BigInt> {
    BigInt::parse_bytes(digits.as_bytes(), 10)
}

fn evaluate_mixed(caps: &Captures) -> Option<Result<Quantity, ArithmeticError>> {
    let whole: f64 = caps[1].parse().ok()?;
    let numerator = integer(&caps[2])?;
    let denominator = integer(&caps[3])?;
    Some(mixed_number(whole, numerator, denominator))
}

fn evaluate_fraction(caps: &Captures) -> Option<Result<Quantity, ArithmeticError>> {
    let numerator = integer(&caps[1])?;
    let denominator = integer(&caps[2])?;
    Some(Quantity::new(numerator, denominator))
}

fn evaluate_decimal(caps: &Captures) -> Option<Result<Quantity, ArithmeticError>> {
    let value: f64 = caps[1].parse().ok()?;
    Some(decimal(value))
}

/// `(trunc(whole * denominator) + numerator) / denominator`.
///
/// The whole part is scaled in floating point and truncated before the
/// numerator is added, so "144.5 1/3" is 434/3 rather than the exact sum.
pub fn mixed_number(
    whole: f64,
    numerator: BigInt,
    denominator: BigInt,
) -> Result<Quantity, ArithmeticError> {
    let scale = denominator
        .to_f64()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ArithmeticError::Overflow(denominator.to_string()))?;
    let scaled = whole * scale;
    let truncated = BigInt::from_f64(scaled.trunc())
        .filter(|_| scaled.is_finite())
        .ok_or_else(|| ArithmeticError::Overflow(format!("{} * {}", whole, denominator)))?;
    Quantity::new(truncated + numerator, denominator)
}

/// Best rational reconstruction of a decimal, capped at [`MAX_DECIMAL_DENOMINATOR`]
pub fn decimal(value: f64) -> Result<Quantity, ArithmeticError> {
    Ok(Quantity::from_f64(value)?.limit_denominator(MAX_DECIMAL_DENOMINATOR))
}
