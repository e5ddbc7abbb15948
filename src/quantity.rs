use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Div;
use thiserror::Error;

/// Failure while building or approximating an exact quantity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("Cannot divide by zero: {0}/0")]
    DivisionByZero(BigInt),
    #[error("Value is too large to convert: {0}")]
    Overflow(String),
}

/// An exact, non-floating area value.
///
/// Always stored in lowest terms with a positive denominator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(BigRational);

impl Quantity {
    /// Build `numerator / denominator`, rejecting a zero denominator
    pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Self, ArithmeticError> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero(numerator));
        }
        Ok(Self(BigRational::new(numerator, denominator)))
    }

    pub fn from_integer(value: BigInt) -> Self {
        Self(BigRational::from_integer(value))
    }

    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    /// Exact rational value of a finite float (every f64 is a dyadic rational)
    pub fn from_f64(value: f64) -> Result<Self, ArithmeticError> {
        BigRational::from_float(value)
            .map(Self)
            .ok_or_else(|| ArithmeticError::Overflow(value.to_string()))
    }

    /// Closest rational whose denominator does not exceed `max_denominator`.
    ///
    /// Walks the continued-fraction convergents of the value, then picks
    /// between the last convergent and the best semiconvergent below the
    /// bound. Ties go to the convergent. A bound of zero is treated as one.
    pub fn limit_denominator(&self, max_denominator: u64) -> Self {
        let max_denominator = BigInt::from(max_denominator.max(1));
        if *self.0.denom() <= max_denominator {
            return self.clone();
        }

        let (mut p0, mut q0) = (BigInt::zero(), BigInt::one());
        let (mut p1, mut q1) = (BigInt::one(), BigInt::zero());
        let mut n = self.0.numer().clone();
        let mut d = self.0.denom().clone();

        loop {
            let a = n.div_floor(&d);
            let q2 = &q0 + &a * &q1;
            if q2 > max_denominator {
                break;
            }
            let p2 = &p0 + &a * &p1;
            p0 = std::mem::replace(&mut p1, p2);
            q0 = std::mem::replace(&mut q1, q2);
            let remainder = &n - &a * &d;
            n = std::mem::replace(&mut d, remainder);
        }

        let k = (&max_denominator - &q0).div_floor(&q1);
        let semiconvergent = BigRational::new(&p0 + &k * &p1, &q0 + &k * &q1);
        let convergent = BigRational::new(p1, q1);

        if (&convergent - &self.0).abs() <= (&semiconvergent - &self.0).abs() {
            Self(convergent)
        } else {
            Self(semiconvergent)
        }
    }

    pub fn numerator(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denominator(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Nearest float, or `None` when the value is outside the f64 range
    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64().filter(|value| value.is_finite())
    }
}

impl From<BigRational> for Quantity {
    fn from(value: BigRational) -> Self {
        Self(value)
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self::from_integer(BigInt::from(value))
    }
}

impl Div<u32> for &Quantity {
    type Output = Quantity;

    fn div(self, rhs: u32) -> Quantity {
        Quantity(&self.0 / BigRational::from_integer(BigInt::from(rhs)))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.denom().is_one() {
            write!(f, "{}", self.0.numer())
        } else {
            write!(f, "{}/{}", self.0.numer(), self.0.denom())
        }
    }
}

// Integers go out as strings so arbitrary precision survives JSON
impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("numerator", &self.0.numer().to_string())?;
        state.serialize_field("denominator", &self.0.denom().to_string())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> Quantity {
        Quantity::new(BigInt::from(n), BigInt::from(d)).unwrap()
    }

    #[test]
    fn test_new_reduces_and_normalizes_sign() {
        let value = q(578, 4);
        assert_eq!(value.numerator(), &BigInt::from(289));
        assert_eq!(value.denominator(), &BigInt::from(2));

        let value = q(3, -6);
        assert_eq!(value.numerator(), &BigInt::from(-1));
        assert_eq!(value.denominator(), &BigInt::from(2));
        assert!(value.is_negative());
    }

    #[test]
    fn test_zero_denominator_is_an_error() {
        let result = Quantity::new(BigInt::from(7), BigInt::zero());
        assert_eq!(result, Err(ArithmeticError::DivisionByZero(BigInt::from(7))));
    }

    #[test]
    fn test_from_f64_is_exact() {
        assert_eq!(Quantity::from_f64(144.5).unwrap(), q(289, 2));
        // 0.1 is not representable, so the exact value has a power-of-two denominator
        let tenth = Quantity::from_f64(0.1).unwrap();
        assert_ne!(tenth, q(1, 10));
        assert!(tenth.denominator() > &BigInt::from(1_000_000));
    }

    #[test]
    fn test_from_f64_rejects_non_finite() {
        assert!(matches!(
            Quantity::from_f64(f64::INFINITY),
            Err(ArithmeticError::Overflow(_))
        ));
        assert!(Quantity::from_f64(f64::NAN).is_err());
    }

    #[test]
    fn test_limit_denominator() {
        let tenth = Quantity::from_f64(0.1).unwrap();
        assert_eq!(tenth.limit_denominator(1_000_000), q(1, 10));

        let pi = Quantity::from_f64(3.14159265358979).unwrap();
        assert_eq!(pi.limit_denominator(1_000_000), q(3126535, 995207));

        let tiny = Quantity::from_f64(0.0000001).unwrap();
        assert_eq!(tiny.limit_denominator(1_000_000), Quantity::zero());

        // already within the bound
        assert_eq!(q(577, 4).limit_denominator(1_000_000), q(577, 4));
        assert_eq!(q(1, 3).limit_denominator(0), Quantity::zero());
    }

    #[test]
    fn test_division_stays_exact() {
        let feet = &q(289, 2) / 144;
        assert_eq!(feet, q(289, 288));
        assert!(!feet.is_integer());
        assert!((&Quantity::from(288u64) / 144).is_integer());
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(q(289, 2).to_f64(), Some(144.5));
        let huge = Quantity::from_integer(BigInt::from(10).pow(400));
        assert_eq!(huge.to_f64(), None);
    }

    #[test]
    fn test_display_and_serialize() {
        assert_eq!(q(144, 1).to_string(), "144");
        assert_eq!(q(289, 2).to_string(), "289/2");

        let json = serde_json::to_value(q(289, 2)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"numerator": "289", "denominator": "2"})
        );
    }
}
