use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Float, One, Signed, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::ops;
use std::str::FromStr;

use crate::error::SubspaceError;

/// Exact rational number, always stored reduced with a positive denominator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: BigInt,
    den: BigInt,
}

impl Fraction {
    /// # Panics
    ///
    /// Panics if `den` is zero.
    pub fn new(num: BigInt, den: BigInt) -> Self {
        if den.is_zero() {
            panic!("Denominator cannot be zero");
        }

        let g = num.gcd(&den);
        let num = num / &g;
        let den = den / &g;

        if den.is_negative() {
            return Self {
                num: -num,
                den: -den,
            };
        }
        Self { num, den }
    }

    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Converts a binary float into the rational it denotes, without rounding.
    pub fn from_f64(value: f64) -> Result<Self, SubspaceError> {
        if !value.is_finite() {
            return Err(SubspaceError::invalid(format!(
                "{value} is not representable as a rational"
            )));
        }

        let (mantissa, exponent, sign) = Float::integer_decode(value);
        let mut num = BigInt::from(mantissa);
        if sign < 0 {
            num = -num;
        }

        if exponent >= 0 {
            Ok(Fraction::new(num << exponent as usize, BigInt::one()))
        } else {
            Ok(Fraction::new(num, BigInt::one() << (-exponent) as usize))
        }
    }

    fn parse_integer(s: &str) -> Result<BigInt, SubspaceError> {
        BigInt::parse_bytes(s.trim().as_bytes(), 10)
            .ok_or_else(|| SubspaceError::invalid(format!("invalid number '{s}'")))
    }

    // "12.375" -> 12375 / 1000
    fn parse_decimal(s: &str) -> Result<Self, SubspaceError> {
        let s = s.trim();
        let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));
        if frac_part.starts_with(['+', '-']) {
            return Err(SubspaceError::invalid(format!("invalid number '{s}'")));
        }
        let digits = format!("{int_part}{frac_part}");
        let num = Self::parse_integer(&digits)?;
        let den = num_traits::pow(BigInt::from(10), frac_part.len());
        Ok(Fraction::new(num, den))
    }
}

impl FromStr for Fraction {
    type Err = SubspaceError;

    /// Accepts `p`, `p/q` and decimal literals such as `-1.25`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        let num = parts.next().unwrap_or("");
        let den = parts.next();
        if parts.next().is_some() {
            return Err(SubspaceError::invalid(format!("invalid fraction '{s}'")));
        }

        match den {
            None if num.contains('.') => Self::parse_decimal(num),
            None => Ok(Fraction::from(Self::parse_integer(num)?)),
            Some(den) => {
                let den = Self::parse_integer(den)?;
                if den.is_zero() {
                    return Err(SubspaceError::invalid(format!(
                        "zero denominator in '{s}'"
                    )));
                }
                Ok(Fraction::new(Self::parse_integer(num)?, den))
            }
        }
    }
}

impl From<BigInt> for Fraction {
    fn from(num: BigInt) -> Fraction {
        Fraction {
            num,
            den: BigInt::one(),
        }
    }
}

impl From<i64> for Fraction {
    fn from(num: i64) -> Fraction {
        Fraction::from(BigInt::from(num))
    }
}

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        if self.den == rhs.den {
            return Fraction::new(self.num + rhs.num, self.den);
        }

        Fraction::new(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl ops::Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self + (-rhs)
    }
}

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -self.num,
            den: self.den,
        }
    }
}

impl ops::Div for Fraction {
    type Output = Fraction;

    /// # Panics
    ///
    /// Panics when dividing by zero.
    fn div(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.den, self.den * rhs.num)
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction::from(BigInt::one())
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction::from(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, rhs: &i64) -> bool {
        self.num == &self.den * rhs
    }
}

impl PartialOrd<Fraction> for Fraction {
    fn partial_cmp(&self, rhs: &Fraction) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for Fraction {
    fn cmp(&self, rhs: &Fraction) -> Ordering {
        let a = &self.num * &rhs.den;
        let b = &rhs.num * &self.den;
        a.cmp(&b)
    }
}

impl std::iter::Sum<Fraction> for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::zero(), |acc, f| acc + f)
    }
}

impl Serialize for Fraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Fraction, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
