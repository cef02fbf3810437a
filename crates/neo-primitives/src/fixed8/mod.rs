//! Fixed-point asset amounts.
//!
//! Every value on the wire is a `Fixed8`: a signed 64-bit integer counting
//! units of 10^-8, written as 8 little-endian bytes.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::PrimitivesError;

/// Number of raw units in one whole token.
pub const FIXED8_SCALE: i64 = 100_000_000;

/// Number of fractional decimal digits.
const DECIMALS: usize = 8;

/// A decimal amount with 8 fractional digits.
///
/// Arithmetic through the operator traits panics on overflow in debug builds
/// like plain integers; use `checked_add` / `checked_sub` on values that come
/// from untrusted input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed8(i64);

impl Fixed8 {
    /// The zero amount.
    pub const ZERO: Fixed8 = Fixed8(0);

    /// Wrap a raw count of 10^-8 units.
    pub const fn from_raw(raw: i64) -> Self {
        Fixed8(raw)
    }

    /// The raw count of 10^-8 units.
    pub const fn raw(&self) -> i64 {
        self.0
    }

    /// A whole number of tokens.
    pub fn from_units(units: i64) -> Option<Self> {
        units.checked_mul(FIXED8_SCALE).map(Fixed8)
    }

    /// Convert from a float, rounding to the nearest representable unit.
    ///
    /// Values outside the `i64` range saturate.
    pub fn from_f64(value: f64) -> Self {
        Fixed8((value * FIXED8_SCALE as f64).round() as i64)
    }

    /// Convert to a float.
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / FIXED8_SCALE as f64
    }

    pub fn checked_add(self, other: Fixed8) -> Option<Fixed8> {
        self.0.checked_add(other.0).map(Fixed8)
    }

    pub fn checked_sub(self, other: Fixed8) -> Option<Fixed8> {
        self.0.checked_sub(other.0).map(Fixed8)
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl Add for Fixed8 {
    type Output = Fixed8;

    fn add(self, other: Fixed8) -> Fixed8 {
        Fixed8(self.0 + other.0)
    }
}

impl Sub for Fixed8 {
    type Output = Fixed8;

    fn sub(self, other: Fixed8) -> Fixed8 {
        Fixed8(self.0 - other.0)
    }
}

impl Neg for Fixed8 {
    type Output = Fixed8;

    fn neg(self) -> Fixed8 {
        Fixed8(-self.0)
    }
}

impl Sum for Fixed8 {
    fn sum<I: Iterator<Item = Fixed8>>(iter: I) -> Fixed8 {
        iter.fold(Fixed8::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Fixed8> for Fixed8 {
    fn sum<I: Iterator<Item = &'a Fixed8>>(iter: I) -> Fixed8 {
        iter.copied().sum()
    }
}

/// Shortest exact decimal: `1`, `0.00013874`, `-2.5`.
impl fmt::Display for Fixed8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        let scale = FIXED8_SCALE as u64;
        let sign = if self.0 < 0 { "-" } else { "" };
        let whole = abs / scale;
        let frac = abs % scale;
        if frac == 0 {
            return write!(f, "{}{}", sign, whole);
        }
        let digits = format!("{:08}", frac);
        write!(f, "{}{}.{}", sign, whole, digits.trim_end_matches('0'))
    }
}

impl FromStr for Fixed8 {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PrimitivesError::InvalidAmount(s.to_string());

        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, frac) = match body.split_once('.') {
            Some((w, f)) => (w, f),
            None => (body, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if frac.len() > DECIMALS {
            return Err(PrimitivesError::InvalidAmount(format!(
                "{}: more than {} decimal places",
                s, DECIMALS
            )));
        }
        if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole_val: u128 = if whole.is_empty() { 0 } else { whole.parse().map_err(|_| invalid())? };
        let frac_val: u128 = if frac.is_empty() {
            0
        } else {
            let padded = format!("{:0<width$}", frac, width = DECIMALS);
            padded.parse().map_err(|_| invalid())?
        };

        let magnitude = whole_val
            .checked_mul(FIXED8_SCALE as u128)
            .and_then(|v| v.checked_add(frac_val))
            .ok_or_else(|| PrimitivesError::InvalidAmount(format!("{}: overflow", s)))?;
        let signed = if negative { -(magnitude as i128) } else { magnitude as i128 };
        i64::try_from(signed)
            .map(Fixed8)
            .map_err(|_| PrimitivesError::InvalidAmount(format!("{}: overflow", s)))
    }
}

impl Serialize for Fixed8 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Fixed8 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
