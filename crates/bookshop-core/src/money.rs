//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A cart summing dozens of `price * quantity` terms in floats drifts.   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Halalas (smallest SAR unit)                      │
//! │    45.00 SAR = 4500 halalas, 30.50 SAR = 3050 halalas                  │
//! │    2×4500 + 1×3050 = 12050 halalas = 120.50 SAR, exactly               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! The catalog API reports prices as decimal numbers (`"price": 45.5`).
//! Fields carrying that representation use the [`as_decimal`] serde codec,
//! which rounds to the nearest halala on the way in.
//!
//! ## Usage
//! ```rust
//! use bookshop_core::money::Money;
//!
//! // Create from halalas (preferred)
//! let price = Money::from_halalas(4500); // 45.00 SAR
//!
//! // Arithmetic operations
//! let doubled = price * 2;                          // 90.00 SAR
//! let total = doubled + Money::from_halalas(3050);  // 120.50 SAR
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (halalas for SAR).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and corrections
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support (serialized as integer halalas)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from halalas (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use bookshop_core::money::Money;
    ///
    /// let price = Money::from_halalas(4550); // 45.50 SAR
    /// assert_eq!(price.halalas(), 4550);
    /// ```
    #[inline]
    pub const fn from_halalas(halalas: i64) -> Self {
        Money(halalas)
    }

    /// Creates a Money value from major and minor units (riyals and halalas).
    ///
    /// ## Example
    /// ```rust
    /// use bookshop_core::money::Money;
    ///
    /// let price = Money::from_major_minor(45, 50); // 45.50 SAR
    /// assert_eq!(price.halalas(), 4550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -5.50 SAR, not -4.50 SAR.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in halalas (smallest currency unit).
    #[inline]
    pub const fn halalas(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (riyals) portion.
    #[inline]
    pub const fn riyals(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (halalas) portion (always 0-99).
    #[inline]
    pub const fn halalas_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use bookshop_core::money::Money;
    ///
    /// let unit_price = Money::from_halalas(4500); // 45.00 SAR
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.halalas(), 9000); // 90.00 SAR
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Returns the value as a decimal number of riyals (for wire encoding only).
    ///
    /// Display and arithmetic must never go through this; it exists so
    /// [`as_decimal`] can speak the catalog API's `"price": 45.5` format.
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Builds a Money value from a decimal number of riyals, rounding to the
    /// nearest halala.
    #[inline]
    pub fn from_decimal(value: f64) -> Self {
        Money((value * 100.0).round() as i64)
    }
}

// =============================================================================
// Wire Codec
// =============================================================================

/// Serde field codec for prices the API reports as decimal numbers.
///
/// ## Usage
/// ```rust,ignore
/// #[derive(Serialize, Deserialize)]
/// struct Book {
///     #[serde(with = "money::as_decimal")]
///     price: Money,
/// }
/// ```
pub mod as_decimal {
    use super::Money;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Ok(Money::from_decimal(value))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. The storefront formats prices for
/// display (locale, currency symbol placement) on its own.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02} SAR",
            sign,
            self.riyals().abs(),
            self.halalas_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over line totals.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_halalas() {
        let money = Money::from_halalas(4550);
        assert_eq!(money.halalas(), 4550);
        assert_eq!(money.riyals(), 45);
        assert_eq!(money.halalas_part(), 50);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(45, 50);
        assert_eq!(money.halalas(), 4550);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.halalas(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_halalas(4550)), "45.50 SAR");
        assert_eq!(format!("{}", Money::from_halalas(500)), "5.00 SAR");
        assert_eq!(format!("{}", Money::from_halalas(-550)), "-5.50 SAR");
        assert_eq!(format!("{}", Money::from_halalas(0)), "0.00 SAR");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_halalas(1000);
        let b = Money::from_halalas(500);

        assert_eq!((a + b).halalas(), 1500);
        assert_eq!((a - b).halalas(), 500);
        assert_eq!((a * 3).halalas(), 3000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_halalas(4500);
        let line_total = unit_price.multiply_quantity(2);
        assert_eq!(line_total.halalas(), 9000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [
            Money::from_halalas(4500).multiply_quantity(2),
            Money::from_halalas(3050),
        ]
        .into_iter()
        .sum();
        assert_eq!(total.halalas(), 12050); // 120.50 SAR, exact
    }

    #[test]
    fn test_decimal_round_trip() {
        // API reports 45.5 — must land on 4550 halalas, not 4549
        let money = Money::from_decimal(45.5);
        assert_eq!(money.halalas(), 4550);
        assert_eq!(money.to_decimal(), 45.5);

        // Classic float trap: 0.1 + 0.2 as reported decimals
        assert_eq!(Money::from_decimal(0.1 + 0.2).halalas(), 30);
    }

    #[test]
    fn test_decimal_codec_in_struct() {
        use serde::{Deserialize, Serialize};

        #[derive(Serialize, Deserialize)]
        struct Priced {
            #[serde(with = "super::as_decimal")]
            price: Money,
        }

        let priced: Priced = serde_json::from_str(r#"{"price": 30.5}"#).unwrap();
        assert_eq!(priced.price.halalas(), 3050);

        let encoded = serde_json::to_string(&priced).unwrap();
        assert_eq!(encoded, r#"{"price":30.5}"#);
    }
}
