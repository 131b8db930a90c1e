//! Precision contexts for decimal arithmetic.
//!
//! Every statistic in this crate is computed under a [`DecimalContext`]: a
//! number of significant digits plus a rounding mode, applied to the result
//! of every arithmetic step. Intermediate results are never carried at a
//! higher precision than the caller asked for, so two runs with the same
//! context produce bit-identical results, and two implementations applying
//! the same rounding order agree exactly.
//!
//! Addition, subtraction, and multiplication are exact in the underlying
//! decimal library, so rounding the exact result gives a single correctly
//! rounded step. Division and square root cannot be exact in general;
//! [`DecimalContext::div`] long-divides the decimal coefficients with guard
//! digits and a sticky marker before rounding once, and
//! [`DecimalContext::sqrt`] runs Newton's iteration at guard precision.

use std::num::NonZeroU64;

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{FromPrimitive, One, Signed, ToPrimitive, Zero};

use crate::error::{StatsError, StatsResult};

/// Extra digits carried through the Newton iteration before the final
/// rounding back to the caller's precision.
const SQRT_GUARD_DIGITS: u64 = 6;

/// A precision/rounding configuration for decimal arithmetic.
///
/// A context is immutable and `Copy`; calculators capture one at
/// construction time and apply it uniformly to every operation. Sharing a
/// context across threads is safe: it is plain read-only data.
///
/// # Examples
///
/// ```
/// use bigstat::{BigDecimal, DecimalContext, RoundingMode};
/// use std::str::FromStr;
///
/// let ctx = DecimalContext::new(10, RoundingMode::HalfUp).unwrap();
/// let one = BigDecimal::from(1);
/// let three = BigDecimal::from(3);
///
/// let third = ctx.div(&one, &three).unwrap();
/// assert_eq!(third, BigDecimal::from_str("0.3333333333").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalContext {
    precision: NonZeroU64,
    rounding: RoundingMode,
}

impl DecimalContext {
    /// Create a context with the given number of significant digits and
    /// rounding mode.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidPrecision`] if `precision` is zero.
    pub fn new(precision: u64, rounding: RoundingMode) -> StatsResult<Self> {
        let precision = NonZeroU64::new(precision).ok_or(StatsError::InvalidPrecision)?;
        Ok(Self {
            precision,
            rounding,
        })
    }

    /// Get the number of significant digits.
    pub fn precision(&self) -> u64 {
        self.precision.get()
    }

    /// Get the rounding mode.
    pub fn rounding_mode(&self) -> RoundingMode {
        self.rounding
    }

    /// Round a value to this context's precision.
    pub fn round(&self, value: BigDecimal) -> BigDecimal {
        value.with_precision_round(self.precision, self.rounding)
    }

    /// Add two values, rounding the result.
    pub fn add(&self, lhs: &BigDecimal, rhs: &BigDecimal) -> BigDecimal {
        self.round(lhs + rhs)
    }

    /// Subtract `rhs` from `lhs`, rounding the result.
    pub fn sub(&self, lhs: &BigDecimal, rhs: &BigDecimal) -> BigDecimal {
        self.round(lhs - rhs)
    }

    /// Multiply two values, rounding the result.
    pub fn mul(&self, lhs: &BigDecimal, rhs: &BigDecimal) -> BigDecimal {
        self.round(lhs * rhs)
    }

    /// Divide `numerator` by `denominator`, correctly rounded to this
    /// context's precision under its rounding mode.
    ///
    /// The quotient is produced by integer long division of the decimal
    /// coefficients, scaled so at least two digits beyond the requested
    /// precision are available. A non-zero remainder is folded into the
    /// lowest guard digit, so half-way and exactness decisions made by the
    /// final rounding see the true quotient's tail.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::DivisionByZero`] if `denominator` is zero.
    pub fn div(&self, numerator: &BigDecimal, denominator: &BigDecimal) -> StatsResult<BigDecimal> {
        if denominator.is_zero() {
            return Err(StatsError::DivisionByZero);
        }
        if numerator.is_zero() {
            return Ok(BigDecimal::zero());
        }

        let digits_n = numerator.digits() as i64;
        let digits_d = denominator.digits() as i64;
        let (int_n, scale_n) = numerator.as_bigint_and_exponent();
        let (int_d, scale_d) = denominator.as_bigint_and_exponent();
        let (sign_n, mag_n) = int_n.into_parts();
        let (sign_d, mag_d) = int_d.into_parts();

        // Scale the coefficients so the integer quotient carries the
        // requested precision plus two guard digits.
        let shift = self.precision.get() as i64 + 2 - (digits_n - digits_d);
        let ten = BigUint::from(10u32);
        let (scaled_n, scaled_d) = if shift >= 0 {
            (mag_n * ten.pow(shift as u32), mag_d)
        } else {
            (mag_n, mag_d * ten.pow((-shift) as u32))
        };

        let (mut quotient, remainder) = scaled_n.div_rem(&scaled_d);
        if !remainder.is_zero() {
            // Sticky digit: an inexact quotient must not look exact (or
            // exactly half-way) to the rounding step below.
            let (_, last) = quotient.div_rem(&ten);
            if last.is_zero() {
                quotient += 1u32;
            }
        }

        let sign = if sign_n == sign_d {
            Sign::Plus
        } else {
            Sign::Minus
        };
        let raw = BigDecimal::new(
            BigInt::from_biguint(sign, quotient),
            scale_n - scale_d + shift,
        );
        Ok(self.round(raw))
    }

    /// Square root, correctly rounded to this context's precision.
    ///
    /// Newton's iteration `x ← (x + value/x) / 2` runs at this context's
    /// precision plus six half-even guard digits, seeded
    /// from the `f64` approximation (or a scale-halved power of ten when
    /// the value is outside `f64` range), until it reaches a fixed point.
    /// The converged value is then rounded once under this context.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::NegativeSquareRoot`] if `value` is negative.
    pub fn sqrt(&self, value: &BigDecimal) -> StatsResult<BigDecimal> {
        if value.is_negative() {
            return Err(StatsError::NegativeSquareRoot);
        }
        if value.is_zero() {
            return Ok(BigDecimal::zero());
        }

        let guard = Self {
            precision: self
                .precision
                .checked_add(SQRT_GUARD_DIGITS)
                .unwrap_or(self.precision),
            rounding: RoundingMode::HalfEven,
        };

        let two = BigDecimal::from(2);
        let mut x = initial_sqrt_guess(value);
        for _ in 0..64 {
            let quotient = guard.div(value, &x)?;
            let next = guard.div(&guard.add(&x, &quotient), &two)?;
            if next == x {
                break;
            }
            x = next;
        }
        Ok(self.round(x))
    }
}

/// Starting point for the square-root iteration: the `f64` square root
/// when the value fits, otherwise a power of ten with half the exponent.
fn initial_sqrt_guess(value: &BigDecimal) -> BigDecimal {
    let seed = value
        .to_f64()
        .filter(|approx| approx.is_finite() && *approx > 0.0)
        .and_then(|approx| BigDecimal::from_f64(approx.sqrt()))
        .filter(|guess| !guess.is_zero());
    match seed {
        Some(guess) => guess,
        None => {
            let digits = value.digits() as i64;
            let (_, exponent) = value.as_bigint_and_exponent();
            BigDecimal::new(BigInt::one(), (exponent + 1 - digits) / 2)
        }
    }
}
