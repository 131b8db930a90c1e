//! Excess kurtosis, population and sample flavors.
//!
//! The population excess kurtosis is the fourth standardized central
//! moment minus 3: `n·Σ(x − mean)⁴ / (Σ(x − mean)²)² − 3`. The sample
//! flavor multiplies it by the small-sample bias correction
//! `(n + 1)(n − 1) / ((n − 2)(n − 3))`.
//!
//! Rounding is applied at each multiplication and division, not deferred
//! to the end, so results are bit-exact with any implementation that
//! applies the same rounding order under the same context.

use bigdecimal::BigDecimal;

use crate::context::DecimalContext;
use crate::error::StatsResult;
use crate::helpers::{centered_sums, decimal_from_usize};
use crate::univariate::{ArithmeticMean, CollectionStatistic};

/// Population excess kurtosis: `n·Σ(x − mean)⁴ / (Σ(x − mean)²)² − 3`,
/// each step rounded under the context.
///
/// A constant-valued collection has a zero second moment and fails with
/// [`StatsError::DivisionByZero`](crate::StatsError::DivisionByZero);
/// there is no default substitution.
#[derive(Debug, Clone, Copy)]
pub struct PopulationKurtosis {
    ctx: DecimalContext,
}

impl PopulationKurtosis {
    pub fn new(ctx: DecimalContext) -> Self {
        Self { ctx }
    }
}

impl CollectionStatistic for PopulationKurtosis {
    fn compute(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        let mean = ArithmeticMean::new(self.ctx).compute(values)?;
        let sums = centered_sums(values, &mean, &self.ctx);
        let count = decimal_from_usize(values.len());

        let numerator = self.ctx.mul(&sums.sum4, &count);
        let denominator = self.ctx.mul(&sums.sum2, &sums.sum2);
        let standardized = self.ctx.div(&numerator, &denominator)?;
        Ok(self.ctx.sub(&standardized, &BigDecimal::from(3)))
    }
}

/// Bias-corrected (sample) excess kurtosis.
///
/// Multiplies the population excess kurtosis of the collection by the
/// correction factor `(n + 1)(n − 1) / ((n − 2)(n − 3))`:
///
/// 1. the seeds `n + 1`, `n − 1`, `n − 2`, `n − 3` are exact decimals
///    derived from the count, with no rounding applied to them;
/// 2. `numerator = (n + 1)·(n − 1)`, rounded under the context;
/// 3. `denominator = (n − 2)·(n − 3)`, rounded under the context;
/// 4. `correction = numerator / denominator`, rounded under the context;
/// 5. the population kurtosis comes from the delegate (same context);
/// 6. the result is `correction · population`, rounded under the context.
///
/// The calculator does not pre-validate the collection size: callers
/// wanting a defined result must supply more than three values. With
/// `n = 2` or `n = 3` the denominator is zero and step 4 fails with a
/// division-by-zero before the delegate runs; degenerate collections
/// (`n ≤ 1`, constant values) surface whatever failure the delegate's own
/// contract defines.
///
/// # Examples
///
/// ```
/// use bigstat::{BigDecimal, CollectionStatistic, DecimalContext, RoundingMode, SampleKurtosis};
/// use std::str::FromStr;
///
/// let ctx = DecimalContext::new(50, RoundingMode::HalfUp).unwrap();
/// let kurtosis = SampleKurtosis::new(ctx);
/// let values: Vec<BigDecimal> = ["1", "2", "3", "4", "5"]
///     .iter()
///     .map(|text| BigDecimal::from_str(text).unwrap())
///     .collect();
///
/// // correction (6·4)/(3·2) = 4, population kurtosis -1.3.
/// assert_eq!(
///     kurtosis.compute(&values).unwrap(),
///     BigDecimal::from_str("-5.2").unwrap()
/// );
/// ```
pub struct SampleKurtosis {
    ctx: DecimalContext,
    delegate: Box<dyn CollectionStatistic>,
}

impl SampleKurtosis {
    /// Create a calculator whose delegate is [`PopulationKurtosis`] under
    /// the same context.
    pub fn new(ctx: DecimalContext) -> Self {
        Self::with_delegate(ctx, Box::new(PopulationKurtosis::new(ctx)))
    }

    /// Create a calculator with an injected population-kurtosis delegate.
    ///
    /// The delegate must use the same precision context for the combined
    /// result to stay consistently rounded; nothing enforces this, which
    /// is what makes stub delegates possible in tests.
    pub fn with_delegate(ctx: DecimalContext, delegate: Box<dyn CollectionStatistic>) -> Self {
        Self { ctx, delegate }
    }
}

impl CollectionStatistic for SampleKurtosis {
    fn compute(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        let count = values.len() as i64;
        let n_plus_1 = BigDecimal::from(count + 1);
        let n_minus_1 = BigDecimal::from(count - 1);
        let n_minus_2 = BigDecimal::from(count - 2);
        let n_minus_3 = BigDecimal::from(count - 3);

        let numerator = self.ctx.mul(&n_plus_1, &n_minus_1);
        let denominator = self.ctx.mul(&n_minus_2, &n_minus_3);
        let correction = self.ctx.div(&numerator, &denominator)?;

        let population = self.delegate.compute(values)?;
        Ok(self.ctx.mul(&correction, &population))
    }
}
