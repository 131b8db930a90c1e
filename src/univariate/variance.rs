//! Variance and standard deviation, population and sample flavors.
//!
//! The population denominator is `n`; the sample flavor applies Bessel's
//! correction and divides by `n - 1`.

use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::context::DecimalContext;
use crate::error::StatsResult;
use crate::helpers::decimal_from_usize;
use crate::univariate::{ArithmeticMean, CollectionStatistic};

/// Sum of squared deviations from the context-rounded mean, plus the
/// count. Fails on empty input (the mean is undefined).
fn squared_deviation_sum(
    values: &[BigDecimal],
    ctx: &DecimalContext,
) -> StatsResult<(BigDecimal, usize)> {
    let mean = ArithmeticMean::new(*ctx).compute(values)?;
    let mut sum2 = BigDecimal::zero();
    for value in values {
        let deviation = ctx.sub(value, &mean);
        let squared = ctx.mul(&deviation, &deviation);
        sum2 = ctx.add(&sum2, &squared);
    }
    Ok((sum2, values.len()))
}

/// Population variance: `Σ(x − mean)² / n`.
#[derive(Debug, Clone, Copy)]
pub struct PopulationVariance {
    ctx: DecimalContext,
}

impl PopulationVariance {
    pub fn new(ctx: DecimalContext) -> Self {
        Self { ctx }
    }
}

impl CollectionStatistic for PopulationVariance {
    fn compute(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        let (sum2, count) = squared_deviation_sum(values, &self.ctx)?;
        self.ctx.div(&sum2, &decimal_from_usize(count))
    }
}

/// Sample variance: `Σ(x − mean)² / (n − 1)`.
///
/// A single-element collection has a zero denominator and fails with
/// [`StatsError::DivisionByZero`](crate::StatsError::DivisionByZero).
#[derive(Debug, Clone, Copy)]
pub struct SampleVariance {
    ctx: DecimalContext,
}

impl SampleVariance {
    pub fn new(ctx: DecimalContext) -> Self {
        Self { ctx }
    }
}

impl CollectionStatistic for SampleVariance {
    fn compute(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        let (sum2, count) = squared_deviation_sum(values, &self.ctx)?;
        let denominator = BigDecimal::from(count as i64 - 1);
        self.ctx.div(&sum2, &denominator)
    }
}

/// Population standard deviation: the context square root of the
/// population variance.
#[derive(Debug, Clone, Copy)]
pub struct PopulationStandardDeviation {
    ctx: DecimalContext,
}

impl PopulationStandardDeviation {
    pub fn new(ctx: DecimalContext) -> Self {
        Self { ctx }
    }
}

impl CollectionStatistic for PopulationStandardDeviation {
    fn compute(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        let variance = PopulationVariance::new(self.ctx).compute(values)?;
        self.ctx.sqrt(&variance)
    }
}

/// Sample standard deviation: the context square root of the sample
/// variance.
#[derive(Debug, Clone, Copy)]
pub struct SampleStandardDeviation {
    ctx: DecimalContext,
}

impl SampleStandardDeviation {
    pub fn new(ctx: DecimalContext) -> Self {
        Self { ctx }
    }
}

impl CollectionStatistic for SampleStandardDeviation {
    fn compute(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        let variance = SampleVariance::new(self.ctx).compute(values)?;
        self.ctx.sqrt(&variance)
    }
}
