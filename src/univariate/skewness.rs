//! Skewness, population and sample flavors.
//!
//! The population skewness is the third standardized central moment,
//! `(Σ(x − mean)³ / n) / σ³` with σ the population standard deviation.
//! The sample flavor multiplies it by the small-sample correction
//! `√(n(n − 1)) / (n − 2)`.

use bigdecimal::BigDecimal;

use crate::context::DecimalContext;
use crate::error::StatsResult;
use crate::helpers::{centered_sums, decimal_from_usize};
use crate::univariate::{ArithmeticMean, CollectionStatistic};

/// Population skewness: `(Σ(x − mean)³ / n) / σ³`, each step rounded
/// under the context.
///
/// A constant-valued collection has σ = 0 and fails with a
/// division-by-zero; a symmetric collection yields exactly zero.
#[derive(Debug, Clone, Copy)]
pub struct PopulationSkewness {
    ctx: DecimalContext,
}

impl PopulationSkewness {
    pub fn new(ctx: DecimalContext) -> Self {
        Self { ctx }
    }
}

impl CollectionStatistic for PopulationSkewness {
    fn compute(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        let mean = ArithmeticMean::new(self.ctx).compute(values)?;
        let sums = centered_sums(values, &mean, &self.ctx);
        let count = decimal_from_usize(values.len());

        let third_moment = self.ctx.div(&sums.sum3, &count)?;
        let variance = self.ctx.div(&sums.sum2, &count)?;
        let std_dev = self.ctx.sqrt(&variance)?;
        let std_dev_cubed = self
            .ctx
            .mul(&self.ctx.mul(&std_dev, &std_dev), &std_dev);
        self.ctx.div(&third_moment, &std_dev_cubed)
    }
}

/// Bias-corrected (sample) skewness.
///
/// Multiplies the population skewness of the collection by the correction
/// factor `√(n(n − 1)) / (n − 2)`, with every product, quotient, and the
/// square root rounded under the context. The correction factor is
/// computed before the delegate runs, so an `n = 2` collection fails with
/// a division-by-zero without touching the delegate.
pub struct SampleSkewness {
    ctx: DecimalContext,
    delegate: Box<dyn CollectionStatistic>,
}

impl SampleSkewness {
    /// Create a calculator whose delegate is [`PopulationSkewness`] under
    /// the same context.
    pub fn new(ctx: DecimalContext) -> Self {
        Self::with_delegate(ctx, Box::new(PopulationSkewness::new(ctx)))
    }

    /// Create a calculator with an injected population-skewness delegate.
    pub fn with_delegate(ctx: DecimalContext, delegate: Box<dyn CollectionStatistic>) -> Self {
        Self { ctx, delegate }
    }
}

impl CollectionStatistic for SampleSkewness {
    fn compute(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        let count = values.len() as i64;
        let n = BigDecimal::from(count);
        let n_minus_1 = BigDecimal::from(count - 1);
        let n_minus_2 = BigDecimal::from(count - 2);

        let radicand = self.ctx.mul(&n, &n_minus_1);
        let root = self.ctx.sqrt(&radicand)?;
        let correction = self.ctx.div(&root, &n_minus_2)?;

        let population = self.delegate.compute(values)?;
        Ok(self.ctx.mul(&correction, &population))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsError;
    use bigdecimal::RoundingMode;
    use num_traits::Zero;
    use std::str::FromStr;

    fn dec(text: &str) -> BigDecimal {
        BigDecimal::from_str(text).unwrap()
    }

    fn decs(texts: &[&str]) -> Vec<BigDecimal> {
        texts.iter().map(|text| dec(text)).collect()
    }

    fn ctx() -> DecimalContext {
        DecimalContext::new(10, RoundingMode::HalfUp).unwrap()
    }

    struct FixedStatistic(BigDecimal);

    impl CollectionStatistic for FixedStatistic {
        fn compute(&self, _values: &[BigDecimal]) -> StatsResult<BigDecimal> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_symmetric_data_has_zero_skewness() {
        let values = decs(&["1", "2", "3", "4", "5"]);
        assert_eq!(
            PopulationSkewness::new(ctx()).compute(&values).unwrap(),
            BigDecimal::zero()
        );
        assert_eq!(
            SampleSkewness::new(ctx()).compute(&values).unwrap(),
            BigDecimal::zero()
        );
    }

    #[test]
    fn test_population_skewness_left_tail() {
        // Deviations from the mean 5 are {-5, 1, 1, 3}: Σd² = 36 (σ = 3),
        // Σd³ = -96, so the skewness is -24/27 = -8/9.
        let values = decs(&["0", "6", "6", "8"]);
        assert_eq!(
            PopulationSkewness::new(ctx()).compute(&values).unwrap(),
            dec("-0.8888888889")
        );
    }

    #[test]
    fn test_constant_data_fails() {
        let values = decs(&["3", "3", "3", "3"]);
        let err = PopulationSkewness::new(ctx()).compute(&values).unwrap_err();
        assert_eq!(err, StatsError::DivisionByZero);
    }

    #[test]
    fn test_sample_correction_applied_to_delegate_result() {
        let wide = DecimalContext::new(50, RoundingMode::HalfUp).unwrap();
        let stat = SampleSkewness::with_delegate(wide, Box::new(FixedStatistic(dec("3"))));
        let values = decs(&["10", "20", "30", "40"]);

        // Expected value built from the same closed form: √(4·3)/2 · 3.
        let root = wide.sqrt(&dec("12")).unwrap();
        let correction = wide.div(&root, &dec("2")).unwrap();
        let expected = wide.mul(&correction, &dec("3"));

        assert_eq!(stat.compute(&values).unwrap(), expected);
    }

    #[test]
    fn test_two_elements_fail_before_delegate_runs() {
        // The stub delegate would happily return a value; the zero
        // denominator in the correction factor must fail first.
        let stat = SampleSkewness::with_delegate(ctx(), Box::new(FixedStatistic(dec("1"))));
        let err = stat.compute(&decs(&["1", "2"])).unwrap_err();
        assert_eq!(err, StatsError::DivisionByZero);
    }

    #[test]
    fn test_empty_input_propagates_delegate_error() {
        let err = PopulationSkewness::new(ctx()).compute(&[]).unwrap_err();
        assert!(matches!(err, StatsError::EmptyData { .. }));
    }
}
