//! Convenience facade bundling every statistic behind one context.

use bigdecimal::BigDecimal;

use crate::context::DecimalContext;
use crate::error::StatsResult;
use crate::univariate::{
    ArithmeticMean, CollectionStatistic, Max, Median, Min, PopulationKurtosis,
    PopulationSkewness, PopulationStandardDeviation, PopulationVariance, SampleKurtosis,
    SampleSkewness, SampleStandardDeviation, SampleVariance, Sum,
};

/// One-stop access to the univariate statistics, all computed under the
/// same precision context.
///
/// Useful when a caller wants several statistics of the same collection
/// without naming each calculator. For repeated computation of a single
/// statistic, construct that calculator directly.
///
/// # Examples
///
/// ```
/// use bigstat::{BigDecimal, DecimalContext, RoundingMode, Statistics};
/// use std::str::FromStr;
///
/// let stats = Statistics::new(DecimalContext::new(20, RoundingMode::HalfUp).unwrap());
/// let values: Vec<BigDecimal> = ["1", "2", "3", "4", "5"]
///     .iter()
///     .map(|text| BigDecimal::from_str(text).unwrap())
///     .collect();
///
/// assert_eq!(stats.mean(&values).unwrap(), BigDecimal::from(3));
/// assert_eq!(
///     stats.sample_variance(&values).unwrap(),
///     BigDecimal::from_str("2.5").unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Statistics {
    ctx: DecimalContext,
}

impl Statistics {
    pub fn new(ctx: DecimalContext) -> Self {
        Self { ctx }
    }

    /// The context every statistic of this facade is computed under.
    pub fn context(&self) -> DecimalContext {
        self.ctx
    }

    pub fn count(&self, values: &[BigDecimal]) -> usize {
        values.len()
    }

    pub fn min(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        Min::new(self.ctx).compute(values)
    }

    pub fn max(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        Max::new(self.ctx).compute(values)
    }

    pub fn sum(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        Sum::new(self.ctx).compute(values)
    }

    pub fn mean(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        ArithmeticMean::new(self.ctx).compute(values)
    }

    pub fn median(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        Median::new(self.ctx).compute(values)
    }

    pub fn population_variance(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        PopulationVariance::new(self.ctx).compute(values)
    }

    pub fn sample_variance(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        SampleVariance::new(self.ctx).compute(values)
    }

    pub fn population_standard_deviation(
        &self,
        values: &[BigDecimal],
    ) -> StatsResult<BigDecimal> {
        PopulationStandardDeviation::new(self.ctx).compute(values)
    }

    pub fn sample_standard_deviation(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        SampleStandardDeviation::new(self.ctx).compute(values)
    }

    pub fn population_skewness(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        PopulationSkewness::new(self.ctx).compute(values)
    }

    pub fn sample_skewness(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        SampleSkewness::new(self.ctx).compute(values)
    }

    pub fn population_kurtosis(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        PopulationKurtosis::new(self.ctx).compute(values)
    }

    pub fn sample_kurtosis(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        SampleKurtosis::new(self.ctx).compute(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::RoundingMode;
    use std::str::FromStr;

    fn dec(text: &str) -> BigDecimal {
        BigDecimal::from_str(text).unwrap()
    }

    fn decs(texts: &[&str]) -> Vec<BigDecimal> {
        texts.iter().map(|text| dec(text)).collect()
    }

    #[test]
    fn test_facade_matches_calculators() {
        let ctx = DecimalContext::new(50, RoundingMode::HalfUp).unwrap();
        let stats = Statistics::new(ctx);
        let values = decs(&["1", "2", "3", "4", "5"]);

        assert_eq!(stats.count(&values), 5);
        assert_eq!(stats.min(&values).unwrap(), dec("1"));
        assert_eq!(stats.max(&values).unwrap(), dec("5"));
        assert_eq!(stats.sum(&values).unwrap(), dec("15"));
        assert_eq!(stats.mean(&values).unwrap(), dec("3"));
        assert_eq!(stats.median(&values).unwrap(), dec("3"));
        assert_eq!(stats.population_variance(&values).unwrap(), dec("2"));
        assert_eq!(stats.sample_variance(&values).unwrap(), dec("2.5"));
        assert_eq!(stats.population_kurtosis(&values).unwrap(), dec("-1.3"));
        assert_eq!(stats.sample_kurtosis(&values).unwrap(), dec("-5.2"));
    }

    #[test]
    fn test_facade_shares_one_context() {
        let ctx = DecimalContext::new(10, RoundingMode::HalfUp).unwrap();
        let stats = Statistics::new(ctx);
        assert_eq!(stats.context(), ctx);

        // 5/3 rounded the same way the mean calculator rounds it.
        let values = decs(&["1", "2", "2"]);
        assert_eq!(stats.mean(&values).unwrap(), dec("1.666666667"));
    }
}
