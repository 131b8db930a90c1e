//! Order statistics and simple aggregates: sum, extrema, mean, median.

use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::context::DecimalContext;
use crate::error::{StatsError, StatsResult};
use crate::helpers::decimal_from_usize;
use crate::univariate::CollectionStatistic;

/// Sum of a collection, with every running addition rounded under the
/// context.
#[derive(Debug, Clone, Copy)]
pub struct Sum {
    ctx: DecimalContext,
}

impl Sum {
    pub fn new(ctx: DecimalContext) -> Self {
        Self { ctx }
    }
}

impl CollectionStatistic for Sum {
    fn compute(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        if values.is_empty() {
            return Err(StatsError::EmptyData {
                context: "sum".to_string(),
            });
        }
        let mut total = BigDecimal::zero();
        for value in values {
            total = self.ctx.add(&total, value);
        }
        Ok(total)
    }
}

/// Smallest element. Comparisons are exact; no rounding occurs.
#[derive(Debug, Clone, Copy)]
pub struct Min;

impl Min {
    pub fn new(_ctx: DecimalContext) -> Self {
        Self
    }
}

impl CollectionStatistic for Min {
    fn compute(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        values.iter().min().cloned().ok_or(StatsError::EmptyData {
            context: "min".to_string(),
        })
    }
}

/// Largest element. Comparisons are exact; no rounding occurs.
#[derive(Debug, Clone, Copy)]
pub struct Max;

impl Max {
    pub fn new(_ctx: DecimalContext) -> Self {
        Self
    }
}

impl CollectionStatistic for Max {
    fn compute(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        values.iter().max().cloned().ok_or(StatsError::EmptyData {
            context: "max".to_string(),
        })
    }
}

/// Arithmetic mean: the context-rounded sum divided by the count.
#[derive(Debug, Clone, Copy)]
pub struct ArithmeticMean {
    ctx: DecimalContext,
}

impl ArithmeticMean {
    pub fn new(ctx: DecimalContext) -> Self {
        Self { ctx }
    }
}

impl CollectionStatistic for ArithmeticMean {
    fn compute(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        if values.is_empty() {
            return Err(StatsError::EmptyData {
                context: "arithmetic mean".to_string(),
            });
        }
        let mut total = BigDecimal::zero();
        for value in values {
            total = self.ctx.add(&total, value);
        }
        self.ctx.div(&total, &decimal_from_usize(values.len()))
    }
}

/// Median: the middle element of the sorted collection, or for even
/// counts the context-rounded mean of the two middle elements.
///
/// An odd-count median performs no arithmetic, so the chosen element is
/// returned as-is, without rounding.
#[derive(Debug, Clone, Copy)]
pub struct Median {
    ctx: DecimalContext,
}

impl Median {
    pub fn new(ctx: DecimalContext) -> Self {
        Self { ctx }
    }
}

impl CollectionStatistic for Median {
    fn compute(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal> {
        if values.is_empty() {
            return Err(StatsError::EmptyData {
                context: "median".to_string(),
            });
        }
        let mut sorted = values.to_vec();
        sorted.sort();
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            Ok(sorted[mid].clone())
        } else {
            let pair_sum = self.ctx.add(&sorted[mid - 1], &sorted[mid]);
            self.ctx.div(&pair_sum, &BigDecimal::from(2))
        }
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

    fn ctx() -> DecimalContext {
        DecimalContext::new(10, RoundingMode::HalfUp).unwrap()
    }

    #[test]
    fn test_sum() {
        let values = decs(&["1.5", "2.5", "-1"]);
        assert_eq!(Sum::new(ctx()).compute(&values).unwrap(), dec("3"));
    }

    #[test]
    fn test_sum_empty() {
        let err = Sum::new(ctx()).compute(&[]).unwrap_err();
        assert!(matches!(err, StatsError::EmptyData { .. }));
    }

    #[test]
    fn test_min_max() {
        let values = decs(&["2", "-3.5", "7", "0"]);
        assert_eq!(Min::new(ctx()).compute(&values).unwrap(), dec("-3.5"));
        assert_eq!(Max::new(ctx()).compute(&values).unwrap(), dec("7"));
    }

    #[test]
    fn test_min_empty() {
        let err = Min::new(ctx()).compute(&[]).unwrap_err();
        assert!(matches!(err, StatsError::EmptyData { .. }));
    }

    #[test]
    fn test_mean_exact() {
        let values = decs(&["1", "2", "3", "4", "5"]);
        assert_eq!(
            ArithmeticMean::new(ctx()).compute(&values).unwrap(),
            dec("3")
        );
    }

    #[test]
    fn test_mean_rounds_under_context() {
        let values = decs(&["1", "2", "2"]);
        // 5/3 at ten significant digits, half-up.
        assert_eq!(
            ArithmeticMean::new(ctx()).compute(&values).unwrap(),
            dec("1.666666667")
        );
    }

    #[test]
    fn test_mean_empty() {
        let err = ArithmeticMean::new(ctx()).compute(&[]).unwrap_err();
        assert!(matches!(err, StatsError::EmptyData { .. }));
    }

    #[test]
    fn test_median_odd_count_is_unrounded_element() {
        let values = decs(&["9", "1.2345", "0"]);
        let narrow = DecimalContext::new(2, RoundingMode::HalfUp).unwrap();
        assert_eq!(
            Median::new(narrow).compute(&values).unwrap(),
            dec("1.2345"),
            "odd-count median performs no arithmetic",
        );
    }

    #[test]
    fn test_median_even_count_averages_middles() {
        let values = decs(&["4", "1", "3", "2"]);
        assert_eq!(Median::new(ctx()).compute(&values).unwrap(), dec("2.5"));
    }

    #[test]
    fn test_median_empty() {
        let err = Median::new(ctx()).compute(&[]).unwrap_err();
        assert!(matches!(err, StatsError::EmptyData { .. }));
    }

    #[test]
    fn test_median_ignores_insertion_order() {
        let ordered = decs(&["1", "2", "3", "4", "5"]);
        let shuffled = decs(&["5", "3", "1", "4", "2"]);
        let median = Median::new(ctx());
        assert_eq!(
            median.compute(&ordered).unwrap(),
            median.compute(&shuffled).unwrap()
        );
    }
}
