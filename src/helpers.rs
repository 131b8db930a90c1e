//! Shared helper functions for the statistic implementations.

use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::context::DecimalContext;

/// Exact decimal from a collection count.
pub(crate) fn decimal_from_usize(n: usize) -> BigDecimal {
    BigDecimal::from(n as u64)
}

/// Sums of powers of deviations from `mean`, accumulated in one pass.
///
/// Feeds the moment-based statistics: variance uses the squares, skewness
/// the cubes, kurtosis the fourth powers. Every subtraction, product, and
/// running add is rounded under `ctx`.
pub(crate) struct CenteredSums {
    pub sum2: BigDecimal,
    pub sum3: BigDecimal,
    pub sum4: BigDecimal,
}

pub(crate) fn centered_sums(
    values: &[BigDecimal],
    mean: &BigDecimal,
    ctx: &DecimalContext,
) -> CenteredSums {
    let mut sum2 = BigDecimal::zero();
    let mut sum3 = BigDecimal::zero();
    let mut sum4 = BigDecimal::zero();
    for value in values {
        let deviation = ctx.sub(value, mean);
        let squared = ctx.mul(&deviation, &deviation);
        let cubed = ctx.mul(&squared, &deviation);
        let fourth = ctx.mul(&squared, &squared);
        sum2 = ctx.add(&sum2, &squared);
        sum3 = ctx.add(&sum3, &cubed);
        sum4 = ctx.add(&sum4, &fourth);
    }
    CenteredSums { sum2, sum3, sum4 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::RoundingMode;
    use std::str::FromStr;

    #[test]
    fn test_centered_sums_exact_case() {
        let ctx = DecimalContext::new(50, RoundingMode::HalfUp).unwrap();
        let values: Vec<BigDecimal> = ["1", "2", "3", "4", "5"]
            .iter()
            .map(|text| BigDecimal::from_str(text).unwrap())
            .collect();
        let mean = BigDecimal::from(3);

        let sums = centered_sums(&values, &mean, &ctx);
        assert_eq!(sums.sum2, BigDecimal::from(10));
        assert_eq!(sums.sum3, BigDecimal::zero());
        assert_eq!(sums.sum4, BigDecimal::from(34));
    }
}
