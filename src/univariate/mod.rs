//! Univariate statistics over collections of decimal values.
//!
//! Every statistic implements the [`CollectionStatistic`] trait: one pure
//! operation from a finite collection to a single decimal, computed under
//! the [`DecimalContext`](crate::DecimalContext) the calculator was
//! constructed with. Calculators hold no mutable state: construct one per
//! context and invoke it on as many samples as you like, concurrently if
//! needed.
//!
//! The trait is also the seam between composed statistics: the
//! bias-corrected estimators ([`SampleKurtosis`], [`SampleSkewness`])
//! consume their population counterparts through it, so any implementor
//! (including a test stub) can stand in as the delegate.

mod aggregates;
mod kurtosis;
mod skewness;
mod variance;

pub use aggregates::{ArithmeticMean, Max, Median, Min, Sum};
pub use kurtosis::{PopulationKurtosis, SampleKurtosis};
pub use skewness::{PopulationSkewness, SampleSkewness};
pub use variance::{
    PopulationStandardDeviation, PopulationVariance, SampleStandardDeviation, SampleVariance,
};

use bigdecimal::BigDecimal;

use crate::error::StatsResult;

/// A statistic computed from a finite collection of decimal values.
///
/// Implementations are pure: given the same collection and the same
/// precision context, `compute` returns a bit-identical result on every
/// invocation.
pub trait CollectionStatistic: Send + Sync {
    /// Compute the statistic of `values`.
    fn compute(&self, values: &[BigDecimal]) -> StatsResult<BigDecimal>;
}
