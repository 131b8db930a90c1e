//! bigstat - Descriptive Statistics over Arbitrary-Precision Decimals
//!
//! bigstat computes univariate statistics of finite collections of
//! arbitrary-precision decimal values with explicit, caller-controlled
//! rounding. No floating-point hardware arithmetic participates in any
//! result: every addition, multiplication, division, and square root is
//! rounded under a [`DecimalContext`] (significant digits + rounding
//! mode), at each step rather than at the end. Two runs with the same
//! collection and context are bit-identical, and so are two independent
//! implementations that apply the same rounding order.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      bigstat                            │
//! │  (mean, median, variance, skewness, kurtosis, facade)   │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ uses
//! ┌──────────────────────────▼──────────────────────────────┐
//! │              DecimalContext arithmetic                  │
//! │   (context-rounded add/sub/mul/div/sqrt over            │
//! │    bigdecimal / num-bigint coefficients)                │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Every statistic implements the [`CollectionStatistic`] trait, one pure
//! operation from a collection to a decimal. The bias-corrected
//! estimators ([`SampleKurtosis`], [`SampleSkewness`]) consume their
//! population counterparts through the same trait, so a stub delegate can
//! stand in during tests.
//!
//! # Example
//!
//! ```
//! use bigstat::{BigDecimal, CollectionStatistic, DecimalContext, RoundingMode, SampleKurtosis};
//! use std::str::FromStr;
//!
//! let ctx = DecimalContext::new(50, RoundingMode::HalfUp).unwrap();
//! let kurtosis = SampleKurtosis::new(ctx);
//!
//! let values: Vec<BigDecimal> = ["1", "2", "3", "4", "5"]
//!     .iter()
//!     .map(|text| BigDecimal::from_str(text).unwrap())
//!     .collect();
//!
//! // Bias correction (n+1)(n-1)/((n-2)(n-3)) = 4 times the population
//! // excess kurtosis -1.3.
//! assert_eq!(
//!     kurtosis.compute(&values).unwrap(),
//!     BigDecimal::from_str("-5.2").unwrap()
//! );
//! ```
//!
//! # Choosing a context
//!
//! The context is the whole configuration surface: the crate ships no
//! precision or rounding defaults. Pick the digits your application needs
//! and use the same context for every stage of a computation; the
//! corrected estimators only stay consistently rounded when their
//! delegates round the same way.

pub mod context;
pub mod error;
mod helpers;
pub mod statistics;
pub mod univariate;

// Public API: context and errors
pub use context::DecimalContext;
pub use error::{StatsError, StatsResult};

// Public API: statistics
pub use statistics::Statistics;
pub use univariate::{
    ArithmeticMean, CollectionStatistic, Max, Median, Min, PopulationKurtosis,
    PopulationSkewness, PopulationStandardDeviation, PopulationVariance, SampleKurtosis,
    SampleSkewness, SampleStandardDeviation, SampleVariance, Sum,
};

// Re-export backend types that users will commonly need
pub use bigdecimal::{BigDecimal, RoundingMode};
