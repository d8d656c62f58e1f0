//! Tunable weights for the matcher's composite metric.
#![forbid(unsafe_code)]

use distrofit_core::Trend;

use crate::WeightsError;

/// Popularity of the reference "most popular" distribution.
pub const DEFAULT_REFERENCE_POPULARITY: u32 = 3790;
/// Senior profiles only consider items at least this popular.
pub const DEFAULT_SENIOR_POPULARITY_FLOOR: u32 = 500;

/// Relative weighting between geometric similarity, popularity and trend.
///
/// # Examples
/// ```
/// use distrofit_scorer::MatchWeights;
///
/// let weights = MatchWeights::default().validate().expect("defaults are valid");
/// assert_eq!(weights.reference_popularity, 3790);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MatchWeights {
    /// Multiplier applied to the similarity component.
    pub similarity: f64,
    /// Multiplier applied to the normalised popularity component.
    pub popularity: f64,
    /// Popularity that normalises to `1.0`.
    pub reference_popularity: u32,
    /// Composite multiplier for rising items.
    pub rising_multiplier: f64,
    /// Composite multiplier for declining items.
    pub declining_multiplier: f64,
    /// Minimum popularity for an item to be eligible for senior profiles.
    pub senior_popularity_floor: u32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            similarity: 0.90_f64,
            popularity: 0.10_f64,
            reference_popularity: DEFAULT_REFERENCE_POPULARITY,
            rising_multiplier: 1.08_f64,
            declining_multiplier: 0.97_f64,
            senior_popularity_floor: DEFAULT_SENIOR_POPULARITY_FLOOR,
        }
    }
}

impl MatchWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when a float is not finite or is negative,
    /// when the similarity and popularity weights sum to zero, or when the
    /// reference popularity is zero.
    pub fn validate(self) -> Result<Self, WeightsError> {
        for (field, value) in self.floats() {
            if !value.is_finite() {
                return Err(WeightsError::NonFinite { field });
            }
            if value < 0.0_f64 {
                return Err(WeightsError::Negative { field });
            }
        }
        if !self.has_non_zero_total() {
            return Err(WeightsError::ZeroTotal);
        }
        if self.reference_popularity == 0 {
            return Err(WeightsError::ZeroReferencePopularity);
        }
        Ok(self)
    }

    const fn floats(self) -> [(&'static str, f64); 4] {
        [
            ("similarity", self.similarity),
            ("popularity", self.popularity),
            ("rising_multiplier", self.rising_multiplier),
            ("declining_multiplier", self.declining_multiplier),
        ]
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums weights to ensure a non-zero total"
    )]
    fn has_non_zero_total(self) -> bool {
        (self.similarity + self.popularity) > 0.0_f64
    }

    /// Composite multiplier for a trend.
    #[must_use]
    pub const fn trend_multiplier(&self, trend: Trend) -> f64 {
        match trend {
            Trend::Rising => self.rising_multiplier,
            Trend::Stable => 1.0_f64,
            Trend::Declining => self.declining_multiplier,
        }
    }

    /// Log-scaled popularity in `0.0..=1.0` relative to the reference.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "popularity is normalised on a logarithmic scale"
    )]
    pub fn popularity_norm(&self, popularity: u32) -> f64 {
        let reference = (f64::from(self.reference_popularity) + 1.0_f64).ln();
        if reference <= 0.0_f64 {
            return 0.0_f64;
        }
        let value = (f64::from(popularity) + 1.0_f64).ln() / reference;
        value.clamp(0.0_f64, 1.0_f64)
    }

    /// Weighted sum of the similarity and popularity components, scaled by
    /// the trend multiplier.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "composite blending requires weighted sums"
    )]
    pub fn composite(&self, similarity: f64, popularity_norm: f64, trend: Trend) -> f64 {
        (self.similarity * similarity + self.popularity * popularity_norm)
            * self.trend_multiplier(trend)
    }
}
