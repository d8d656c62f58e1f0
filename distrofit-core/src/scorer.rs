//! Score a profile against a catalog.
//!
//! The `ProfileScorer` trait is the single logical operation exposed by the
//! engine: given pre-extracted [`Signals`](crate::Signals) and a
//! [`Catalog`](crate::Catalog), produce a [`ScoreResult`](crate::ScoreResult).

use crate::{Catalog, ScoreResult, Signals};

/// Rank a catalog for a profile and report the best fit.
///
/// Implementations must be pure: identical inputs always yield identical
/// outputs, and the catalog is never mutated. They must be `Send + Sync` so a
/// single scorer can serve concurrent callers. The method is infallible;
/// every [`Signals`] value, including an empty one, is valid input.
///
/// # Examples
///
/// ```rust
/// use distrofit_core::{
///     Catalog, FitCategory, ProfileScorer, Recommendation, ScoreResult, Signals,
/// };
///
/// struct FirstItem;
///
/// impl ProfileScorer for FirstItem {
///     fn score(&self, _signals: &Signals, catalog: &Catalog) -> ScoreResult {
///         let item = catalog.first();
///         ScoreResult {
///             score: 50,
///             category: FitCategory::Potential,
///             confidence: 0.5,
///             recommendation: Recommendation::from(item),
///         }
///     }
/// }
///
/// let result = FirstItem.score(&Signals::new(), &Catalog::builtin());
/// assert_eq!(result.recommendation.id, "cachyos");
/// ```
pub trait ProfileScorer: Send + Sync {
    /// Score `signals` against `catalog`.
    fn score(&self, signals: &Signals, catalog: &Catalog) -> ScoreResult;
}
