//! Map a final score to its qualitative label.

use distrofit_core::FitCategory;

/// Lowest score labelled [`FitCategory::Strong`].
pub const STRONG_THRESHOLD: u8 = 75;
/// Lowest score labelled [`FitCategory::Potential`].
pub const POTENTIAL_THRESHOLD: u8 = 50;

/// Categorise a score: `>= 75` strong, `>= 50` potential, otherwise none.
///
/// # Examples
/// ```
/// use distrofit_core::FitCategory;
/// use distrofit_scorer::categorize;
///
/// assert_eq!(categorize(80), FitCategory::Strong);
/// assert_eq!(categorize(50), FitCategory::Potential);
/// assert_eq!(categorize(12), FitCategory::None);
/// ```
#[must_use]
pub const fn categorize(score: u8) -> FitCategory {
    if score >= STRONG_THRESHOLD {
        FitCategory::Strong
    } else if score >= POTENTIAL_THRESHOLD {
        FitCategory::Potential
    } else {
        FitCategory::None
    }
}
