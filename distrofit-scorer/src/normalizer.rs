//! Turn a match quality into an integer score.
//!
//! The base score is `round(quality * 100)`. Contextual rules then add or
//! subtract fixed integer deltas, each recorded as an [`Adjustment`] so
//! callers can explain the result without re-deriving it.

use distrofit_core::{
    Adjustment, Axis, CatalogItem, ExperienceLevel, MatchResult, ScoreBreakdown, Signals, Trend,
    UserVector, clamp_score,
};
use log::debug;

/// Popularity below which an item is considered niche.
pub const NICHE_POPULARITY: u32 = 150;
/// Popularity below which a declining item is considered at risk.
pub const DECLINING_POPULARITY: u32 = 300;

/// Assemble the integer score for a match.
///
/// # Examples
/// ```
/// use distrofit_core::{Eligibility, MatchResult, Signals, UserVector};
/// use distrofit_core::Catalog;
/// use distrofit_scorer::normalize;
///
/// let catalog = Catalog::builtin();
/// let result = MatchResult {
///     item: catalog.first(),
///     quality: 0.5,
///     composite: 0.5,
///     penalties: Vec::new(),
///     eligibility: Eligibility::Unfiltered,
/// };
/// let breakdown = normalize(&result, &UserVector::new(5, 5, 3, 5), &Signals::new());
/// assert_eq!(breakdown.base, 50);
/// assert!(breakdown.score <= 100);
/// ```
#[must_use]
pub fn normalize(
    matched: &MatchResult<'_>,
    vector: &UserVector,
    signals: &Signals,
) -> ScoreBreakdown {
    let item = matched.item;
    let base = base_score(matched.quality);
    let mut adjustments = experience_adjustments(signals.experience_level, item);
    adjustments.extend(coherence_adjustments(vector, item));
    let close = close_axes(vector, item);
    if close >= 2 {
        adjustments.push(Adjustment::CloseAxes { count: close });
    }
    adjustments.extend(popularity_adjustments(item));

    let total: i32 = adjustments.iter().map(|adjustment| adjustment.delta()).sum();
    let score = clamp_score(base.saturating_add(total));
    debug!(
        "score for {}: base {base}, adjustments {total:+}, final {score}",
        item.name
    );
    ScoreBreakdown {
        base,
        adjustments,
        score,
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "quality is rescaled to a percentage"
)]
#[expect(
    clippy::cast_possible_truncation,
    reason = "quality is clamped to 0.0..=1.0 so the rounded value fits in i32"
)]
fn base_score(quality: f64) -> i32 {
    (quality.clamp(0.0_f64, 1.0_f64) * 100.0_f64).round() as i32
}

fn experience_adjustments(level: ExperienceLevel, item: &CatalogItem) -> Vec<Adjustment> {
    let attributes = &item.attributes;
    let candidates = match level {
        ExperienceLevel::Junior => vec![
            (attributes.easy >= 8, Adjustment::JuniorEasyItem),
            (attributes.diy >= 9, Adjustment::JuniorDemandingItem),
        ],
        ExperienceLevel::Senior => vec![
            (attributes.dev_focus >= 9, Adjustment::SeniorDeveloperItem),
            (attributes.diy >= 7, Adjustment::SeniorCustomisableItem),
            (
                attributes.easy >= 10 && attributes.diy <= 2,
                Adjustment::SeniorSimplisticItem,
            ),
        ],
        ExperienceLevel::Mid => Vec::new(),
    };
    fired(candidates)
}

fn coherence_adjustments(vector: &UserVector, item: &CatalogItem) -> Vec<Adjustment> {
    let attributes = &item.attributes;
    fired([
        (
            vector.dev_focus() >= 8 && attributes.dev_focus <= 5,
            Adjustment::DevFocusMismatch,
        ),
        (
            vector.performance() >= 8 && attributes.performance <= 5,
            Adjustment::PerformanceMismatch,
        ),
    ])
}

fn popularity_adjustments(item: &CatalogItem) -> Vec<Adjustment> {
    fired([
        (item.popularity < NICHE_POPULARITY, Adjustment::NicheItem),
        (
            item.trend == Trend::Declining && item.popularity < DECLINING_POPULARITY,
            Adjustment::DecliningNicheItem,
        ),
    ])
}

fn fired<I>(candidates: I) -> Vec<Adjustment>
where
    I: IntoIterator<Item = (bool, Adjustment)>,
{
    candidates
        .into_iter()
        .filter_map(|(applies, adjustment)| applies.then_some(adjustment))
        .collect()
}

/// Number of axes on which the vector and item differ by at most one point.
#[must_use]
pub fn close_axes(vector: &UserVector, item: &CatalogItem) -> u8 {
    let count = Axis::ALL
        .iter()
        .filter(|&&axis| vector.get(axis).abs_diff(item.axis(axis)) <= 1)
        .count();
    u8::try_from(count).unwrap_or(u8::MAX)
}
