//! Select the catalog item closest to a user vector.
//!
//! Matching is an explicit two-phase pipeline: the eligible candidate pool is
//! formed first, then reduced to the single best composite. The pool is
//! never empty because [`Catalog`] is non-empty by construction and an empty
//! senior pool falls back to the whole catalog.

use distrofit_core::{
    Axis, Catalog, CatalogItem, Eligibility, MatchPenalty, MatchResult, Signals, UserVector,
};
use log::{debug, warn};

use crate::MatchWeights;

/// Theoretical maximum distance between two vectors: `sqrt(4 * 10^2)`.
pub const MAX_DISTANCE: f64 = 20.0_f64;

/// Multiplier applied when a strong developer profile matches a generic item.
pub const GENERIC_FOR_DEVELOPER_FACTOR: f64 = 0.85_f64;
/// Multiplier applied when a tinkering profile matches an easy item.
pub const TOO_EASY_FOR_TINKERER_FACTOR: f64 = 0.90_f64;

/// Metrics computed for one candidate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CandidateScore<'a> {
    /// Candidate item.
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_item_id"))]
    pub item: &'a CatalogItem,
    /// Euclidean distance over the four axes.
    pub distance: f64,
    /// `1 - distance / 20`, in `0.0..=1.0`.
    pub similarity: f64,
    /// Log-normalised popularity in `0.0..=1.0`.
    pub popularity: f64,
    /// Blend of similarity and popularity, scaled by trend.
    pub composite: f64,
}

#[cfg(feature = "serde")]
fn serialize_item_id<S>(item: &&CatalogItem, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&item.id)
}

/// Every scored candidate plus the selected winner.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ranking<'a> {
    /// Candidates in catalog order.
    pub candidates: Vec<CandidateScore<'a>>,
    /// Winning candidate before penalties.
    pub best: CandidateScore<'a>,
    /// How the pool was formed.
    pub eligibility: Eligibility,
}

/// Score and select the best item for `vector`, applying senior penalties.
///
/// # Examples
/// ```
/// use distrofit_core::{Catalog, Signals, UserVector};
/// use distrofit_scorer::{MatchWeights, match_profile};
///
/// let catalog = Catalog::builtin();
/// let vector = UserVector::new(5, 5, 3, 5);
/// let result = match_profile(&vector, &catalog, &Signals::new(), &MatchWeights::default());
/// assert!((0.0..=1.0).contains(&result.quality));
/// ```
#[must_use]
pub fn match_profile<'a>(
    vector: &UserVector,
    catalog: &'a Catalog,
    signals: &Signals,
    weights: &MatchWeights,
) -> MatchResult<'a> {
    let ranking = rank(vector, catalog, signals, weights);
    apply_penalties(&ranking, vector, signals)
}

/// Score every eligible candidate and select the best without penalties.
#[must_use]
pub fn rank<'a>(
    vector: &UserVector,
    catalog: &'a Catalog,
    signals: &Signals,
    weights: &MatchWeights,
) -> Ranking<'a> {
    let (pool, eligibility) = candidate_pool(catalog, signals, weights);
    let head = score_candidate(vector, pool.head, weights);
    let tail: Vec<CandidateScore<'a>> = pool
        .tail
        .into_iter()
        .map(|item| score_candidate(vector, item, weights))
        .collect();
    let best = tail.iter().fold(head.clone(), |best, candidate| {
        if candidate.composite > best.composite {
            candidate.clone()
        } else {
            best
        }
    });
    let candidates = std::iter::once(head).chain(tail).collect();
    debug!(
        "best match: {} (composite {:.4})",
        best.item.name, best.composite
    );
    Ranking {
        candidates,
        best,
        eligibility,
    }
}

/// Apply the senior-only post-selection penalties to a ranking's winner.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "penalties scale the composite multiplicatively"
)]
pub fn apply_penalties<'a>(
    ranking: &Ranking<'a>,
    vector: &UserVector,
    signals: &Signals,
) -> MatchResult<'a> {
    let winner = ranking.best.item;
    let penalties = if signals.is_senior() {
        senior_penalties(vector, winner)
    } else {
        Vec::new()
    };
    let quality = penalties
        .iter()
        .fold(ranking.best.composite, |quality, penalty| {
            debug!("penalising {} for senior profile: {penalty:?}", winner.name);
            quality * penalty_factor(*penalty)
        });
    MatchResult {
        item: winner,
        quality: quality.clamp(0.0_f64, 1.0_f64),
        composite: ranking.best.composite,
        penalties,
        eligibility: ranking.eligibility,
    }
}

const fn penalty_factor(penalty: MatchPenalty) -> f64 {
    match penalty {
        MatchPenalty::GenericForDeveloper => GENERIC_FOR_DEVELOPER_FACTOR,
        MatchPenalty::TooEasyForTinkerer => TOO_EASY_FOR_TINKERER_FACTOR,
    }
}

fn senior_penalties(vector: &UserVector, winner: &CatalogItem) -> Vec<MatchPenalty> {
    let attributes = &winner.attributes;
    let mut penalties = Vec::new();
    if vector.dev_focus() >= 8 && attributes.dev_focus <= 7 {
        penalties.push(MatchPenalty::GenericForDeveloper);
    }
    if vector.diy() >= 8 && attributes.easy >= 9 {
        penalties.push(MatchPenalty::TooEasyForTinkerer);
    }
    penalties
}

/// Non-empty candidate pool in catalog order.
struct Pool<'a> {
    head: &'a CatalogItem,
    tail: Vec<&'a CatalogItem>,
}

impl<'a> Pool<'a> {
    fn from_items(mut items: impl Iterator<Item = &'a CatalogItem>) -> Option<Self> {
        let head = items.next()?;
        Some(Self {
            head,
            tail: items.collect(),
        })
    }

    fn whole(catalog: &'a Catalog) -> Self {
        Self {
            head: catalog.first(),
            tail: catalog.iter().skip(1).collect(),
        }
    }

    const fn len(&self) -> usize {
        self.tail.len() + 1
    }
}

fn candidate_pool<'a>(
    catalog: &'a Catalog,
    signals: &Signals,
    weights: &MatchWeights,
) -> (Pool<'a>, Eligibility) {
    if !signals.is_senior() {
        return (Pool::whole(catalog), Eligibility::Unfiltered);
    }
    let floor = weights.senior_popularity_floor;
    match Pool::from_items(catalog.iter().filter(|item| item.popularity >= floor)) {
        Some(pool) => {
            let excluded = catalog.len() - pool.len();
            (pool, Eligibility::Filtered { excluded })
        }
        None => {
            warn!(
                "no catalog item reaches the senior popularity floor of {floor}; \
                 scoring the whole catalog"
            );
            (Pool::whole(catalog), Eligibility::Fallback)
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "similarity is derived from a normalised euclidean distance"
)]
fn score_candidate<'a>(
    vector: &UserVector,
    item: &'a CatalogItem,
    weights: &MatchWeights,
) -> CandidateScore<'a> {
    let distance = euclidean(vector, item);
    let normalised = (distance / MAX_DISTANCE).clamp(0.0_f64, 1.0_f64);
    let similarity = 1.0_f64 - normalised;
    let popularity = weights.popularity_norm(item.popularity);
    let composite = weights.composite(similarity, popularity, item.trend);
    CandidateScore {
        item,
        distance,
        similarity,
        popularity,
        composite,
    }
}

/// Euclidean distance between a user vector and an item over the four axes.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "distance is a square root of summed squares"
)]
pub fn euclidean(vector: &UserVector, item: &CatalogItem) -> f64 {
    let squares: i32 = Axis::ALL
        .iter()
        .map(|&axis| {
            let delta = i32::from(vector.get(axis)) - i32::from(item.axis(axis));
            delta * delta
        })
        .sum();
    f64::from(squares).sqrt()
}
