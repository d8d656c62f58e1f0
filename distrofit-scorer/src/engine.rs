//! The end-to-end scoring pipeline.

use distrofit_core::{
    Catalog, Highlight, MatchResult, ProfileScorer, ScoreBreakdown, ScoreResult, Signals,
    UserVector,
};

use crate::{
    CandidateScore, Contribution, MatchWeights, WeightsError, apply_penalties, categorize,
    extract_with_trace, highlights, normalize, rank,
};

/// Everything computed while scoring one profile.
///
/// The [`ScoreResult`] is the public answer; the remaining fields expose the
/// intermediate artefacts for diagnostics and explanation layers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Assessment<'a> {
    /// Derived user vector.
    pub vector: UserVector,
    /// Evidence behind each axis, in rule order.
    pub contributions: Vec<Contribution>,
    /// Metrics for every eligible candidate, in catalog order.
    pub candidates: Vec<CandidateScore<'a>>,
    /// Winner with penalties applied.
    #[cfg_attr(feature = "serde", serde(rename = "match"))]
    pub matched: MatchResult<'a>,
    /// How the integer score was assembled.
    pub breakdown: ScoreBreakdown,
    /// Reasons the winner suits the profile.
    pub highlights: Vec<Highlight>,
    /// Final result.
    pub result: ScoreResult,
}

/// Deterministic profile scorer over a [`Catalog`].
///
/// # Examples
/// ```
/// use distrofit_core::{Catalog, ExperienceLevel, ProfileScorer, Signals};
/// use distrofit_scorer::FitEngine;
///
/// let engine = FitEngine::default();
/// let catalog = Catalog::builtin();
/// let signals = Signals::new()
///     .with_experience(ExperienceLevel::Senior)
///     .with_keywords(["hyprland", "dotfiles"])
///     .with_tech_stack(["rust", "zig"]);
/// let result = engine.score(&signals, &catalog);
/// assert!(result.score <= 100);
/// assert!(catalog.get(&result.recommendation.id).is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FitEngine {
    weights: MatchWeights,
}

impl FitEngine {
    /// Build an engine from custom weights.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when the weights fail validation.
    pub fn new(weights: MatchWeights) -> Result<Self, WeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights in use.
    #[must_use]
    pub const fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    /// Run the full pipeline and keep every intermediate artefact.
    #[must_use]
    pub fn assess<'a>(&self, signals: &Signals, catalog: &'a Catalog) -> Assessment<'a> {
        let trace = extract_with_trace(signals);
        let vector = trace.vector;
        let ranking = rank(&vector, catalog, signals, &self.weights);
        let matched = apply_penalties(&ranking, &vector, signals);
        let breakdown = normalize(&matched, &vector, signals);
        let result = ScoreResult {
            score: breakdown.score,
            category: categorize(breakdown.score),
            confidence: matched.quality,
            recommendation: matched.item.into(),
        };
        Assessment {
            vector,
            contributions: trace.contributions,
            candidates: ranking.candidates,
            highlights: highlights(&vector, matched.item),
            matched,
            breakdown,
            result,
        }
    }
}

impl ProfileScorer for FitEngine {
    fn score(&self, signals: &Signals, catalog: &Catalog) -> ScoreResult {
        self.assess(signals, catalog).result
    }
}

/// Score `signals` against `catalog` with the shipped weights.
///
/// # Examples
/// ```
/// use distrofit_core::{Catalog, Signals};
/// use distrofit_scorer::score;
///
/// let catalog = Catalog::builtin();
/// let first = score(&Signals::new(), &catalog);
/// let second = score(&Signals::new(), &catalog);
/// assert_eq!(first, second);
/// ```
#[must_use]
pub fn score(signals: &Signals, catalog: &Catalog) -> ScoreResult {
    FitEngine::default().score(signals, catalog)
}
