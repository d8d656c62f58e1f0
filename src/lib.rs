//! Facade crate for the distrofit matching engine.
//!
//! This crate re-exports the core domain types and, behind the `scorer`
//! feature, the deterministic scoring pipeline.

#![forbid(unsafe_code)]

pub use distrofit_core::{
    Adjustment, Attributes, Axis, Catalog, CatalogError, CatalogItem, Eligibility,
    ExperienceLevel, FitCategory, Highlight, MatchPenalty, MatchResult, ProfileScorer,
    Recommendation, ScoreBreakdown, ScoreResult, Sentiment, Signals, Trend, UserVector,
};

#[cfg(feature = "scorer")]
pub use distrofit_scorer::{Assessment, FitEngine, MatchWeights, WeightsError, score};
