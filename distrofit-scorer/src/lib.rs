//! Deterministic profile-to-distribution matching.
//!
//! Scoring runs as a short pipeline over a [`Catalog`](distrofit_core::Catalog):
//! - **Dimension extraction** projects [`Signals`](distrofit_core::Signals)
//!   onto four axes using static, ordered keyword tables.
//! - **Matching** filters the eligible candidates, scores each by a weighted
//!   blend of geometric similarity, log-scaled popularity and trend, and keeps
//!   the first strictly best composite.
//! - **Normalization** turns the match quality into a `0..=100` score through
//!   additive contextual adjustments, and **categorization** labels it.
//!
//! [`FitEngine`] runs the whole pipeline and implements
//! [`ProfileScorer`](distrofit_core::ProfileScorer); [`FitEngine::assess`]
//! additionally returns every intermediate artefact.
//!
//! # Examples
//!
//! ```
//! use distrofit_core::{Catalog, FitCategory, Signals};
//! use distrofit_scorer::score;
//!
//! let catalog = Catalog::builtin();
//! let signals = Signals::new().with_keywords(["gaming", "vulkan"]);
//! let result = score(&signals, &catalog);
//! assert!(matches!(
//!     result.category,
//!     FitCategory::Strong | FitCategory::Potential | FitCategory::None
//! ));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod category;
mod dimensions;
mod engine;
mod error;
mod highlights;
mod matcher;
mod normalizer;
pub(crate) mod rules;
mod weights;

pub use category::{POTENTIAL_THRESHOLD, STRONG_THRESHOLD, categorize};
pub use dimensions::{Contribution, DimensionTrace, extract, extract_with_trace};
pub use engine::{Assessment, FitEngine, score};
pub use error::WeightsError;
pub use highlights::highlights;
pub use matcher::{
    CandidateScore, GENERIC_FOR_DEVELOPER_FACTOR, MAX_DISTANCE, Ranking,
    TOO_EASY_FOR_TINKERER_FACTOR, apply_penalties, euclidean, match_profile, rank,
};
pub use normalizer::{DECLINING_POPULARITY, NICHE_POPULARITY, close_axes, normalize};
pub use weights::{DEFAULT_REFERENCE_POPULARITY, DEFAULT_SENIOR_POPULARITY_FLOOR, MatchWeights};
