//! Core domain types for the distrofit matching engine.
//!
//! The crate models the static catalog of Linux distributions, the
//! pre-extracted profile [`Signals`] consumed by the engine, the derived
//! [`UserVector`], and the structured results the engine produces. Catalog
//! construction validates its input so that malformed data fails at startup
//! instead of per request.
//!
//! # Examples
//!
//! ```
//! use distrofit_core::{Axis, Catalog, ExperienceLevel, Signals};
//!
//! let catalog = Catalog::builtin();
//! let signals = Signals::new().with_experience(ExperienceLevel::Junior);
//! assert!(!catalog.is_empty());
//! assert_eq!(Axis::ALL.len(), 4);
//! assert!(!signals.is_senior());
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod item;
pub mod outcome;
pub mod scorer;
pub mod signals;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod vector;

pub use catalog::{Catalog, CatalogError};
pub use item::{Attributes, CatalogItem, MAX_AXIS_VALUE, Trend};
pub use outcome::{
    Adjustment, Eligibility, FitCategory, Highlight, MAX_SCORE, MatchPenalty, MatchResult,
    Recommendation, ScoreBreakdown, ScoreResult, clamp_score,
};
pub use scorer::ProfileScorer;
pub use signals::{ExperienceLevel, Sentiment, Signals};
pub use vector::{Axis, UserVector};
