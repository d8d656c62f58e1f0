//! Results produced by the scoring pipeline.
//!
//! Besides the headline [`ScoreResult`], the pipeline reports every rule that
//! fired as a structured fact ([`MatchPenalty`], [`Adjustment`],
//! [`Highlight`]) so that explanation layers can render prose without
//! re-deriving the engine's decisions.

use std::fmt;

use crate::{Axis, CatalogItem};

/// Upper bound of the integer fit score.
pub const MAX_SCORE: u8 = 100;

/// Qualitative fit label derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitCategory {
    /// Score of 75 or more.
    #[cfg_attr(feature = "serde", serde(rename = "strong_fit"))]
    Strong,
    /// Score from 50 to 74.
    #[cfg_attr(feature = "serde", serde(rename = "potential"))]
    Potential,
    /// Score below 50.
    #[cfg_attr(feature = "serde", serde(rename = "not_fit"))]
    None,
}

impl FitCategory {
    /// Return the wire name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong_fit",
            Self::Potential => "potential",
            Self::None => "not_fit",
        }
    }
}

impl fmt::Display for FitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Multiplicative penalty applied to a senior profile's winning match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MatchPenalty {
    /// Strong developer profile matched a generic, low dev-focus item.
    GenericForDeveloper,
    /// Tinkering profile matched an item built for ease of use.
    TooEasyForTinkerer,
}

/// How the candidate set was formed before selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case", tag = "kind")
)]
pub enum Eligibility {
    /// No filter applied.
    Unfiltered,
    /// Items below the popularity floor were excluded.
    Filtered {
        /// Number of excluded items.
        excluded: usize,
    },
    /// The filter excluded every item, so the whole catalog was scored.
    Fallback,
}

/// Winning catalog item and its match quality.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatchResult<'a> {
    /// Selected item, borrowed from the catalog.
    pub item: &'a CatalogItem,
    /// Post-penalty quality in `0.0..=1.0`.
    pub quality: f64,
    /// Composite before penalties and before clamping.
    pub composite: f64,
    /// Penalties applied after selection, in application order.
    pub penalties: Vec<MatchPenalty>,
    /// How the candidate set was formed.
    pub eligibility: Eligibility,
}

/// An additive integer adjustment applied by the score normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case", tag = "rule")
)]
pub enum Adjustment {
    /// Junior profile, easy item.
    JuniorEasyItem,
    /// Junior profile, extreme DIY item.
    JuniorDemandingItem,
    /// Senior profile, strongly developer-oriented item.
    SeniorDeveloperItem,
    /// Senior profile, customisable item.
    SeniorCustomisableItem,
    /// Senior profile, item that is simple to the point of rigidity.
    SeniorSimplisticItem,
    /// Developer-heavy profile, item with little developer focus.
    DevFocusMismatch,
    /// Performance-hungry profile, item with weak performance.
    PerformanceMismatch,
    /// Several axes agree within one point.
    CloseAxes {
        /// Number of agreeing axes.
        count: u8,
    },
    /// Very niche item.
    NicheItem,
    /// Niche item that is also losing users.
    DecliningNicheItem,
}

impl Adjustment {
    /// Integer delta contributed to the score.
    #[must_use]
    pub const fn delta(self) -> i32 {
        match self {
            Self::JuniorEasyItem | Self::SeniorDeveloperItem => 5,
            Self::JuniorDemandingItem => -10,
            Self::SeniorCustomisableItem => 3,
            Self::SeniorSimplisticItem | Self::NicheItem => -3,
            Self::DevFocusMismatch | Self::PerformanceMismatch | Self::DecliningNicheItem => -5,
            Self::CloseAxes { count } => {
                if count >= 3 {
                    8
                } else if count == 2 {
                    4
                } else {
                    0
                }
            }
        }
    }
}

/// How the integer score was assembled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    /// `round(quality * 100)`.
    pub base: i32,
    /// Adjustments that fired.
    pub adjustments: Vec<Adjustment>,
    /// Final score after clamping.
    pub score: u8,
}

impl ScoreBreakdown {
    /// Sum of all adjustment deltas.
    #[must_use]
    pub fn adjustment_total(&self) -> i32 {
        self.adjustments.iter().map(|adjustment| adjustment.delta()).sum()
    }
}

/// A reason the winning item suits the profile, for explanation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Highlight {
    /// Profile favours current software and the item is rolling.
    RollingRelease,
    /// Profile likes to customise and the item offers control.
    Customisation,
    /// Profile needs performance and the item is optimised for it.
    Performance,
    /// The item is growing in popularity.
    Rising,
}

impl Highlight {
    /// Axis the highlight is about, if any.
    #[must_use]
    pub const fn axis(self) -> Option<Axis> {
        match self {
            Self::RollingRelease => Some(Axis::Rolling),
            Self::Customisation => Some(Axis::Diy),
            Self::Performance => Some(Axis::Performance),
            Self::Rising => None,
        }
    }
}

/// Identifies the recommended item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    /// Catalog id.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl From<&CatalogItem> for Recommendation {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
        }
    }
}

/// Final outcome of scoring one profile.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreResult {
    /// Fit score in `0..=100`.
    pub score: u8,
    /// Label derived from `score`.
    pub category: FitCategory,
    /// Match quality that produced the score, in `0.0..=1.0`.
    pub confidence: f64,
    /// Winning catalog item.
    pub recommendation: Recommendation,
}

/// Clamp a raw integer score into `0..=100`.
///
/// # Examples
/// ```
/// use distrofit_core::clamp_score;
///
/// assert_eq!(clamp_score(-7), 0);
/// assert_eq!(clamp_score(64), 64);
/// assert_eq!(clamp_score(113), 100);
/// ```
#[must_use]
pub fn clamp_score(raw: i32) -> u8 {
    u8::try_from(raw.clamp(0, i32::from(MAX_SCORE))).unwrap_or(MAX_SCORE)
}
