//! Structured profile signals produced by an upstream extraction step.
//!
//! The engine never inspects raw text. Every collection is a set so that
//! repeated terms cannot count twice, and iteration order is sorted and
//! therefore stable across runs.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Coarse estimate of a profile's experience.
///
/// # Examples
/// ```
/// use distrofit_core::ExperienceLevel;
///
/// assert_eq!("senior".parse::<ExperienceLevel>(), Ok(ExperienceLevel::Senior));
/// assert_eq!(ExperienceLevel::default(), ExperienceLevel::Mid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ExperienceLevel {
    /// Early-career profile.
    Junior,
    /// Neither junior nor senior.
    #[default]
    Mid,
    /// Experienced profile.
    Senior,
}

impl ExperienceLevel {
    /// Return the level as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Mid => "mid",
            Self::Senior => "senior",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "junior" => Ok(Self::Junior),
            "mid" => Ok(Self::Mid),
            "senior" => Ok(Self::Senior),
            _ => Err(format!("unknown experience level '{s}'")),
        }
    }
}

/// Overall polarity of the analysed profile.
///
/// Carried through for downstream consumers; scoring ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Sentiment {
    /// Positive tone.
    Positive,
    /// Neutral tone.
    #[default]
    Neutral,
    /// Negative tone.
    Negative,
}

/// Pre-extracted evidence about a profile.
///
/// Empty collections mean "no evidence" and are always valid.
///
/// # Examples
/// ```
/// use distrofit_core::{ExperienceLevel, Signals};
///
/// let signals = Signals::new()
///     .with_experience(ExperienceLevel::Senior)
///     .with_keywords(["kubernetes", "devops"])
///     .with_tech_stack(["go", "rust"]);
/// assert!(signals.keywords.contains("devops"));
/// assert_eq!(signals.tech_stack.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Signals {
    /// Broad subject areas.
    pub topics: BTreeSet<String>,
    /// Overall tone.
    pub sentiment: Sentiment,
    /// Experience estimate.
    pub experience_level: ExperienceLevel,
    /// Free-form keywords.
    pub keywords: BTreeSet<String>,
    /// Languages, tools and platforms.
    pub tech_stack: BTreeSet<String>,
}

impl Signals {
    /// Construct empty signals for a mid-level profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the experience level while returning `self` for chaining.
    #[must_use]
    pub fn with_experience(mut self, level: ExperienceLevel) -> Self {
        self.experience_level = level;
        self
    }

    /// Set the sentiment while returning `self` for chaining.
    #[must_use]
    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = sentiment;
        self
    }

    /// Add topics while returning `self` for chaining.
    #[must_use]
    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics.extend(topics.into_iter().map(Into::into));
        self
    }

    /// Add keywords while returning `self` for chaining.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Add tech-stack terms while returning `self` for chaining.
    #[must_use]
    pub fn with_tech_stack<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech_stack.extend(terms.into_iter().map(Into::into));
        self
    }

    /// Report whether the profile is senior.
    #[must_use]
    pub fn is_senior(&self) -> bool {
        self.experience_level == ExperienceLevel::Senior
    }
}
