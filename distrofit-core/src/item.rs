//! Catalog items: the scorable distributions and their fixed attributes.

use std::fmt;
use std::str::FromStr;

use crate::Axis;

/// Upper bound shared by every attribute and vector axis.
pub const MAX_AXIS_VALUE: u8 = 10;

/// Directional popularity momentum of a catalog item.
///
/// # Examples
/// ```
/// use distrofit_core::Trend;
///
/// assert_eq!(Trend::Rising.as_str(), "rising");
/// assert_eq!("declining".parse::<Trend>(), Ok(Trend::Declining));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Trend {
    /// Gaining users.
    Rising,
    /// Holding steady.
    #[default]
    Stable,
    /// Losing users.
    Declining,
}

impl Trend {
    /// Return the trend as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Stable => "stable",
            Self::Declining => "declining",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Trend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rising" => Ok(Self::Rising),
            "stable" => Ok(Self::Stable),
            "declining" => Ok(Self::Declining),
            _ => Err(format!("unknown trend '{s}'")),
        }
    }
}

/// Fixed attribute vector of a catalog item, each value in `0..=10`.
///
/// `easy` is not one of the matching axes; it only feeds the contextual
/// penalties and adjustments applied to the winning item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    /// Release-cadence aggressiveness (LTS at 0, bleeding edge at 10).
    pub rolling: u8,
    /// Out-of-the-box ease of use.
    pub easy: u8,
    /// Expected customisation and control.
    pub diy: u8,
    /// Optimisation focus.
    pub performance: u8,
    /// Orientation towards development workflows.
    pub dev_focus: u8,
}

impl Attributes {
    /// Return the value stored for a matching axis.
    #[must_use]
    pub const fn axis(&self, axis: Axis) -> u8 {
        match axis {
            Axis::Rolling => self.rolling,
            Axis::Diy => self.diy,
            Axis::Performance => self.performance,
            Axis::DevFocus => self.dev_focus,
        }
    }

    /// Iterate over `(name, value)` pairs for every attribute, `easy`
    /// included, in declaration order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, u8)> {
        [
            ("rolling", self.rolling),
            ("easy", self.easy),
            ("diy", self.diy),
            ("performance", self.performance),
            ("dev_focus", self.dev_focus),
        ]
        .into_iter()
    }
}

/// A single scorable distribution.
///
/// # Examples
/// ```
/// use distrofit_core::{Attributes, Axis, CatalogItem, Trend};
///
/// let item = CatalogItem {
///     id: "debian".into(),
///     name: "Debian".into(),
///     attributes: Attributes { rolling: 1, easy: 7, diy: 6, performance: 7, dev_focus: 8 },
///     popularity: 1589,
///     trend: Trend::Stable,
/// };
/// assert_eq!(item.axis(Axis::DevFocus), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogItem {
    /// Stable identifier, unique within a catalog.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Attribute vector.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub attributes: Attributes,
    /// Community-metric proxy (hits per day in the shipped dataset).
    pub popularity: u32,
    /// Popularity momentum.
    #[cfg_attr(feature = "serde", serde(default))]
    pub trend: Trend,
}

impl CatalogItem {
    /// Return the attribute value for a matching axis.
    #[must_use]
    pub const fn axis(&self, axis: Axis) -> u8 {
        self.attributes.axis(axis)
    }
}
