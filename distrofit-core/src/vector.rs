//! The four matching axes and the per-request user vector.

use std::fmt;

use crate::item::MAX_AXIS_VALUE;

/// One of the four axes shared by user vectors and catalog items.
///
/// # Examples
/// ```
/// use distrofit_core::Axis;
///
/// assert_eq!(Axis::ALL.len(), 4);
/// assert_eq!(Axis::DevFocus.to_string(), "dev_focus");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Axis {
    /// Preference for frequent, bleeding-edge updates.
    Rolling,
    /// Preference for customisation over simplicity.
    Diy,
    /// Need for optimisation and raw performance.
    Performance,
    /// Orientation towards software development.
    DevFocus,
}

impl Axis {
    /// Every axis in canonical order.
    pub const ALL: [Self; 4] = [Self::Rolling, Self::Diy, Self::Performance, Self::DevFocus];

    /// Return the axis as a snake-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rolling => "rolling",
            Self::Diy => "diy",
            Self::Performance => "performance",
            Self::DevFocus => "dev_focus",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A profile's preferences projected onto the four axes.
///
/// Values are always within `0..=10`; constructors clamp larger inputs.
///
/// # Examples
/// ```
/// use distrofit_core::{Axis, UserVector};
///
/// let vector = UserVector::new(5, 12, 3, 5);
/// assert_eq!(vector.get(Axis::Diy), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UserVector {
    rolling: u8,
    diy: u8,
    performance: u8,
    dev_focus: u8,
}

impl UserVector {
    /// Build a vector, clamping each value to the axis maximum.
    #[must_use]
    pub fn new(rolling: u8, diy: u8, performance: u8, dev_focus: u8) -> Self {
        Self {
            rolling: rolling.min(MAX_AXIS_VALUE),
            diy: diy.min(MAX_AXIS_VALUE),
            performance: performance.min(MAX_AXIS_VALUE),
            dev_focus: dev_focus.min(MAX_AXIS_VALUE),
        }
    }

    /// Build a vector from signed running totals, clamping into `0..=10`.
    #[must_use]
    pub fn from_totals(rolling: i32, diy: i32, performance: i32, dev_focus: i32) -> Self {
        Self {
            rolling: clamp_total(rolling),
            diy: clamp_total(diy),
            performance: clamp_total(performance),
            dev_focus: clamp_total(dev_focus),
        }
    }

    /// Return the value for `axis`.
    #[must_use]
    pub const fn get(&self, axis: Axis) -> u8 {
        match axis {
            Axis::Rolling => self.rolling,
            Axis::Diy => self.diy,
            Axis::Performance => self.performance,
            Axis::DevFocus => self.dev_focus,
        }
    }

    /// Rolling-release preference.
    #[must_use]
    pub const fn rolling(&self) -> u8 {
        self.rolling
    }

    /// Customisation preference.
    #[must_use]
    pub const fn diy(&self) -> u8 {
        self.diy
    }

    /// Performance need.
    #[must_use]
    pub const fn performance(&self) -> u8 {
        self.performance
    }

    /// Developer orientation.
    #[must_use]
    pub const fn dev_focus(&self) -> u8 {
        self.dev_focus
    }
}

fn clamp_total(total: i32) -> u8 {
    u8::try_from(total.clamp(0, i32::from(MAX_AXIS_VALUE))).unwrap_or(MAX_AXIS_VALUE)
}
