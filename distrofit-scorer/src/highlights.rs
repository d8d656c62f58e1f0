//! Structured reasons a recommendation suits a profile.

use distrofit_core::{CatalogItem, Highlight, Trend, UserVector};

/// Minimum value, on both sides, for an axis to count as shared enthusiasm.
const SHARED_AXIS_FLOOR: u8 = 7;
/// Minimum item performance for a performance highlight.
const PERFORMANCE_ITEM_FLOOR: u8 = 8;

/// Collect the highlights for a winning item, in a fixed order.
#[must_use]
pub fn highlights(vector: &UserVector, item: &CatalogItem) -> Vec<Highlight> {
    let attributes = &item.attributes;
    [
        (
            vector.rolling() >= SHARED_AXIS_FLOOR && attributes.rolling >= SHARED_AXIS_FLOOR,
            Highlight::RollingRelease,
        ),
        (
            vector.diy() >= SHARED_AXIS_FLOOR && attributes.diy >= SHARED_AXIS_FLOOR,
            Highlight::Customisation,
        ),
        (
            vector.performance() >= SHARED_AXIS_FLOOR
                && attributes.performance >= PERFORMANCE_ITEM_FLOOR,
            Highlight::Performance,
        ),
        (item.trend == Trend::Rising, Highlight::Rising),
    ]
    .into_iter()
    .filter_map(|(applies, highlight)| applies.then_some(highlight))
    .collect()
}
