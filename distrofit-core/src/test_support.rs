//! Fixture builders for synthetic catalogs used by unit and behaviour tests.

use crate::{Attributes, Catalog, CatalogError, CatalogItem, Trend};

/// Builder for a single synthetic [`CatalogItem`].
///
/// Defaults to mid-range attributes, popularity 1000 and a stable trend.
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    item: CatalogItem,
}

impl ItemBuilder {
    /// Start a builder for `id`; the display name mirrors the id.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            item: CatalogItem {
                id: id.to_owned(),
                name: id.to_owned(),
                attributes: Attributes {
                    rolling: 5,
                    easy: 5,
                    diy: 5,
                    performance: 5,
                    dev_focus: 5,
                },
                popularity: 1000,
                trend: Trend::Stable,
            },
        }
    }

    /// Set the four matching axes.
    #[must_use]
    pub fn axes(mut self, rolling: u8, diy: u8, performance: u8, dev_focus: u8) -> Self {
        self.item.attributes.rolling = rolling;
        self.item.attributes.diy = diy;
        self.item.attributes.performance = performance;
        self.item.attributes.dev_focus = dev_focus;
        self
    }

    /// Set the ease-of-use attribute.
    #[must_use]
    pub fn easy(mut self, easy: u8) -> Self {
        self.item.attributes.easy = easy;
        self
    }

    /// Set popularity.
    #[must_use]
    pub fn popularity(mut self, popularity: u32) -> Self {
        self.item.popularity = popularity;
        self
    }

    /// Set trend.
    #[must_use]
    pub fn trend(mut self, trend: Trend) -> Self {
        self.item.trend = trend;
        self
    }

    /// Finish the item.
    #[must_use]
    pub fn build(self) -> CatalogItem {
        self.item
    }
}

/// Build a validated catalog from builders, preserving their order.
///
/// # Errors
/// Propagates [`CatalogError`] from [`Catalog::new`].
pub fn catalog_of<I>(builders: I) -> Result<Catalog, CatalogError>
where
    I: IntoIterator<Item = ItemBuilder>,
{
    Catalog::new(builders.into_iter().map(ItemBuilder::build).collect())
}
