//! The immutable catalog of scorable items.
//!
//! A [`Catalog`] is validated once at construction and never mutated
//! afterwards, so a single instance can be shared by any number of
//! concurrent scoring calls. Declaration order is preserved because the
//! matcher breaks ties in favour of the first item encountered.

use std::collections::HashSet;

use thiserror::Error;

use crate::CatalogItem;
use crate::item::MAX_AXIS_VALUE;

mod builtin;

/// Errors returned by [`Catalog::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No items were supplied.
    #[error("catalog must contain at least one item")]
    Empty,
    /// An item had a blank identifier.
    #[error("catalog item at position {index} has an empty id")]
    MissingIdentifier {
        /// Position of the offending item.
        index: usize,
    },
    /// Two items shared an identifier.
    #[error("catalog item id '{id}' appears more than once")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
    /// An attribute fell outside `0..=10`.
    #[error("catalog item '{id}' has {attribute}={value}, expected 0..=10")]
    AttributeOutOfRange {
        /// Identifier of the offending item.
        id: String,
        /// Name of the attribute.
        attribute: &'static str,
        /// Value supplied.
        value: u8,
    },
}

/// Iterator over catalog items in declaration order.
pub type Iter<'a> = std::iter::Chain<std::iter::Once<&'a CatalogItem>, std::slice::Iter<'a, CatalogItem>>;

/// Validated, ordered, non-empty collection of [`CatalogItem`]s.
///
/// The first item is stored apart from the rest so that non-emptiness is
/// carried by the type rather than re-checked by every consumer.
///
/// # Examples
/// ```
/// use distrofit_core::Catalog;
///
/// let catalog = Catalog::builtin();
/// assert_eq!(catalog.len(), 33);
/// assert_eq!(catalog.first().id, "cachyos");
/// assert_eq!(catalog.get("arch").map(|item| item.name.as_str()), Some("Arch Linux"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<CatalogItem>", into = "Vec<CatalogItem>")
)]
pub struct Catalog {
    first: CatalogItem,
    rest: Vec<CatalogItem>,
}

impl Catalog {
    /// Validate and construct a catalog, keeping the supplied order.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when the list is empty, an id is blank or
    /// repeated, or an attribute exceeds the axis maximum.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            validate_item(index, item, &mut seen)?;
        }
        let mut remaining = items.into_iter();
        let first = remaining.next().ok_or(CatalogError::Empty)?;
        Ok(Self {
            first,
            rest: remaining.collect(),
        })
    }

    /// The 33 distributions shipped with the engine, in curated order.
    #[must_use]
    pub fn builtin() -> Self {
        let (first, rest) = builtin::items();
        Self { first, rest }
    }

    /// The first item in declaration order.
    #[must_use]
    pub const fn first(&self) -> &CatalogItem {
        &self.first
    }

    /// Iterate over items in declaration order.
    pub fn iter(&self) -> Iter<'_> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.iter().find(|item| item.id == id)
    }

    /// Number of items; always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rest.len() + 1
    }

    /// Always `false`; provided for API symmetry with `len`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Highest popularity value in the catalog.
    #[must_use]
    pub fn max_popularity(&self) -> u32 {
        self.iter()
            .map(|item| item.popularity)
            .max()
            .unwrap_or(self.first.popularity)
    }

    /// Copy the items into a vector, preserving order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<CatalogItem> {
        self.iter().cloned().collect()
    }
}

fn validate_item<'a>(
    index: usize,
    item: &'a CatalogItem,
    seen: &mut HashSet<&'a str>,
) -> Result<(), CatalogError> {
    if item.id.trim().is_empty() {
        return Err(CatalogError::MissingIdentifier { index });
    }
    if !seen.insert(item.id.as_str()) {
        return Err(CatalogError::DuplicateId {
            id: item.id.clone(),
        });
    }
    if let Some((attribute, value)) = item
        .attributes
        .named()
        .find(|&(_, value)| value > MAX_AXIS_VALUE)
    {
        return Err(CatalogError::AttributeOutOfRange {
            id: item.id.clone(),
            attribute,
            value,
        });
    }
    Ok(())
}

impl TryFrom<Vec<CatalogItem>> for Catalog {
    type Error = CatalogError;

    fn try_from(items: Vec<CatalogItem>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl From<Catalog> for Vec<CatalogItem> {
    fn from(catalog: Catalog) -> Self {
        let mut items = Self::with_capacity(catalog.len());
        items.push(catalog.first);
        items.extend(catalog.rest);
        items
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attributes, Trend};
    use rstest::{fixture, rstest};

    #[fixture]
    fn item() -> CatalogItem {
        CatalogItem {
            id: "void".into(),
            name: "Void Linux".into(),
            attributes: Attributes {
                rolling: 10,
                easy: 3,
                diy: 9,
                performance: 9,
                dev_focus: 8,
            },
            popularity: 203,
            trend: Trend::Stable,
        }
    }

    #[rstest]
    fn rejects_empty_catalog() {
        assert_eq!(Catalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[rstest]
    fn rejects_duplicate_ids(item: CatalogItem) {
        let err = Catalog::new(vec![item.clone(), item]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId { id: "void".into() });
    }

    #[rstest]
    fn rejects_blank_ids(mut item: CatalogItem) {
        item.id = "  ".into();
        let err = Catalog::new(vec![item]).unwrap_err();
        assert_eq!(err, CatalogError::MissingIdentifier { index: 0 });
    }

    #[rstest]
    fn rejects_out_of_range_attributes(mut item: CatalogItem) {
        item.attributes.easy = 11;
        let err = Catalog::new(vec![item]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::AttributeOutOfRange {
                id: "void".into(),
                attribute: "easy",
                value: 11,
            }
        );
    }

    #[rstest]
    fn preserves_declaration_order(item: CatalogItem) {
        let mut second = item.clone();
        second.id = "artix".into();
        let catalog = Catalog::new(vec![item, second]).expect("valid catalog");
        let ids: Vec<_> = catalog.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, ["void", "artix"]);
        assert_eq!(Vec::from(catalog).len(), 2);
    }

    #[rstest]
    fn builtin_catalog_passes_validation() {
        let builtin = Catalog::builtin();
        let validated = Catalog::new(builtin.to_vec()).expect("builtin is valid");
        assert_eq!(validated, builtin);
        assert_eq!(builtin.len(), 33);
        assert_eq!(builtin.max_popularity(), 3698);
        assert_eq!(builtin.first().id, "cachyos");
    }
}
