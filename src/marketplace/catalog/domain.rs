use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(pub String);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single browsable listing: product, pet, or service.
///
/// Consultation-style services (doctors, trainers) carry no listed price, so
/// `price` is optional. `breed`, `age`, and `gender` are free text entered by
/// sellers and only consulted by the pet-specific filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ListingId,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// 0 to 5 in half-star steps.
    pub rating: f32,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// Inclusive price window. `max: None` means unbounded above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PriceRange {
    #[serde(default)]
    pub min: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl PriceRange {
    /// Resolved `(low, high)` bounds. An inverted range is clamped by
    /// swapping rather than rejected, so bad UI input degrades gracefully.
    pub fn bounds(&self) -> (f64, f64) {
        let max = self.max.unwrap_or(f64::INFINITY);
        if self.min > max {
            (max, self.min)
        } else {
            (self.min, max)
        }
    }
}

/// User-selected filter state for one catalog interaction.
///
/// Every field defaults to "no constraint"; an all-default criteria set
/// matches every item. Tag groups are ANDed against each other and ORed
/// within (an item must hit at least one selected tag in every non-empty
/// group).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub categories: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    /// Selected rating checkboxes ("3 stars & above" style). An item passes
    /// when its rating meets the least restrictive selected threshold.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rating_thresholds: Vec<f32>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tag_groups: BTreeMap<String, BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub breeds: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub age_groups: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.price_range.is_none()
            && self.rating_thresholds.is_empty()
            && self.tag_groups.values().all(BTreeSet::is_empty)
            && self.breeds.is_empty()
            && self.age_groups.is_empty()
    }
}

/// Ordering applied after filtering. `Default` preserves the incoming order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Default,
    PriceAscending,
    PriceDescending,
    RatingDescending,
}
