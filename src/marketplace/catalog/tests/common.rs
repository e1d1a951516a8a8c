use std::collections::{BTreeMap, BTreeSet};

use crate::marketplace::catalog::domain::{
    CatalogItem, FilterCriteria, ListingId, PriceRange, SortKey,
};

pub(super) fn item(id: &str, name: &str, category: &str, price: Option<f64>) -> CatalogItem {
    CatalogItem {
        id: ListingId(id.to_string()),
        name: name.to_string(),
        category: category.to_string(),
        price,
        rating: 4.0,
        tags: BTreeSet::new(),
        breed: None,
        age: None,
        gender: None,
    }
}

pub(super) fn pet(
    id: &str,
    name: &str,
    category: &str,
    breed: &str,
    age: &str,
    price: f64,
) -> CatalogItem {
    CatalogItem {
        breed: Some(breed.to_string()),
        age: Some(age.to_string()),
        ..item(id, name, category, Some(price))
    }
}

/// The three-pet storefront sample: two dogs and a cat.
pub(super) fn pet_catalog() -> Vec<CatalogItem> {
    vec![
        pet("pet-1", "Bruno", "Dog", "Rottweiler", "2 years", 25005.0),
        pet("pet-2", "Misty", "Cat", "Siamese", "8 months", 24500.0),
        pet("pet-3", "Storm", "Dog", "Husky", "3 months", 9000.0),
    ]
}

pub(super) fn mixed_catalog() -> Vec<CatalogItem> {
    let mut catalog = pet_catalog();
    catalog.push(CatalogItem {
        rating: 4.5,
        tags: tags(&["rubber", "small"]),
        ..item("toy-1", "Chew Ring", "Toys", Some(499.0))
    });
    catalog.push(CatalogItem {
        rating: 3.5,
        tags: tags(&["nylon", "large"]),
        ..item("toy-2", "Tug Rope", "Toys", Some(799.0))
    });
    // Consultation services carry no listed price.
    catalog.push(CatalogItem {
        rating: 5.0,
        ..item("svc-1", "Dr. Rao", "Doctors", None)
    });
    catalog
}

pub(super) fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn labels(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn category_criteria(categories: &[&str]) -> FilterCriteria {
    FilterCriteria {
        categories: labels(categories),
        ..FilterCriteria::default()
    }
}

pub(super) fn price_criteria(min: f64, max: Option<f64>) -> FilterCriteria {
    FilterCriteria {
        price_range: Some(PriceRange { min, max }),
        ..FilterCriteria::default()
    }
}

pub(super) fn tag_group_criteria(groups: &[(&str, &[&str])]) -> FilterCriteria {
    let tag_groups: BTreeMap<String, BTreeSet<String>> = groups
        .iter()
        .map(|(name, selected)| (name.to_string(), labels(selected)))
        .collect();
    FilterCriteria {
        tag_groups,
        ..FilterCriteria::default()
    }
}

pub(super) fn ids(items: &[CatalogItem]) -> Vec<&str> {
    items.iter().map(|item| item.id.0.as_str()).collect()
}

pub(super) const NO_SORT: SortKey = SortKey::Default;
