use std::collections::BTreeSet;

use super::domain::{CatalogItem, FilterCriteria, SortKey};

/// Substring aliases for coarse species filters. Breed strings are free text
/// entered by sellers, so a "dogs" filter has to match breeds that never
/// mention the word "dog".
const SPECIES_ALIASES: &[(&str, &[&str])] = &[
    (
        "dogs",
        &[
            "dog",
            "shepherd",
            "rottweiler",
            "retriever",
            "husky",
            "beagle",
            "labrador",
        ],
    ),
    ("cats", &["cat", "siamese", "persian", "kitten", "sphynx"]),
    ("birds", &["bird", "parrot", "macaw", "cockatiel", "budgie"]),
    ("fish", &["fish", "betta", "goldfish", "guppy", "tetra"]),
];

/// Substring aliases for age-group filters against free-text age strings.
const AGE_ALIASES: &[(&str, &[&str])] = &[
    ("puppy", &["month", "puppy", "kitten"]),
    ("adult", &["year", "adult"]),
    ("senior", &["senior"]),
];

/// Filter `items` down to those matching every active criterion, then order
/// the survivors by `sort`.
///
/// Pure: `items` is never mutated and a new sequence is returned. Sorting is
/// stable, so equal keys keep their original relative order and re-applying
/// the same sort never reshuffles ties.
pub fn apply(items: &[CatalogItem], criteria: &FilterCriteria, sort: SortKey) -> Vec<CatalogItem> {
    // All-default criteria match everything; skip the predicate pass.
    let mut matched: Vec<CatalogItem> = if criteria.is_empty() {
        items.to_vec()
    } else {
        items
            .iter()
            .filter(|item| matches(item, criteria))
            .cloned()
            .collect()
    };

    match sort {
        SortKey::Default => {}
        SortKey::PriceAscending => {
            matched.sort_by(|a, b| sort_price(a).total_cmp(&sort_price(b)));
        }
        SortKey::PriceDescending => {
            matched.sort_by(|a, b| sort_price(b).total_cmp(&sort_price(a)));
        }
        SortKey::RatingDescending => {
            matched.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        }
    }

    matched
}

fn matches(item: &CatalogItem, criteria: &FilterCriteria) -> bool {
    matches_categories(item, &criteria.categories)
        && matches_price(item, criteria)
        && matches_rating(item, &criteria.rating_thresholds)
        && matches_tag_groups(item, criteria)
        && matches_aliased_text(item, &criteria.breeds, SPECIES_ALIASES)
        && matches_age(item, &criteria.age_groups)
}

fn matches_categories(item: &CatalogItem, categories: &BTreeSet<String>) -> bool {
    if categories.is_empty() {
        return true;
    }

    categories.iter().any(|selected| {
        if item.category.eq_ignore_ascii_case(selected) {
            return true;
        }
        let haystack = category_haystack(item);
        alias_substrings(selected, SPECIES_ALIASES)
            .map(|needles| contains_any(&haystack, needles))
            .unwrap_or(false)
    })
}

/// Items with no listed price fail any active price filter; that asymmetry is
/// intentional (unpriced consultation services disappear once a bound is
/// set, and show when none is).
fn matches_price(item: &CatalogItem, criteria: &FilterCriteria) -> bool {
    let Some(range) = &criteria.price_range else {
        return true;
    };
    let Some(price) = item.price else {
        return false;
    };

    let (low, high) = range.bounds();
    price >= low && price <= high
}

fn matches_rating(item: &CatalogItem, thresholds: &[f32]) -> bool {
    if thresholds.is_empty() {
        return true;
    }

    // Selecting several checkboxes widens the filter: the least restrictive
    // threshold wins.
    let floor = thresholds.iter().copied().fold(f32::INFINITY, f32::min);
    item.rating >= floor
}

fn matches_tag_groups(item: &CatalogItem, criteria: &FilterCriteria) -> bool {
    criteria.tag_groups.values().all(|selected| {
        if selected.is_empty() {
            return true;
        }
        selected.iter().any(|tag| {
            item.tags
                .iter()
                .any(|item_tag| item_tag.eq_ignore_ascii_case(tag))
        })
    })
}

fn matches_age(item: &CatalogItem, age_groups: &BTreeSet<String>) -> bool {
    if age_groups.is_empty() {
        return true;
    }

    let Some(age) = &item.age else {
        return false;
    };
    let haystack = age.to_lowercase();

    age_groups.iter().any(|selected| {
        match alias_substrings(selected, AGE_ALIASES) {
            Some(needles) => contains_any(&haystack, needles),
            None => haystack.contains(&selected.to_lowercase()),
        }
    })
}

/// Breed-style filters: OR within the selected set, matched against the
/// item's breed and category text through the species alias table.
fn matches_aliased_text(
    item: &CatalogItem,
    selected: &BTreeSet<String>,
    aliases: &'static [(&'static str, &'static [&'static str])],
) -> bool {
    if selected.is_empty() {
        return true;
    }

    let haystack = category_haystack(item);
    selected.iter().any(|label| {
        match alias_substrings(label, aliases) {
            Some(needles) => contains_any(&haystack, needles),
            None => haystack.contains(&label.to_lowercase()),
        }
    })
}

fn category_haystack(item: &CatalogItem) -> String {
    let mut haystack = item.category.to_lowercase();
    if let Some(breed) = &item.breed {
        haystack.push(' ');
        haystack.push_str(&breed.to_lowercase());
    }
    haystack
}

fn alias_substrings(
    label: &str,
    table: &'static [(&'static str, &'static [&'static str])],
) -> Option<&'static [&'static str]> {
    let normalized = label.trim().to_lowercase();
    table
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, needles)| *needles)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Missing prices sort as zero, matching the defensive parse value.
fn sort_price(item: &CatalogItem) -> f64 {
    item.price.unwrap_or(0.0)
}
