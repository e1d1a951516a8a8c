use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{CatalogItem, ListingId};
use super::price::parse_price;

/// Errors raised while ingesting a seller listing sheet.
#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to open listing sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read listing sheet: {0}")]
    Csv(#[from] csv::Error),
    #[error("listing row {row} is missing an id")]
    MissingId { row: usize },
}

/// Import catalog listings from a CSV sheet at `path`.
pub fn import_listings_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<CatalogItem>, CatalogImportError> {
    let file = File::open(path)?;
    import_listings(file)
}

/// Import catalog listings from any CSV reader.
///
/// Prices and ratings are seller-entered display strings, so both are parsed
/// defensively: comma-grouped prices are stripped before conversion, ratings
/// clamp into the 0-5 band, and malformed numerics degrade instead of
/// failing the row.
pub fn import_listings<R: Read>(reader: R) -> Result<Vec<CatalogItem>, CatalogImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut listings = Vec::new();

    for (index, record) in csv_reader.deserialize::<ListingRow>().enumerate() {
        let row = record?;
        if row.id.is_empty() {
            // Header row is consumed by the reader, so data rows start at 2.
            return Err(CatalogImportError::MissingId { row: index + 2 });
        }

        listings.push(row.into_item());
    }

    Ok(listings)
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Price", default, deserialize_with = "empty_string_as_none")]
    price: Option<String>,
    #[serde(rename = "Rating", default, deserialize_with = "empty_string_as_none")]
    rating: Option<String>,
    #[serde(rename = "Tags", default, deserialize_with = "empty_string_as_none")]
    tags: Option<String>,
    #[serde(rename = "Breed", default, deserialize_with = "empty_string_as_none")]
    breed: Option<String>,
    #[serde(rename = "Age", default, deserialize_with = "empty_string_as_none")]
    age: Option<String>,
    #[serde(rename = "Gender", default, deserialize_with = "empty_string_as_none")]
    gender: Option<String>,
}

impl ListingRow {
    fn into_item(self) -> CatalogItem {
        let price = self.price.as_deref().map(parse_price);
        let rating = self
            .rating
            .as_deref()
            .map(|raw| raw.parse::<f32>().unwrap_or(0.0))
            .unwrap_or(0.0)
            .clamp(0.0, 5.0);
        let tags: BTreeSet<String> = self
            .tags
            .as_deref()
            .map(|raw| {
                raw.split(';')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        CatalogItem {
            id: ListingId(self.id),
            name: self.name,
            category: self.category,
            price,
            rating,
            tags,
            breed: self.breed,
            age: self.age,
            gender: self.gender,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
