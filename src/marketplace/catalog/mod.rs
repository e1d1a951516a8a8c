//! Listing catalog: the filter/sort engine behind product, pet, and service
//! browse pages, plus the CSV listing-sheet importer sellers upload through.

pub mod domain;
pub mod filter;
pub mod import;
pub mod price;
pub mod router;

#[cfg(test)]
mod tests;

pub use domain::{CatalogItem, FilterCriteria, ListingId, PriceRange, SortKey};
pub use filter::apply;
pub use import::{import_listings, import_listings_from_path, CatalogImportError};
pub use price::{format_price, parse_price};
pub use router::catalog_router;
