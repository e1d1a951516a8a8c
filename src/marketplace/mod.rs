//! Marketplace workflow modules.
//!
//! `catalog` and `review` are deliberately independent: the listing filter
//! engine never touches onboarding state and vice versa. Each module owns its
//! domain types, pure query logic, and an axum router for the HTTP surface.

pub mod catalog;
pub mod review;
