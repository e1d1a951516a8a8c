//! Core domain logic for the PetVerse marketplace.
//!
//! Two independent workflow modules live under [`marketplace`]: the catalog
//! filter/sort engine that powers listing pages, and the admin review state
//! machine for seller and service-provider onboarding applications. Both are
//! pure libraries; the HTTP routers and the CLI binary are thin shells over
//! them.

pub mod config;
pub mod error;
pub mod marketplace;
pub mod telemetry;
