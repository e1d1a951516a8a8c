//! Seller and service-provider onboarding review.
//!
//! Admins work applications through a small state machine (pending →
//! approved/rejected, rejected → pending again, approved → removed). The
//! service owns the transitions, the query module owns the pure tab/search/
//! sort/pagination views, and the router exposes both over HTTP.

pub mod domain;
pub mod query;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Application, ApplicantType, ApplicationId, ApplicationStatus, ReviewAction};
pub use query::{
    filter_applications, paginate, sort_applications, ApplicationPage, ReviewContext,
    ReviewSortOrder, DEFAULT_PAGE_SIZE,
};
pub use repository::{ApplicationRepository, InMemoryApplicationRepository, RepositoryError};
pub use router::review_router;
pub use service::{ReviewError, ReviewService};
