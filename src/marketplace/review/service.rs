use std::sync::Arc;

use chrono::Utc;

use super::domain::{Application, ApplicationId, ApplicationStatus, ReviewAction};
use super::query::{self, ApplicationPage, ReviewContext};
use super::repository::{ApplicationRepository, RepositoryError};

/// Admin-facing facade over the onboarding review state machine.
///
/// Transitions run sequentially against the injected repository; each one
/// completes fully before the next is accepted. Every invalid action is
/// surfaced to the caller rather than swallowed, since the UI re-displays
/// these as alerts.
pub struct ReviewService<R> {
    repository: Arc<R>,
}

impl<R> ReviewService<R>
where
    R: ApplicationRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// pending → approved, stamping the review date.
    pub fn approve(&self, id: &ApplicationId) -> Result<Application, ReviewError> {
        self.transition(
            id,
            ApplicationStatus::Pending,
            ApplicationStatus::Approved,
            ReviewAction::Approve,
        )
    }

    /// pending → rejected, stamping the review date.
    pub fn reject(&self, id: &ApplicationId) -> Result<Application, ReviewError> {
        self.transition(
            id,
            ApplicationStatus::Pending,
            ApplicationStatus::Rejected,
            ReviewAction::Reject,
        )
    }

    /// rejected → pending. Clears nothing, but the review date is refreshed
    /// so the queue shows when the application re-entered it.
    pub fn reconsider(&self, id: &ApplicationId) -> Result<Application, ReviewError> {
        self.transition(
            id,
            ApplicationStatus::Rejected,
            ApplicationStatus::Pending,
            ReviewAction::Reconsider,
        )
    }

    /// Delete an approved account outright. Removal is only defined for
    /// approved applications being revoked; there is no tombstone.
    pub fn remove(&self, id: &ApplicationId) -> Result<(), ReviewError> {
        let application = self
            .repository
            .fetch(id)?
            .ok_or_else(|| ReviewError::NotFound(id.clone()))?;

        if application.status != ApplicationStatus::Approved {
            return Err(ReviewError::InvalidState {
                action: ReviewAction::Remove,
                current: application.status,
            });
        }

        self.repository.delete(id)?;
        Ok(())
    }

    /// Alias for [`remove`](Self::remove); the console exposes both verbs for
    /// the same revocation operation.
    pub fn revoke(&self, id: &ApplicationId) -> Result<(), ReviewError> {
        self.remove(id)
    }

    /// All applications in insertion order.
    pub fn applications(&self) -> Result<Vec<Application>, ReviewError> {
        Ok(self.repository.list()?)
    }

    /// Filter, sort, and paginate applications for one console view.
    pub fn page(&self, context: &ReviewContext) -> Result<ApplicationPage, ReviewError> {
        let all = self.repository.list()?;
        let filtered = query::filter_applications(
            &all,
            context.tab,
            context.sub_tab,
            context.search_term.as_deref(),
        );
        let sorted = query::sort_applications(&filtered, context.sort);
        Ok(query::paginate(&sorted, context.page, context.page_size))
    }

    fn transition(
        &self,
        id: &ApplicationId,
        expected: ApplicationStatus,
        next: ApplicationStatus,
        action: ReviewAction,
    ) -> Result<Application, ReviewError> {
        let mut application = self
            .repository
            .fetch(id)?
            .ok_or_else(|| ReviewError::NotFound(id.clone()))?;

        if application.status != expected {
            return Err(ReviewError::InvalidState {
                action,
                current: application.status,
            });
        }

        application.status = next;
        application.date_reviewed = Some(Utc::now());
        self.repository.update(application.clone())?;
        Ok(application)
    }
}

/// Error raised by the review service.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("application '{0}' not found")]
    NotFound(ApplicationId),
    #[error("cannot {action} an application that is {current}")]
    InvalidState {
        action: ReviewAction,
        current: ApplicationStatus,
    },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
