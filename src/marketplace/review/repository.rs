use std::sync::{Arc, Mutex};

use super::domain::{Application, ApplicationId};

/// Storage abstraction so the review service can be exercised in isolation
/// and the eventual persistence backend can be swapped in behind it.
pub trait ApplicationRepository: Send + Sync {
    fn insert(&self, application: Application) -> Result<Application, RepositoryError>;
    fn update(&self, application: Application) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError>;
    fn delete(&self, id: &ApplicationId) -> Result<(), RepositoryError>;
    /// All applications in insertion order.
    fn list(&self) -> Result<Vec<Application>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// In-memory store backing the demo console and tests. Keeps insertion order
/// so default listings stay stable across repeated queries.
#[derive(Debug, Default, Clone)]
pub struct InMemoryApplicationRepository {
    records: Arc<Mutex<Vec<Application>>>,
}

impl InMemoryApplicationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository pre-loaded with `applications`.
    pub fn seeded(applications: Vec<Application>) -> Self {
        Self {
            records: Arc::new(Mutex::new(applications)),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Application>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("store lock poisoned".to_string()))
    }
}

impl ApplicationRepository for InMemoryApplicationRepository {
    fn insert(&self, application: Application) -> Result<Application, RepositoryError> {
        let mut records = self.lock()?;
        if records.iter().any(|existing| existing.id == application.id) {
            return Err(RepositoryError::Conflict);
        }
        records.push(application.clone());
        Ok(application)
    }

    fn update(&self, application: Application) -> Result<(), RepositoryError> {
        let mut records = self.lock()?;
        match records.iter_mut().find(|existing| existing.id == application.id) {
            Some(slot) => {
                *slot = application;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        let records = self.lock()?;
        Ok(records.iter().find(|existing| &existing.id == id).cloned())
    }

    fn delete(&self, id: &ApplicationId) -> Result<(), RepositoryError> {
        let mut records = self.lock()?;
        let before = records.len();
        records.retain(|existing| &existing.id != id);
        if records.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<Application>, RepositoryError> {
        let records = self.lock()?;
        Ok(records.clone())
    }
}
