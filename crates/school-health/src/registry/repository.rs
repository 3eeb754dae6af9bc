use super::dataset::SchoolDataset;
use crate::health::domain::{School, SchoolId};
use std::sync::Arc;

/// Read access to school records so the service can be exercised in isolation.
pub trait SchoolRepository: Send + Sync {
    fn schools(&self) -> Result<Vec<School>, RepositoryError>;
    fn fetch(&self, id: &SchoolId) -> Result<Option<School>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("school not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Repository over a dataset loaded at start-up.
#[derive(Debug, Clone, Default)]
pub struct InMemorySchoolRepository {
    dataset: Arc<SchoolDataset>,
}

impl InMemorySchoolRepository {
    pub fn new(dataset: SchoolDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}

impl SchoolRepository for InMemorySchoolRepository {
    fn schools(&self) -> Result<Vec<School>, RepositoryError> {
        Ok(self.dataset.schools().to_vec())
    }

    fn fetch(&self, id: &SchoolId) -> Result<Option<School>, RepositoryError> {
        Ok(self.dataset.find(id).cloned())
    }
}
