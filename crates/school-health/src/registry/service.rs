use std::sync::Arc;

use chrono::NaiveDate;

use super::repository::{RepositoryError, SchoolRepository};
use crate::health::domain::{SchoolId, Status};
use crate::health::report::views::{NationalSummaryView, RiskRegister, SchoolHealthView, SchoolRow};
use crate::health::{build_risk_register, national_summary, SchoolHealthReport};

/// Service composing the school repository with the health engine.
pub struct SchoolHealthService<R> {
    repository: Arc<R>,
}

impl<R> SchoolHealthService<R>
where
    R: SchoolRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// National counts for every school the repository holds.
    pub fn national(&self, as_of: NaiveDate) -> Result<NationalSummaryView, HealthServiceError> {
        let schools = self.repository.schools()?;
        Ok(national_summary(&schools, as_of))
    }

    /// Table rows in repository order, optionally restricted to one status.
    pub fn rows(&self, status: Option<Status>) -> Result<Vec<SchoolRow>, HealthServiceError> {
        let schools = self.repository.schools()?;
        let rows = schools
            .iter()
            .map(|school| SchoolHealthReport::build(school).row())
            .filter(|row| status.map_or(true, |wanted| row.status == wanted))
            .collect();
        Ok(rows)
    }

    /// Full health view for a single school.
    pub fn report(&self, school_id: &SchoolId) -> Result<SchoolHealthView, HealthServiceError> {
        let school = self
            .repository
            .fetch(school_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(SchoolHealthReport::build(&school).view())
    }

    pub fn risk_register(&self) -> Result<RiskRegister, HealthServiceError> {
        let schools = self.repository.schools()?;
        Ok(build_risk_register(&schools))
    }
}

impl<R> Clone for SchoolHealthService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Error raised by the school health service.
#[derive(Debug, thiserror::Error)]
pub enum HealthServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl HealthServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(RepositoryError::NotFound))
    }
}
