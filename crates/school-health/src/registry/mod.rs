//! Loading school records and serving their health over HTTP.

mod dataset;
mod repository;
mod router;
mod service;

pub use dataset::{DatasetError, SchoolDataset};
pub use repository::{InMemorySchoolRepository, RepositoryError, SchoolRepository};
pub use router::health_router;
pub use service::{HealthServiceError, SchoolHealthService};
