use super::domain::{LeadId, LeadRecord};

/// Storage abstraction so the intake service can be exercised in isolation.
///
/// `list` returns the full collection in retrieval order; the triage listing
/// applies a stable sort on top of it, so that order decides how equal
/// scores tie-break.
pub trait LeadRepository: Send + Sync {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError>;
    fn update(&self, record: LeadRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: LeadId) -> Result<Option<LeadRecord>, RepositoryError>;
    fn list(&self) -> Result<Vec<LeadRecord>, RepositoryError>;
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
