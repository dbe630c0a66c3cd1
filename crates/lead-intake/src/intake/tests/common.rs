use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::intake::domain::{LeadId, LeadRecord, LeadSubmission};
use crate::intake::repository::{LeadRepository, RepositoryError};
use crate::intake::service::LeadIntakeService;

pub(super) fn form(
    budget: Option<&str>,
    company_size: Option<&str>,
    deadline: Option<&str>,
    comments: Option<&str>,
) -> LeadSubmission {
    LeadSubmission {
        first_name: Some("Анна".to_string()),
        last_name: Some("Петрова".to_string()),
        business_niche: Some("manufacturing".to_string()),
        budget: budget.map(str::to_string),
        company_size: company_size.map(str::to_string),
        deadline: deadline.map(str::to_string),
        comments: comments.map(str::to_string),
        ..Default::default()
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<Vec<LeadRecord>>>,
}

impl LeadRepository for MemoryRepository {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn update(&self, record: LeadRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        match guard.iter_mut().find(|existing| existing.id == record.id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        Ok(guard.iter().find(|record| record.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<LeadRecord>, RepositoryError> {
        Ok(self.records.lock().expect("lock").clone())
    }
}

/// Repository that is down for maintenance, for error-path tests.
pub(super) struct UnavailableRepository;

impl LeadRepository for UnavailableRepository {
    fn insert(&self, _record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance window".to_string()))
    }

    fn update(&self, _record: LeadRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance window".to_string()))
    }

    fn fetch(&self, _id: LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance window".to_string()))
    }

    fn list(&self) -> Result<Vec<LeadRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance window".to_string()))
    }
}

pub(super) fn build_service() -> (
    Arc<LeadIntakeService<MemoryRepository>>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = Arc::new(LeadIntakeService::new(repository.clone()));
    (service, repository)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    serde_json::from_slice(&bytes).expect("json body")
}
