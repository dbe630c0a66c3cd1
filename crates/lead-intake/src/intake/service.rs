use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use super::domain::{LeadId, LeadRecord, LeadSubmission};
use super::repository::{LeadRepository, RepositoryError};
use super::scoring::PriorityScorer;

/// Service composing the priority scorer and the storage seam.
pub struct LeadIntakeService<R> {
    repository: Arc<R>,
    scorer: PriorityScorer,
}

static LEAD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_lead_id() -> LeadId {
    LeadId(LEAD_SEQUENCE.fetch_add(1, Ordering::Relaxed))
}

impl<R> LeadIntakeService<R>
where
    R: LeadRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            scorer: PriorityScorer,
        }
    }

    /// Accept a new form, score it once, and persist the record.
    pub fn submit(&self, form: LeadSubmission) -> Result<LeadRecord, LeadServiceError> {
        let score = self.scorer.score_form(&form).total();
        let now = Utc::now();
        let record = LeadRecord {
            id: next_lead_id(),
            form,
            priority_score: score,
            created_at: now,
            updated_at: now,
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Return every lead, freshly scored and ranked for triage.
    ///
    /// Each record is re-scored on read; a record whose stored score no
    /// longer matches is rewritten immediately, one write per changed
    /// record. The sort is stable, so equal scores keep the repository's
    /// retrieval order.
    pub fn ranked(&self) -> Result<Vec<LeadRecord>, LeadServiceError> {
        let mut records = self.repository.list()?;

        for record in &mut records {
            let fresh = self.scorer.score_form(&record.form).total();
            if fresh != record.priority_score {
                record.priority_score = fresh;
                record.updated_at = Utc::now();
                self.repository.update(record.clone())?;
                debug!(lead = record.id.0, score = fresh, "rewrote stale priority score");
            }
        }

        records.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));
        Ok(records)
    }

    /// Fetch a single lead for API responses.
    pub fn get(&self, id: LeadId) -> Result<LeadRecord, LeadServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum LeadServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
