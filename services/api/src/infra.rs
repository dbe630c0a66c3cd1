use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use lead_intake::intake::{LeadId, LeadRecord, LeadRepository, RepositoryError};
use lead_intake::metrics::{
    EngagementDraft, EngagementRepository, EngagementSample, EngagementStoreError,
};
use lead_intake::settings::{
    SettingsDraft, SettingsRecord, SettingsRepository, SettingsStoreError,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory lead store. Insertion order doubles as retrieval order, which
/// the triage listing's stable sort relies on.
#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadRepository {
    records: Arc<Mutex<Vec<LeadRecord>>>,
}

impl LeadRepository for InMemoryLeadRepository {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("lead repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn update(&self, record: LeadRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("lead repository mutex poisoned");
        match guard.iter_mut().find(|existing| existing.id == record.id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lead repository mutex poisoned");
        Ok(guard.iter().find(|record| record.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<LeadRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lead repository mutex poisoned");
        Ok(guard.clone())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySettingsRepository {
    revisions: Arc<Mutex<Vec<SettingsRecord>>>,
    sequence: Arc<AtomicU64>,
}

impl SettingsRepository for InMemorySettingsRepository {
    fn insert(&self, draft: SettingsDraft) -> Result<SettingsRecord, SettingsStoreError> {
        let now = Utc::now();
        let record = SettingsRecord {
            id: self.sequence.fetch_add(1, Ordering::Relaxed) + 1,
            services: draft.services,
            budget_range: draft.budget_range,
            created_at: now,
            updated_at: now,
        };
        self.revisions
            .lock()
            .expect("settings mutex poisoned")
            .push(record.clone());
        Ok(record)
    }

    fn latest(&self) -> Result<Option<SettingsRecord>, SettingsStoreError> {
        let guard = self.revisions.lock().expect("settings mutex poisoned");
        Ok(guard.last().cloned())
    }

    fn list(&self) -> Result<Vec<SettingsRecord>, SettingsStoreError> {
        let guard = self.revisions.lock().expect("settings mutex poisoned");
        Ok(guard.clone())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryEngagementRepository {
    samples: Arc<Mutex<Vec<EngagementSample>>>,
    sequence: Arc<AtomicU64>,
}

impl EngagementRepository for InMemoryEngagementRepository {
    fn insert(&self, draft: EngagementDraft) -> Result<EngagementSample, EngagementStoreError> {
        let sample = EngagementSample {
            id: self.sequence.fetch_add(1, Ordering::Relaxed) + 1,
            lead_id: draft.normalized_lead_id(),
            time_on_page: draft.time_on_page,
            buttons_clicked: draft.buttons_clicked,
            cursor_positions: draft.cursor_positions,
            return_visits: draft.return_visits,
            created_at: Utc::now(),
        };
        self.samples
            .lock()
            .expect("engagement mutex poisoned")
            .push(sample.clone());
        Ok(sample)
    }

    fn samples_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<EngagementSample>, EngagementStoreError> {
        let guard = self.samples.lock().expect("engagement mutex poisoned");
        let mut recent: Vec<EngagementSample> = guard
            .iter()
            .filter(|sample| sample.created_at >= cutoff)
            .cloned()
            .collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(recent)
    }
}
