//! Visitor engagement samples and their aggregated statistics.
//!
//! The landing page posts samples as it goes; staff read windowed averages
//! and a cursor heatmap. Samples may arrive before any lead exists, so a
//! lead id of 0 marks an anonymous sample and is normalized to absent.

mod router;
mod stats;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::intake::LeadId;

pub use router::{metrics_router, MetricsState};
pub use stats::{engagement_stats, EngagementStats, WindowedAverages};

/// One engagement sample captured by the landing page.
///
/// `buttons_clicked` and `cursor_positions` are opaque JSON text recorded
/// verbatim; only the stats pass interprets them, tolerantly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementSample {
    pub id: u64,
    pub lead_id: Option<LeadId>,
    pub time_on_page: u32,
    pub buttons_clicked: String,
    pub cursor_positions: String,
    pub return_visits: u32,
    pub created_at: DateTime<Utc>,
}

/// Inbound payload; `lead_id` of 0 or absent marks an anonymous sample.
#[derive(Debug, Clone, Deserialize)]
pub struct EngagementDraft {
    #[serde(default)]
    pub lead_id: Option<u64>,
    pub time_on_page: u32,
    pub buttons_clicked: String,
    pub cursor_positions: String,
    #[serde(default)]
    pub return_visits: u32,
}

impl EngagementDraft {
    pub fn normalized_lead_id(&self) -> Option<LeadId> {
        self.lead_id.filter(|id| *id != 0).map(LeadId)
    }
}

/// Storage seam for engagement samples; the store assigns sample ids.
pub trait EngagementRepository: Send + Sync {
    fn insert(&self, draft: EngagementDraft) -> Result<EngagementSample, EngagementStoreError>;
    /// Samples recorded at or after `cutoff`, newest first.
    fn samples_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<EngagementSample>, EngagementStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum EngagementStoreError {
    #[error("engagement store unavailable: {0}")]
    Unavailable(String),
}
