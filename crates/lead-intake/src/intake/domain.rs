use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored leads.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct LeadId(pub u64);

/// Raw intake form as submitted by a prospective client.
///
/// Every field is optional free text; the form accepts whatever the landing
/// page sends rather than validating shape at the boundary. Only `budget`,
/// `company_size`, `deadline`, and `comments` feed the priority rubric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadSubmission {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub business_info: Option<String>,
    pub budget: Option<String>,
    pub preferred_contact_method: Option<String>,
    pub comments: Option<String>,
    pub business_niche: Option<String>,
    pub company_size: Option<String>,
    pub task_scope: Option<String>,
    pub user_role: Option<String>,
    pub business_size: Option<String>,
    pub need_volume: Option<String>,
    pub deadline: Option<String>,
    pub task_type: Option<String>,
    pub interested_product: Option<String>,
    pub preferred_contact: Option<String>,
    pub convenient_time: Option<String>,
}

/// Stored lead with its audit timestamps and last computed priority score.
///
/// `updated_at` advances whenever a listing read rewrites a stale score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub id: LeadId,
    pub form: LeadSubmission,
    pub priority_score: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LeadRecord {
    pub fn contact_name(&self) -> String {
        [
            &self.form.last_name,
            &self.form.first_name,
            &self.form.middle_name,
        ]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Minimal acknowledgement returned to the submitting client.
    pub fn receipt(&self) -> LeadReceipt {
        LeadReceipt {
            id: self.id,
            priority_score: self.priority_score,
            created_at: self.created_at,
        }
    }

    /// Row rendered in the staff triage listing.
    pub fn summary(&self) -> LeadSummaryView {
        LeadSummaryView {
            id: self.id,
            contact_name: self.contact_name(),
            budget: self.form.budget.clone(),
            company_size: self.form.company_size.clone(),
            deadline: self.form.deadline.clone(),
            priority_score: self.priority_score,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LeadReceipt {
    pub id: LeadId,
    pub priority_score: u8,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeadSummaryView {
    pub id: LeadId,
    pub contact_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub priority_score: u8,
    pub created_at: DateTime<Utc>,
}
