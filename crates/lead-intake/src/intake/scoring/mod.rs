mod tiers;

use serde::{Deserialize, Serialize};

use super::domain::LeadSubmission;

/// Normalized view of the four form fields the triage rubric reads.
///
/// Built per scoring call and discarded. Fields are lower-cased once here so
/// every downstream comparison is case-insensitive; absent fields become
/// empty strings rather than errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreInput {
    budget: String,
    company_size: String,
    deadline: String,
    comments: String,
}

impl ScoreInput {
    pub fn from_form(form: &LeadSubmission) -> Self {
        Self {
            budget: normalize(form.budget.as_deref()),
            company_size: normalize(form.company_size.as_deref()),
            deadline: normalize(form.deadline.as_deref()),
            comments: normalize(form.comments.as_deref()),
        }
    }
}

fn normalize(field: Option<&str>) -> String {
    field.unwrap_or_default().to_lowercase()
}

/// Per-factor contribution so listings and audits can explain a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub budget: u8,
    pub company_size: u8,
    pub urgency: u8,
}

impl ScoreBreakdown {
    /// Sum of the three factors; always within [20, 100] because every
    /// fallback branch awards its tier floor.
    pub fn total(&self) -> u8 {
        self.budget + self.company_size + self.urgency
    }
}

/// Stateless scorer applying the fixed triage rubric.
///
/// Deterministic and infallible: malformed input degrades to the lowest
/// matching tier instead of failing, so a garbage form never aborts intake
/// or a listing read.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScorer;

impl PriorityScorer {
    pub fn score(&self, input: &ScoreInput) -> ScoreBreakdown {
        ScoreBreakdown {
            budget: tiers::budget_points(&input.budget),
            company_size: tiers::company_size_points(&input.company_size),
            urgency: tiers::urgency_points(&input.deadline, &input.comments),
        }
    }

    /// Convenience for callers holding a raw form rather than a prepared input.
    pub fn score_form(&self, form: &LeadSubmission) -> ScoreBreakdown {
        self.score(&ScoreInput::from_form(form))
    }
}
