//! Lead intake, priority scoring, and triage listing.
//!
//! The scorer converts free-text form fields into a bounded score; the
//! service wraps it with the persistence policy (score once on submit,
//! re-score and write through on every listing read) and the router exposes
//! both paths over HTTP.

pub mod domain;
pub mod import;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{LeadId, LeadReceipt, LeadRecord, LeadSubmission, LeadSummaryView};
pub use import::{LeadCsvImporter, LeadImportError};
pub use repository::{LeadRepository, RepositoryError};
pub use router::lead_router;
pub use scoring::{PriorityScorer, ScoreBreakdown, ScoreInput};
pub use service::{LeadIntakeService, LeadServiceError};
